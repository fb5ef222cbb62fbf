//! WhatsApp handoff: message templates and deep links
//!
//! Leads are not delivered by the site itself. The visitor's answers are
//! rendered into a fixed text template, percent-encoded the way the browser's
//! `encodeURIComponent` does it, and opened as a `wa.me` deep link in a new tab.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::catalog::Catalog;
use super::error::HandoffError;
use super::lead::LeadForm;

/// Characters `encodeURIComponent` leaves untouched besides ASCII alphanumerics
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const DIVIDER: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Fixed parameters of every outbound handoff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandoffSettings {
    /// Destination number in international format, digits only
    pub whatsapp_number: String,
    /// IANA timezone used for the "sent at" stamp
    pub timezone: String,
    /// Referral shown at the bottom of contact messages
    pub contact_referral: String,
    /// Referral shown at the bottom of partnership messages
    pub partnership_referral: String,
}

impl Default for HandoffSettings {
    fn default() -> Self {
        Self {
            whatsapp_number: "557132159293".to_string(),
            timezone: "America/Sao_Paulo".to_string(),
            contact_referral: "johnnightsteel.netlify.app".to_string(),
            partnership_referral: "johnnightsteel.com/parceria".to_string(),
        }
    }
}

impl HandoffSettings {
    fn tz(&self) -> Result<Tz, HandoffError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| HandoffError::InvalidTimezone(self.timezone.clone()))
    }

    /// `wa.me` link carrying `message` as pre-filled text
    pub fn deep_link(&self, message: &str) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.whatsapp_number,
            encode_uri_component(message)
        )
    }
}

/// Percent-encode `input` exactly like `encodeURIComponent`
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// US-style stamp, e.g. `03/15/2025, 02:30 PM`
pub fn format_sent_at_en(instant: DateTime<Utc>, settings: &HandoffSettings) -> Result<String, HandoffError> {
    let local = instant.with_timezone(&settings.tz()?);
    Ok(local.format("%m/%d/%Y, %I:%M %p").to_string())
}

/// Brazilian stamp, e.g. `15/03/2025, 14:30`
pub fn format_sent_at_pt(instant: DateTime<Utc>, settings: &HandoffSettings) -> Result<String, HandoffError> {
    let local = instant.with_timezone(&settings.tz()?);
    Ok(local.format("%d/%m/%Y, %H:%M").to_string())
}

/// Contact form message; field values are inserted untrimmed
pub fn compose_lead_message(
    form: &LeadForm,
    sent_at: DateTime<Utc>,
    settings: &HandoffSettings,
) -> Result<String, HandoffError> {
    let stamp = format_sent_at_en(sent_at, settings)?;
    let project = Catalog::ProjectType.label_or_code(&form.project_type);
    let budget = Catalog::BudgetRange.label_or_code(&form.budget_range);

    Ok(format!(
        "🎯 *NEW PROJECT INQUIRY*\n\
         {DIVIDER}\n\
         \n\
         👤 *Client:* {name}\n\
         📧 *Email:* {email}\n\
         🚀 *Project Type:* {project}\n\
         💰 *Budget:* {budget}\n\
         \n\
         💬 *Message:*\n\
         {message}\n\
         \n\
         {DIVIDER}\n\
         📅 *Sent:* {stamp} (Brazil Time)\n\
         🌐 *Via:* {referral}",
        name = form.name,
        email = form.email,
        message = form.message,
        referral = settings.contact_referral,
    ))
}

/// Agency partnership enquiry message
pub fn compose_partnership_message(
    sent_at: DateTime<Utc>,
    settings: &HandoffSettings,
) -> Result<String, HandoffError> {
    let stamp = format_sent_at_pt(sent_at, settings)?;
    Ok(format!(
        "🤝 *Parceria para Agências*\n\
         {DIVIDER}\n\
         \n\
         👋 Olá! Tenho interesse em conhecer melhor como funciona a parceria de landings rápidas.\n\
         \n\
         🎯 *Interesse:*  \n\
         Quero entender os próximos passos e como podemos começar.\n\
         \n\
         {DIVIDER}\n\
         📅 *Enviado em:* {stamp}\n\
         🌐 *Via:* {referral}",
        referral = settings.partnership_referral,
    ))
}

/// Opens URLs in a new browsing context
pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<(), HandoffError>;
}

/// [`LinkOpener`] that records every URL instead of opening it
#[derive(Debug, Clone, Default)]
pub struct RecordingOpener {
    opened: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
    blocked: bool,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opener that fails every call as a blocked popup
    pub fn blocking() -> Self {
        Self {
            blocked: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<(), HandoffError> {
        if self.blocked {
            return Err(HandoffError::PopupBlocked);
        }
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-03-15T17:30:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn ana() -> LeadForm {
        LeadForm {
            name: "Ana".to_string(),
            email: "ana@x.io".to_string(),
            project_type: "premium-website".to_string(),
            budget_range: "5k-10k".to_string(),
            message: "Need a site".to_string(),
        }
    }

    #[test]
    fn test_divider_width() {
        assert_eq!(DIVIDER.chars().count(), 29);
    }

    #[test]
    fn test_en_stamp_in_sao_paulo() {
        let stamp = format_sent_at_en(instant(), &HandoffSettings::default()).unwrap();
        assert_eq!(stamp, "03/15/2025, 02:30 PM");
    }

    #[test]
    fn test_pt_stamp_in_sao_paulo() {
        let stamp = format_sent_at_pt(instant(), &HandoffSettings::default()).unwrap();
        assert_eq!(stamp, "15/03/2025, 14:30");
    }

    #[test]
    fn test_midnight_renders_as_twelve_am() {
        let midnight = DateTime::parse_from_rfc3339("2025-01-02T03:05:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let stamp = format_sent_at_en(midnight, &HandoffSettings::default()).unwrap();
        assert_eq!(stamp, "01/02/2025, 12:05 AM");
    }

    #[test]
    fn test_invalid_timezone() {
        let settings = HandoffSettings {
            timezone: "Mars/Olympus".to_string(),
            ..HandoffSettings::default()
        };
        assert_eq!(
            compose_lead_message(&ana(), instant(), &settings),
            Err(HandoffError::InvalidTimezone("Mars/Olympus".to_string()))
        );
    }

    #[test]
    fn test_lead_message_template() {
        let message = compose_lead_message(&ana(), instant(), &HandoffSettings::default()).unwrap();
        let expected = [
            "🎯 *NEW PROJECT INQUIRY*",
            DIVIDER,
            "",
            "👤 *Client:* Ana",
            "📧 *Email:* ana@x.io",
            "🚀 *Project Type:* Premium Website",
            "💰 *Budget:* $5,000 - $10,000",
            "",
            "💬 *Message:*",
            "Need a site",
            "",
            DIVIDER,
            "📅 *Sent:* 03/15/2025, 02:30 PM (Brazil Time)",
            "🌐 *Via:* johnnightsteel.netlify.app",
        ]
        .join("\n");
        assert_eq!(message, expected);
    }

    #[test]
    fn test_lead_message_keeps_raw_values() {
        let mut form = ana();
        form.name = "  Ana  ".to_string();
        form.project_type = "rocket".to_string();
        let message = compose_lead_message(&form, instant(), &HandoffSettings::default()).unwrap();
        assert!(message.contains("👤 *Client:*   Ana  \n"));
        assert!(message.contains("🚀 *Project Type:* rocket\n"));
    }

    #[test]
    fn test_partnership_message_template() {
        let message = compose_partnership_message(instant(), &HandoffSettings::default()).unwrap();
        let lines: Vec<&str> = message.split('\n').collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "🤝 *Parceria para Agências*");
        assert_eq!(lines[5], "🎯 *Interesse:*  ");
        assert_eq!(lines[9], "📅 *Enviado em:* 15/03/2025, 14:30");
        assert_eq!(lines[10], "🌐 *Via:* johnnightsteel.com/parceria");
    }

    #[test]
    fn test_encode_matches_encode_uri_component() {
        assert_eq!(
            encode_uri_component("a-b_c.d!e~f*g'h(i)j"),
            "a-b_c.d!e~f*g'h(i)j"
        );
        assert_eq!(encode_uri_component("a b&c=d/e?"), "a%20b%26c%3Dd%2Fe%3F");
        assert_eq!(encode_uri_component("\n$"), "%0A%24");
        assert_eq!(encode_uri_component("ç"), "%C3%A7");
        assert_eq!(encode_uri_component("🎯"), "%F0%9F%8E%AF");
    }

    #[test]
    fn test_deep_link() {
        let link = HandoffSettings::default().deep_link("Hi there");
        assert_eq!(link, "https://wa.me/557132159293?text=Hi%20there");
    }

    #[test]
    fn test_recording_opener() {
        let opener = RecordingOpener::new();
        opener.open("https://wa.me/1").unwrap();
        assert_eq!(opener.opened(), vec!["https://wa.me/1".to_string()]);

        let blocked = RecordingOpener::blocking();
        assert_eq!(blocked.open("x"), Err(HandoffError::PopupBlocked));
        assert!(blocked.opened().is_empty());
    }
}
