//! Contact form aggregate and its submit-status reducer

use serde::{Deserialize, Serialize};

use super::catalog::Catalog;
use super::error::LeadError;

/// Editable contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum LeadField {
    #[display("name")]
    Name,
    #[display("email")]
    Email,
    #[display("project")]
    ProjectType,
    #[display("budget")]
    BudgetRange,
    #[display("message")]
    Message,
}

impl LeadField {
    pub const ALL: [LeadField; 5] = [
        LeadField::Name,
        LeadField::Email,
        LeadField::ProjectType,
        LeadField::BudgetRange,
        LeadField::Message,
    ];

    /// Catalog backing a dropdown field
    pub fn catalog(&self) -> Option<Catalog> {
        match self {
            LeadField::ProjectType => Some(Catalog::ProjectType),
            LeadField::BudgetRange => Some(Catalog::BudgetRange),
            LeadField::Name | LeadField::Email | LeadField::Message => None,
        }
    }
}

/// Values entered by the visitor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    /// Code from [`Catalog::ProjectType`]
    pub project_type: String,
    /// Code from [`Catalog::BudgetRange`]
    pub budget_range: String,
    pub message: String,
}

impl LeadForm {
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Email => &self.email,
            LeadField::ProjectType => &self.project_type,
            LeadField::BudgetRange => &self.budget_range,
            LeadField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        let slot = match field {
            LeadField::Name => &mut self.name,
            LeadField::Email => &mut self.email,
            LeadField::ProjectType => &mut self.project_type,
            LeadField::BudgetRange => &mut self.budget_range,
            LeadField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_blank(&self, field: LeadField) -> bool {
        self.get(field).trim().is_empty()
    }

    /// Fields that would block a submission
    pub fn missing_fields(&self) -> Vec<LeadField> {
        LeadField::ALL
            .into_iter()
            .filter(|field| {
                self.is_blank(*field)
                    || field
                        .catalog()
                        .is_some_and(|catalog| !catalog.contains(self.get(*field)))
            })
            .collect()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Every field filled and every dropdown value a known catalog code
pub fn validate(form: &LeadForm) -> bool {
    form.missing_fields().is_empty()
}

/// Submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    #[default]
    #[display("idle")]
    Idle,
    #[display("submitting")]
    Submitting,
    #[display("success")]
    Success,
    #[display("error")]
    Error,
}

/// Form values plus submission status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadCapture {
    pub form: LeadForm,
    pub status: SubmitStatus,
}

impl LeadCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Apply an edit; a shown error is dismissed by any edit
    pub fn update_field(&mut self, field: LeadField, value: impl Into<String>) {
        self.form.set(field, value);
        if self.status == SubmitStatus::Error {
            self.status = SubmitStatus::Idle;
        }
    }

    /// Validate and enter `Submitting`, returning the snapshot to send
    pub fn begin_submit(&mut self) -> Result<LeadForm, LeadError> {
        if self.is_submitting() {
            return Err(LeadError::AlreadySubmitting);
        }
        if !validate(&self.form) {
            self.status = SubmitStatus::Error;
            return Err(LeadError::IncompleteFields);
        }
        self.status = SubmitStatus::Submitting;
        Ok(self.form.clone())
    }

    pub fn finish_success(&mut self) {
        if self.is_submitting() {
            self.status = SubmitStatus::Success;
        }
    }

    pub fn finish_error(&mut self) {
        self.status = SubmitStatus::Error;
    }

    /// Clear everything once the success banner has been shown
    pub fn reset_after_success(&mut self) {
        if self.status == SubmitStatus::Success {
            self.form.clear();
            self.status = SubmitStatus::Idle;
        }
    }

    /// Whether `field` should be drawn as invalid
    pub fn highlight_field(&self, field: LeadField) -> bool {
        self.status == SubmitStatus::Error && self.form.is_blank(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> LeadForm {
        LeadForm {
            name: "Ana".to_string(),
            email: "ana@x.io".to_string(),
            project_type: "premium-website".to_string(),
            budget_range: "5k-10k".to_string(),
            message: "Need a site".to_string(),
        }
    }

    #[test]
    fn test_complete_form_validates() {
        assert!(validate(&complete_form()));
    }

    #[test]
    fn test_every_missing_combination_fails() {
        // All 31 non-empty subsets of blanked fields
        for mask in 1u8..32 {
            let mut form = complete_form();
            let mut blanked = Vec::new();
            for (bit, field) in LeadField::ALL.into_iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    form.set(field, "   ");
                    blanked.push(field);
                }
            }
            assert!(!validate(&form), "mask {mask:05b} should fail");
            assert_eq!(form.missing_fields(), blanked);
        }
    }

    #[test]
    fn test_unknown_catalog_code_fails() {
        let mut form = complete_form();
        form.project_type = "rocket".to_string();
        assert_eq!(form.missing_fields(), vec![LeadField::ProjectType]);
    }

    #[test]
    fn test_invalid_submit_sets_error() {
        let mut capture = LeadCapture::new();
        capture.update_field(LeadField::Name, "Ana");
        assert_eq!(capture.begin_submit(), Err(LeadError::IncompleteFields));
        assert_eq!(capture.status, SubmitStatus::Error);
        assert!(capture.highlight_field(LeadField::Email));
        assert!(!capture.highlight_field(LeadField::Name));
    }

    #[test]
    fn test_edit_dismisses_error() {
        let mut capture = LeadCapture::new();
        let _ = capture.begin_submit();
        capture.update_field(LeadField::Email, "a");
        assert_eq!(capture.status, SubmitStatus::Idle);
        assert!(!capture.highlight_field(LeadField::Name));
    }

    #[test]
    fn test_second_submit_is_rejected() {
        let mut capture = LeadCapture {
            form: complete_form(),
            status: SubmitStatus::Idle,
        };
        assert_eq!(capture.begin_submit(), Ok(complete_form()));
        assert_eq!(capture.begin_submit(), Err(LeadError::AlreadySubmitting));
        assert_eq!(capture.status, SubmitStatus::Submitting);
    }

    #[test]
    fn test_success_then_reset_clears() {
        let mut capture = LeadCapture {
            form: complete_form(),
            status: SubmitStatus::Idle,
        };
        capture.begin_submit().unwrap();
        capture.finish_success();
        assert_eq!(capture.status, SubmitStatus::Success);

        capture.reset_after_success();
        assert_eq!(capture, LeadCapture::default());
    }

    #[test]
    fn test_reset_ignored_unless_success() {
        let mut capture = LeadCapture {
            form: complete_form(),
            status: SubmitStatus::Error,
        };
        capture.reset_after_success();
        assert_eq!(capture.form, complete_form());
    }

    #[test]
    fn test_finish_success_requires_submitting() {
        let mut capture = LeadCapture::new();
        capture.finish_success();
        assert_eq!(capture.status, SubmitStatus::Idle);
    }

    #[test]
    fn test_field_display_names() {
        assert_eq!(LeadField::ProjectType.to_string(), "project");
        assert_eq!(SubmitStatus::Submitting.to_string(), "submitting");
    }
}
