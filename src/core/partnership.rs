//! Agency partnership profit simulator and headline typewriter

use std::time::Duration;

/// Fixed production cost per landing page, in BRL
pub const BASE_COST: u32 = 299;

/// Preset prices offered as one-click scenarios
pub const SCENARIO_PRICES: [u32; 3] = [997, 1497, 1997];

pub const MIN_PROJECTS: u32 = 1;
pub const MAX_PROJECTS: u32 = 20;

/// Projects-per-month range plotted on the growth chart
pub const CHART_MAX_PROJECTS: u32 = 12;

/// Scroll offset after which the sticky call-to-action bar appears
pub const STICKY_CTA_AFTER: f64 = 420.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfitSimulator {
    pub price: u32,
    pub projects_per_month: u32,
    pub include_maintenance: bool,
    pub maintenance_fee: u32,
}

impl Default for ProfitSimulator {
    fn default() -> Self {
        Self {
            price: 1497,
            projects_per_month: 5,
            include_maintenance: true,
            maintenance_fee: 99,
        }
    }
}

impl ProfitSimulator {
    pub fn set_price(&mut self, price: u32) {
        self.price = price;
    }

    /// Parse a price typed into the number input; empty or invalid means zero
    pub fn set_price_input(&mut self, raw: &str) {
        self.price = parse_amount(raw);
    }

    pub fn set_projects(&mut self, projects: u32) {
        self.projects_per_month = projects.clamp(MIN_PROJECTS, MAX_PROJECTS);
    }

    pub fn set_maintenance_fee_input(&mut self, raw: &str) {
        self.maintenance_fee = parse_amount(raw);
    }

    pub fn profit_per_project(&self) -> u32 {
        self.price.saturating_sub(BASE_COST)
    }

    /// Monthly profit for `projects` deliveries
    pub fn monthly_profit_for(&self, projects: u32) -> u64 {
        let maintenance = if self.include_maintenance {
            self.maintenance_fee as u64 * projects as u64
        } else {
            0
        };
        self.profit_per_project() as u64 * projects as u64 + maintenance
    }

    pub fn monthly_profit(&self) -> u64 {
        self.monthly_profit_for(self.projects_per_month)
    }

    /// Price over base cost
    pub fn margin_multiplier(&self) -> f64 {
        self.price as f64 / BASE_COST as f64
    }

    pub fn multiplier_label(&self) -> String {
        format!("{:.1}x", self.margin_multiplier())
    }

    /// `(projects, monthly profit)` for 1 through 12 projects
    pub fn chart_points(&self) -> Vec<(u32, u64)> {
        (1..=CHART_MAX_PROJECTS)
            .map(|qty| (qty, self.monthly_profit_for(qty)))
            .collect()
    }

    /// SVG polyline `points` for the growth chart scaled into `width` x `height`
    pub fn chart_polyline(&self, width: f64, height: f64) -> String {
        let points = self.chart_points();
        let max = points.iter().map(|(_, total)| *total).max().unwrap_or(0);
        let last_index = (points.len().max(2) - 1) as f64;
        points
            .iter()
            .enumerate()
            .map(|(i, (_, total))| {
                let x = i as f64 / last_index * width;
                let y = if max == 0 {
                    height
                } else {
                    height - (*total as f64 / max as f64) * height
                };
                format!("{x:.1},{y:.1}")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Caption under the chart
    pub fn summary(&self) -> String {
        let maintenance = if self.include_maintenance {
            format!("manutenção de {}/site", format_brl(self.maintenance_fee as u64))
        } else {
            "sem manutenção".to_string()
        };
        format!(
            "Exemplo com preço de {}, {} projeto(s)/mês e {}.",
            format_brl(self.price as u64),
            self.projects_per_month,
            maintenance
        )
    }
}

/// Profit per project for a preset price
pub fn scenario_profit(price: u32) -> u32 {
    price.saturating_sub(BASE_COST)
}

fn parse_amount(raw: &str) -> u32 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
        .map(|value| value.round().min(u32::MAX as f64) as u32)
        .unwrap_or(0)
}

/// Whole-real BRL amount in pt-BR style, e.g. `R$ 1.497` with a no-break space
pub fn format_brl(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("R$\u{a0}{grouped}")
}

/// Whether the sticky call-to-action is shown at `scroll_y`
pub fn show_sticky_cta(scroll_y: f64) -> bool {
    scroll_y > STICKY_CTA_AFTER
}

/// Value proposition card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benefit {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub highlight: &'static str,
}

pub const BENEFITS: [Benefit; 4] = [
    Benefit {
        icon: "trending-up",
        title: "Mais Lucro para sua Agência",
        description: "Revenda com sua marca e defina sua margem.",
        highlight: "Margem 3x a 5x",
    },
    Benefit {
        icon: "clock",
        title: "Entrega em até 48h",
        description: "Você manda o briefing, eu desenvolvo e entrego pronto para publicar em até 48 horas.",
        highlight: "Velocidade real",
    },
    Benefit {
        icon: "zap",
        title: "Zero Peso Operacional",
        description: "Sem equipe interna, sem gargalos. Você fecha clientes; eu cuido da produção.",
        highlight: "Escala sem dor",
    },
    Benefit {
        icon: "shield",
        title: "Suporte e Qualidade",
        description: "Revisão técnica em todas as entregas + 30 dias de suporte para ajustes simples.",
        highlight: "Confiança total",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        number: "01",
        title: "Você envia o briefing",
        description: "Só alguns pontos-chave do cliente e do objetivo da página.",
    },
    ProcessStep {
        number: "02",
        title: "Eu desenvolvo",
        description: "Criação, copy, layout e publicação, tudo por minha conta.",
    },
    ProcessStep {
        number: "03",
        title: "Entrega em até 48h",
        description: "Você recebe pronto para entregar e faturar.",
    },
    ProcessStep {
        number: "04",
        title: "Você revende",
        description: "Entrega como sendo da sua agência, no preço que quiser.",
    },
];

/// Rotating headline phrases, each with how long it stays after typing (ms)
pub const HEADLINE_ROTATION: [(&str, u32); 2] =
    [("Sites em até 48h", 1200), ("Landings em até 48h", 1800)];

pub const TYPE_STEP: Duration = Duration::from_millis(50);
pub const DELETE_STEP: Duration = Duration::from_millis(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypePhase {
    Typing,
    Holding,
    Deleting,
}

/// Types each phrase, holds it, deletes it and moves to the next, forever
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    phrases: &'static [(&'static str, u32)],
    current: usize,
    shown: usize,
    phase: TypePhase,
}

impl Typewriter {
    pub fn new(phrases: &'static [(&'static str, u32)]) -> Self {
        Self {
            phrases,
            current: 0,
            shown: 0,
            phase: TypePhase::Typing,
        }
    }

    /// Currently visible prefix of the active phrase
    pub fn text(&self) -> String {
        self.phrases
            .get(self.current)
            .map(|(phrase, _)| phrase.chars().take(self.shown).collect())
            .unwrap_or_default()
    }

    /// Advance one keystroke and return the wait before the next one
    pub fn step(&mut self) -> Duration {
        let Some(&(phrase, hold_ms)) = self.phrases.get(self.current) else {
            return TYPE_STEP;
        };
        let len = phrase.chars().count();

        match self.phase {
            TypePhase::Typing => {
                self.shown = (self.shown + 1).min(len);
                if self.shown == len {
                    self.phase = TypePhase::Holding;
                    Duration::from_millis(u64::from(hold_ms))
                } else {
                    TYPE_STEP
                }
            }
            TypePhase::Holding => {
                self.phase = TypePhase::Deleting;
                self.delete_one()
            }
            TypePhase::Deleting => self.delete_one(),
        }
    }

    fn delete_one(&mut self) -> Duration {
        self.shown = self.shown.saturating_sub(1);
        if self.shown == 0 {
            self.current = (self.current + 1) % self.phrases.len().max(1);
            self.phase = TypePhase::Typing;
        }
        DELETE_STEP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let sim = ProfitSimulator::default();
        assert_eq!(sim.profit_per_project(), 1198);
        // 1198 * 5 + 99 * 5
        assert_eq!(sim.monthly_profit(), 6485);
        assert_eq!(sim.multiplier_label(), "5.0x");
    }

    #[test]
    fn test_without_maintenance() {
        let sim = ProfitSimulator {
            include_maintenance: false,
            ..ProfitSimulator::default()
        };
        assert_eq!(sim.monthly_profit(), 5990);
    }

    #[test]
    fn test_price_below_cost_has_no_profit() {
        let mut sim = ProfitSimulator::default();
        sim.set_price(200);
        assert_eq!(sim.profit_per_project(), 0);
        assert_eq!(sim.monthly_profit(), 99 * 5);
        assert_eq!(sim.multiplier_label(), "0.7x");
    }

    #[test]
    fn test_price_input_parsing() {
        let mut sim = ProfitSimulator::default();
        sim.set_price_input("");
        assert_eq!(sim.price, 0);
        sim.set_price_input("1200");
        assert_eq!(sim.price, 1200);
        sim.set_price_input("-5");
        assert_eq!(sim.price, 0);
        sim.set_price_input("abc");
        assert_eq!(sim.price, 0);
    }

    #[test]
    fn test_projects_clamped() {
        let mut sim = ProfitSimulator::default();
        sim.set_projects(0);
        assert_eq!(sim.projects_per_month, 1);
        sim.set_projects(50);
        assert_eq!(sim.projects_per_month, 20);
    }

    #[test]
    fn test_chart_points() {
        let sim = ProfitSimulator::default();
        let points = sim.chart_points();
        assert_eq!(points.len(), 12);
        assert_eq!(points[0], (1, 1297));
        assert_eq!(points[11], (12, 1297 * 12));
    }

    #[test]
    fn test_chart_polyline_spans_box() {
        let line = ProfitSimulator::default().chart_polyline(110.0, 50.0);
        let coords: Vec<&str> = line.split(' ').collect();
        assert_eq!(coords.len(), 12);
        assert_eq!(coords[11], "110.0,0.0");
        assert!(coords[0].starts_with("0.0,"));
    }

    #[test]
    fn test_chart_polyline_flat_at_zero() {
        let sim = ProfitSimulator {
            price: 0,
            include_maintenance: false,
            ..ProfitSimulator::default()
        };
        assert!(sim.chart_polyline(10.0, 5.0).split(' ').all(|p| p.ends_with(",5.0")));
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(0), "R$\u{a0}0");
        assert_eq!(format_brl(997), "R$\u{a0}997");
        assert_eq!(format_brl(1497), "R$\u{a0}1.497");
        assert_eq!(format_brl(1234567), "R$\u{a0}1.234.567");
    }

    #[test]
    fn test_scenarios() {
        let profits: Vec<u32> = SCENARIO_PRICES.iter().map(|p| scenario_profit(*p)).collect();
        assert_eq!(profits, vec![698, 1198, 1698]);
    }

    #[test]
    fn test_sticky_cta_threshold() {
        assert!(!show_sticky_cta(420.0));
        assert!(show_sticky_cta(421.0));
    }

    #[test]
    fn test_summary() {
        let sim = ProfitSimulator::default();
        assert_eq!(
            sim.summary(),
            "Exemplo com preço de R$\u{a0}1.497, 5 projeto(s)/mês e manutenção de R$\u{a0}99/site."
        );
    }
    #[test]
    fn test_typewriter_types_holds_and_moves_on() {
        let mut writer = Typewriter::new(&HEADLINE_ROTATION);
        assert_eq!(writer.text(), "");

        let first = "Sites em até 48h";
        let len = first.chars().count();
        for _ in 1..len {
            assert_eq!(writer.step(), TYPE_STEP);
        }
        assert_eq!(writer.step(), Duration::from_millis(1200));
        assert_eq!(writer.text(), first);

        for _ in 0..len {
            assert_eq!(writer.step(), DELETE_STEP);
        }
        assert_eq!(writer.text(), "");

        writer.step();
        assert_eq!(writer.text(), "L");
    }

    #[test]
    fn test_typewriter_wraps_to_first_phrase() {
        let mut writer = Typewriter::new(&HEADLINE_ROTATION);
        let total: usize = HEADLINE_ROTATION
            .iter()
            .map(|(phrase, _)| 2 * phrase.chars().count())
            .sum();
        for _ in 0..total {
            writer.step();
        }
        writer.step();
        assert_eq!(writer.text(), "S");
    }

    #[test]
    fn test_typewriter_counts_characters_not_bytes() {
        let mut writer = Typewriter::new(&HEADLINE_ROTATION);
        for _ in 0..12 {
            writer.step();
        }
        assert_eq!(writer.text(), "Sites em até");
    }
}
