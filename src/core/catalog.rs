//! Project type and budget catalogs offered by the contact form

use serde::{Deserialize, Serialize};

/// One selectable catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub code: &'static str,
    pub label: &'static str,
}

const fn entry(code: &'static str, label: &'static str) -> CatalogEntry {
    CatalogEntry { code, label }
}

pub const PROJECT_TYPES: &[CatalogEntry] = &[
    entry("premium-website", "Premium Website"),
    entry("interactive-portfolio", "Interactive Portfolio"),
    entry("seo-architecture", "SEO & Growth Architecture"),
    entry("brand-identity", "Brand Identity"),
    entry("consultation", "Strategy Consultation"),
    entry("other", "Other"),
];

pub const BUDGET_RANGES: &[CatalogEntry] = &[
    entry("less-than-1k", "Less than $1,000"),
    entry("1k-5k", "$1,000 - $5,000"),
    entry("5k-10k", "$5,000 - $10,000"),
    entry("10k-20k", "$10,000 - $20,000"),
    entry("more-than-20k", "More than $20,000"),
];

/// Which catalog a code belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Catalog {
    ProjectType,
    BudgetRange,
}

impl Catalog {
    pub fn entries(&self) -> &'static [CatalogEntry] {
        match self {
            Catalog::ProjectType => PROJECT_TYPES,
            Catalog::BudgetRange => BUDGET_RANGES,
        }
    }

    pub fn find(&self, code: &str) -> Option<&'static CatalogEntry> {
        self.entries().iter().find(|entry| entry.code == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    /// Human label for `code`, or the code itself when it is not in the catalog
    pub fn label_or_code<'a>(&self, code: &'a str) -> &'a str {
        match self.find(code) {
            Some(entry) => entry.label,
            None => code,
        }
    }
}
