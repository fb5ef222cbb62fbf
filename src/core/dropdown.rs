//! Single-select popover state for the contact form dropdowns
//!
//! The project type and budget popovers are independent: opening one does not
//! close the other, and a pointer-down is "outside" per popover.

use super::lead::{LeadCapture, LeadField};

/// Open/closed state of one popover
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropdownState {
    open: bool,
}

impl DropdownState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Pointer went down somewhere on the page
    pub fn pointer_down(&mut self, inside: bool) {
        if !inside {
            self.close();
        }
    }

    /// Key pressed while the page has focus
    pub fn key_down(&mut self, key: &str) {
        if key == "Escape" {
            self.close();
        }
    }
}

/// Both contact form popovers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeadDropdowns {
    pub project_type: DropdownState,
    pub budget_range: DropdownState,
}

impl LeadDropdowns {
    pub fn get(&self, field: LeadField) -> Option<&DropdownState> {
        match field {
            LeadField::ProjectType => Some(&self.project_type),
            LeadField::BudgetRange => Some(&self.budget_range),
            LeadField::Name | LeadField::Email | LeadField::Message => None,
        }
    }

    pub fn get_mut(&mut self, field: LeadField) -> Option<&mut DropdownState> {
        match field {
            LeadField::ProjectType => Some(&mut self.project_type),
            LeadField::BudgetRange => Some(&mut self.budget_range),
            LeadField::Name | LeadField::Email | LeadField::Message => None,
        }
    }

    pub fn key_down(&mut self, key: &str) {
        self.project_type.key_down(key);
        self.budget_range.key_down(key);
    }
}

/// Pick `code` from the popover backing `field`, close it, and record the value
pub fn select_option(
    capture: &mut LeadCapture,
    dropdowns: &mut LeadDropdowns,
    field: LeadField,
    code: &str,
) {
    if let Some(dropdown) = dropdowns.get_mut(field) {
        dropdown.close();
    }
    capture.update_field(field, code);
}
