//! Common reusable UI components

pub mod button;
pub mod dropdown;
pub mod form;
pub mod message;

pub use button::{Button, ButtonSize, ButtonVariant, IconButton};
pub use dropdown::SelectDropdown;
pub use form::{FormField, TextAreaField};
pub use message::{ErrorMessage, SuccessMessage};
