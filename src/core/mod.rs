//! Core site logic: animation orchestration, lead capture and handoff, content

#[cfg(feature = "ssr")]
pub mod config;
pub mod error;
#[cfg(test)]
mod tests;

pub mod audio;
pub mod carousel;
pub mod catalog;
pub mod content;
pub mod dropdown;
pub mod handoff;
pub mod lead;
pub mod motion;
pub mod navigation;
pub mod parallax;
pub mod partnership;
pub mod pipeline;
pub mod preferences;
pub mod reveal;
pub mod schedule;
pub mod startup;
pub mod text_split;
pub mod viewport;

pub use error::{HandoffError, LeadError, StorageError};
