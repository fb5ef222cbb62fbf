//! Routed pages
//!
//! - Landing page (every section of the portfolio)
//! - Journal article reader
//! - Agency partnership pitch
//! - Not found fallback

mod landing;
mod not_found;
mod partnership;
mod post;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
pub use partnership::PartnershipPage;
pub use post::PostPage;
