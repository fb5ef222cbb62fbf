pub mod audio_player;
pub mod browser;
pub mod common;
pub mod contact;
pub mod footer;
pub mod header;
pub mod icon;
pub mod loading_screen;
pub mod markdown;
pub mod pages;
pub mod parallax;
pub mod scroll_reveal;
pub mod text_split;
pub mod viewport;

pub use audio_player::AudioPlayer;
pub use contact::Contact;
pub use footer::Footer;
pub use header::Header;
pub use icon::{Icon, icons};
pub use loading_screen::{LoadingScreen, use_startup_gate};
pub use markdown::Markdown;
pub use parallax::ParallaxSection;
pub use scroll_reveal::ScrollReveal;
pub use text_split::TextSplit;
pub use viewport::provide_viewport_context;
