//! Header navigation state

use std::time::Duration;

/// Scroll offset past which the header switches to its solid style
pub const HEADER_SOLID_AFTER: f64 = 50.0;

/// Viewport width at which the desktop menu replaces the mobile drawer
pub const DESKTOP_MIN_WIDTH: f64 = 768.0;

/// Wait after navigating home before scrolling to the section
pub const HOME_SCROLL_DELAY: Duration = Duration::from_millis(100);

/// Landing page sections reachable from the menu, as (label, element id)
pub const MENU_SECTIONS: [(&str, &str); 5] = [
    ("About", "about"),
    ("Services", "services"),
    ("Sites", "sites"),
    ("Journal", "journal"),
    ("Contact", "contact"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub scrolled: bool,
    pub mobile_menu_open: bool,
}

impl HeaderState {
    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > HEADER_SOLID_AFTER;
    }

    pub fn on_resize(&mut self, viewport_width: f64) {
        if viewport_width >= DESKTOP_MIN_WIDTH {
            self.mobile_menu_open = false;
        }
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }
}

/// Where a section link should go from `current_path`
///
/// Sections only exist on the landing page, so from any other page the link
/// first navigates home and scrolls once the page has rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionJump {
    ScrollInPlace(String),
    NavigateHomeThenScroll(String),
}

pub fn section_jump(current_path: &str, section_id: &str) -> SectionJump {
    if current_path == "/" {
        SectionJump::ScrollInPlace(section_id.to_string())
    } else {
        SectionJump::NavigateHomeThenScroll(section_id.to_string())
    }
}
