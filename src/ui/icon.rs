use leptos::prelude::*;

/// SVG icon served from `/icons/{name}.svg`
#[component]
pub fn Icon(
    /// Icon file name without the .svg extension
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icon names shipped in `public/icons`
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const ARROW_UP_RIGHT: &str = "arrow-up-right";
    pub const BAR_CHART: &str = "bar-chart";
    pub const CHECK: &str = "check";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CLOCK: &str = "clock";
    pub const FACEBOOK: &str = "facebook";
    pub const FILE_TEXT: &str = "file-text";
    pub const INSTAGRAM: &str = "instagram";
    pub const LINE_CHART: &str = "line-chart";
    pub const LINKEDIN: &str = "linkedin";
    pub const MENU: &str = "menu";
    pub const MONITOR: &str = "monitor";
    pub const MUSIC: &str = "music";
    pub const PAUSE: &str = "pause";
    pub const PLAY: &str = "play";
    pub const SEND: &str = "send";
    pub const SHIELD: &str = "shield";
    pub const SMARTPHONE: &str = "smartphone";
    pub const SPARKLES: &str = "sparkles";
    pub const TAG: &str = "tag";
    pub const TRENDING_UP: &str = "trending-up";
    pub const TWITTER: &str = "twitter";
    pub const USER: &str = "user";
    pub const USERS: &str = "users";
    pub const X: &str = "x";
    pub const ZAP: &str = "zap";
}
