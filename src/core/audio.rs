//! Floating background music player

use serde::{Deserialize, Serialize};

/// Scroll offset under which the player always stays visible
pub const ALWAYS_VISIBLE_ABOVE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub youtube_id: String,
}

impl Default for Track {
    fn default() -> Self {
        Self {
            id: "1".to_string(),
            title: "Jazz Beats".to_string(),
            artist: "Settle".to_string(),
            youtube_id: "qzyl0f3mRG0".to_string(),
        }
    }
}

impl Track {
    pub fn embed_url(&self) -> String {
        format!(
            "https://www.youtube.com/embed/{}?autoplay=1&controls=1&modestbranding=1&rel=0&showinfo=0",
            self.youtube_id
        )
    }
}

/// Player UI state
#[derive(Debug, Clone, PartialEq)]
pub struct AudioPlayerState {
    pub playing: bool,
    /// Hidden embed is mounted (and therefore playing audio)
    pub embed_mounted: bool,
    pub expanded: bool,
    pub visible: bool,
    pub disabled: bool,
    last_scroll_y: f64,
}

impl AudioPlayerState {
    /// Fresh player; `disabled` comes from the persisted opt-out
    pub fn new(disabled: bool) -> Self {
        Self {
            playing: false,
            embed_mounted: false,
            expanded: false,
            visible: true,
            disabled,
            last_scroll_y: 0.0,
        }
    }

    /// Hide while scrolling down past the top of the page
    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.visible = scroll_y <= self.last_scroll_y || scroll_y <= ALWAYS_VISIBLE_ABOVE;
        self.last_scroll_y = scroll_y;
    }

    pub fn toggle_play(&mut self) {
        if !self.embed_mounted {
            self.embed_mounted = true;
            self.playing = true;
        } else {
            self.playing = !self.playing;
            self.embed_mounted = self.playing;
        }
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Visitor opted out; the caller persists the flag
    pub fn disable(&mut self) {
        self.disabled = true;
        self.playing = false;
        self.embed_mounted = false;
    }

    pub fn status_label(&self) -> &'static str {
        if self.playing { "Now Playing" } else { "Click play to start" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_url() {
        assert_eq!(
            Track::default().embed_url(),
            "https://www.youtube.com/embed/qzyl0f3mRG0?autoplay=1&controls=1&modestbranding=1&rel=0&showinfo=0"
        );
    }

    #[test]
    fn test_visibility_follows_scroll_direction() {
        let mut player = AudioPlayerState::new(false);
        player.on_scroll(80.0);
        assert!(player.visible);
        player.on_scroll(300.0);
        assert!(!player.visible);
        player.on_scroll(250.0);
        assert!(player.visible);
        player.on_scroll(90.0);
        assert!(player.visible);
    }

    #[test]
    fn test_play_pause_mounts_embed() {
        let mut player = AudioPlayerState::new(false);
        player.toggle_play();
        assert!(player.playing && player.embed_mounted);
        player.toggle_play();
        assert!(!player.playing && !player.embed_mounted);
        player.toggle_play();
        assert!(player.playing && player.embed_mounted);
    }

    #[test]
    fn test_disable_stops_playback() {
        let mut player = AudioPlayerState::new(false);
        player.toggle_play();
        player.disable();
        assert!(player.disabled);
        assert!(!player.playing);
        assert!(!player.embed_mounted);
    }
}
