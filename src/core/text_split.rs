//! Splitting text into independently animated units

use serde::{Deserialize, Serialize};

use super::motion::{Easing, Pose, Transition, pose_style};

pub const DEFAULT_DURATION_SECONDS: f64 = 0.8;
pub const DEFAULT_STAGGER_SECONDS: f64 = 0.03;

/// CSS transform origin applied to every unit
pub const UNIT_TRANSFORM_ORIGIN: &str = "0% 50% -50px";

/// How the source text is cut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitGranularity {
    #[default]
    Chars,
    Words,
    Lines,
}

/// Timing shared by every unit of one split
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitTiming {
    pub delay_seconds: f64,
    pub duration_seconds: f64,
    pub stagger_seconds: f64,
}

impl Default for SplitTiming {
    fn default() -> Self {
        Self {
            delay_seconds: 0.0,
            duration_seconds: DEFAULT_DURATION_SECONDS,
            stagger_seconds: DEFAULT_STAGGER_SECONDS,
        }
    }
}

impl SplitTiming {
    pub fn new(delay_seconds: f64, duration_seconds: f64, stagger_seconds: f64) -> Self {
        Self {
            delay_seconds,
            duration_seconds,
            stagger_seconds,
        }
    }
}

/// One animated piece of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextSplitUnit {
    pub index: usize,
    pub text: String,
    /// Inter-word space inserted by a word split
    pub is_space: bool,
    pub delay_seconds: f64,
    pub duration_seconds: f64,
}

impl TextSplitUnit {
    pub fn initial_pose() -> Pose {
        Pose::hidden_at(0.0, 100.0).with_rotation_x(-90.0)
    }

    pub fn transition(&self) -> Transition {
        Transition::new(
            self.duration_seconds,
            self.delay_seconds,
            Easing::BackOut(1.7),
        )
    }

    /// Inline style before (`revealed == false`) or after playing
    pub fn style(&self, revealed: bool) -> String {
        let body = if revealed {
            pose_style(&Pose::IDENTITY, Some(&self.transition()))
        } else {
            pose_style(&Self::initial_pose(), None)
        };
        format!(
            "display: inline-block; transform-origin: {UNIT_TRANSFORM_ORIGIN}; {body}"
        )
    }
}

/// Cut `source` into units with staggered delays
pub fn split_text(
    source: &str,
    granularity: SplitGranularity,
    timing: SplitTiming,
) -> Vec<TextSplitUnit> {
    if source.is_empty() {
        return Vec::new();
    }

    let pieces: Vec<(String, bool)> = match granularity {
        SplitGranularity::Chars => source.chars().map(|c| (c.to_string(), false)).collect(),
        SplitGranularity::Words => {
            let words: Vec<&str> = source.split(' ').collect();
            let last = words.len() - 1;
            words
                .into_iter()
                .enumerate()
                .flat_map(|(i, word)| {
                    let space = (i < last).then(|| (" ".to_string(), true));
                    std::iter::once((word.to_string(), false)).chain(space)
                })
                .collect()
        }
        SplitGranularity::Lines => source
            .split('\n')
            .map(|line| (line.to_string(), false))
            .collect(),
    };

    pieces
        .into_iter()
        .enumerate()
        .map(|(index, (text, is_space))| TextSplitUnit {
            index,
            text,
            is_space,
            delay_seconds: timing.delay_seconds + index as f64 * timing.stagger_seconds,
            duration_seconds: timing.duration_seconds,
        })
        .collect()
}

/// Inverse of [`split_text`]
pub fn rejoin(units: &[TextSplitUnit], granularity: SplitGranularity) -> String {
    let separator = match granularity {
        SplitGranularity::Lines => "\n",
        SplitGranularity::Chars | SplitGranularity::Words => "",
    };
    units
        .iter()
        .map(|unit| unit.text.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}
