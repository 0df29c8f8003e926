//! Timing for the visual transitions of the add funds modal.
//!
//! Flow state changes take effect immediately. The animations here only tell
//! the renderer how to draw the change, so nothing waits on them.

use std::time::Duration;

use serde::Serialize;

/// The transition the modal should play the next time it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalAnimation {
    /// The modal was just opened and slides up into view.
    SlideIn,
    /// The modal was just closed and slides down out of view.
    SlideOut,
}

impl ModalAnimation {
    /// The CSS class that plays this animation.
    pub fn css_class(self) -> &'static str {
        match self {
            ModalAnimation::SlideIn => "modal-slide-in",
            ModalAnimation::SlideOut => "modal-slide-out",
        }
    }
}

/// Durations of the animations used by the wallet screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationConfig {
    /// How long the modal takes to slide into view.
    pub slide_in: Duration,
    /// How long the modal takes to slide out of view before it is removed.
    pub slide_out: Duration,
    /// How long a pressed button stays in its pressed state.
    pub press_reset: Duration,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            slide_in: Duration::from_millis(300),
            slide_out: Duration::from_millis(250),
            press_reset: Duration::from_millis(150),
        }
    }
}

impl AnimationConfig {
    /// The duration of `animation`.
    pub fn duration_of(&self, animation: ModalAnimation) -> Duration {
        match animation {
            ModalAnimation::SlideIn => self.slide_in,
            ModalAnimation::SlideOut => self.slide_out,
        }
    }

    /// The inline style that sets the duration of `animation`, e.g.
    /// "animation-duration: 300ms".
    pub fn style_for(&self, animation: ModalAnimation) -> String {
        format!(
            "animation-duration: {}ms",
            self.duration_of(animation).as_millis()
        )
    }

    /// The inline style that sets how long buttons stay pressed.
    pub fn press_style(&self) -> String {
        format!(
            "transition-duration: {}ms",
            self.press_reset.as_millis()
        )
    }
}
