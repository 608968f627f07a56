use serde::{Deserialize, Serialize};

use crate::config::OverlayConfig;

/// Style values for the hero content overlay at one scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayStyle {
    /// Opacity in [0, 1].
    pub opacity: f64,
    /// Vertical shift in px. Grows without bound as the page scrolls.
    pub translate_y: f64,
}

impl OverlayStyle {
    /// CSS transform value: the centering anchor composed with the shift.
    pub fn transform_value(&self) -> String {
        format!("translate(-50%, calc(-50% + {}px))", self.translate_y)
    }
}

/// The overlay animation law: fade out over a fixed scroll distance while
/// drifting downward at a fraction of the scroll speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayFade {
    pub fade_distance: f64,
    pub parallax_rate: f64,
}

impl OverlayFade {
    pub fn new(fade_distance: f64, parallax_rate: f64) -> Self {
        Self {
            fade_distance,
            parallax_rate,
        }
    }

    /// Style at a given scroll offset.
    ///
    /// Opacity reaches 0 at `fade_distance` and stays there; the vertical
    /// shift keeps growing, so content keeps drifting after it turns
    /// invisible.
    pub fn style_at(&self, scroll_top: f64) -> OverlayStyle {
        let opacity = if self.fade_distance > 0.0 {
            (1.0 - scroll_top / self.fade_distance).clamp(0.0, 1.0)
        } else if scroll_top > 0.0 {
            0.0
        } else {
            1.0
        };
        OverlayStyle {
            opacity,
            translate_y: scroll_top * self.parallax_rate,
        }
    }
}

impl From<&OverlayConfig> for OverlayFade {
    fn from(config: &OverlayConfig) -> Self {
        Self::new(config.fade_distance, config.parallax_rate)
    }
}
