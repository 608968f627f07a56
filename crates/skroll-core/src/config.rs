use serde::{Deserialize, Serialize};

use crate::error::{SkrollError, SkrollResult};

/// Configuration for the scroll-scrubbed frame sequence.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// Id of the canvas element the frames are drawn onto.
    pub canvas_id: String,
    /// Class of the section whose height defines the scrollable range.
    pub section_class: String,
    /// Number of frames in the sequence.
    pub frame_count: usize,
    /// Path prefix shared by every frame image.
    pub path_prefix: String,
    /// Path suffix (extension) shared by every frame image.
    pub path_suffix: String,
    /// Zero-pad width of the 1-based frame number in the path.
    pub index_pad: usize,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            canvas_id: "hero-canvas".to_string(),
            section_class: "hero-section".to_string(),
            frame_count: 33,
            path_prefix: "/static/images/hero_sequence/ezgif-frame-".to_string(),
            path_suffix: ".jpg".to_string(),
            index_pad: 3,
        }
    }
}

/// Configuration for the fading, drifting content overlay.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Class of the element that receives opacity/transform styling.
    pub content_class: String,
    /// Scroll distance in px over which opacity fades from 1 to 0.
    pub fade_distance: f64,
    /// Vertical shift per scrolled pixel.
    pub parallax_rate: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            content_class: "hero-content".to_string(),
            fade_distance: 500.0,
            parallax_rate: 0.4,
        }
    }
}

/// Configuration for reveal-on-scroll targets.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Class selecting the observed elements.
    pub target_class: String,
    /// Class marking a revealed element as a card grid.
    pub grid_class: String,
    /// Class of the card children inside a grid.
    pub card_class: String,
    /// Class added to an element when it becomes visible.
    pub visible_class: String,
    /// Fraction of the element that must intersect to trigger.
    pub threshold: f64,
    /// Upward shrink of the viewport's bottom edge in px.
    pub bottom_inset: f64,
    /// Delay between consecutive card reveals in ms.
    pub stagger_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            target_class: "reveal-on-scroll".to_string(),
            grid_class: "pricing-grid".to_string(),
            card_class: "pricing-card".to_string(),
            visible_class: "visible".to_string(),
            threshold: 0.1,
            bottom_inset: 50.0,
            stagger_ms: 100,
        }
    }
}

impl RevealConfig {
    /// Root margin string for the intersection observer.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_inset)
    }
}

/// Top-level configuration.
///
/// The defaults reproduce the page contract: 33 hero frames under
/// `/static/images/hero_sequence/`, a 500px overlay fade, and the
/// hero/pricing class names the stylesheet expects.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SkrollConfig {
    #[serde(default)]
    pub sequence: SequenceConfig,
    #[serde(default)]
    pub overlay: OverlayConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
}

impl SkrollConfig {
    /// Parse and validate a JSON configuration string.
    pub fn from_json(json: &str) -> SkrollResult<Self> {
        let config: SkrollConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> SkrollResult<()> {
        if self.sequence.frame_count == 0 {
            return Err(SkrollError::config("frame_count must be at least 1"));
        }
        if self.sequence.canvas_id.is_empty() {
            return Err(SkrollError::config("canvas_id must not be empty"));
        }
        if self.sequence.section_class.is_empty() {
            return Err(SkrollError::config("section_class must not be empty"));
        }
        if self.overlay.fade_distance <= 0.0 {
            return Err(SkrollError::config("fade_distance must be positive"));
        }
        if !(self.reveal.threshold > 0.0 && self.reveal.threshold <= 1.0) {
            return Err(SkrollError::config("threshold must be in (0, 1]"));
        }
        if self.reveal.bottom_inset < 0.0 {
            return Err(SkrollError::config("bottom_inset must not be negative"));
        }
        Ok(())
    }
}
