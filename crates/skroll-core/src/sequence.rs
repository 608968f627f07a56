use serde::{Deserialize, Serialize};

use crate::config::SequenceConfig;

/// Path pattern for the frame images of a sequence.
///
/// Frame numbers are 1-based and zero-padded, so frame 1 of the default
/// configuration maps to `/static/images/hero_sequence/ezgif-frame-001.jpg`.
/// The pattern is a compatibility contract with the deployed assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FramePaths {
    prefix: String,
    suffix: String,
    pad: usize,
}

impl FramePaths {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>, pad: usize) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            pad,
        }
    }

    /// Path for a 1-based frame number.
    pub fn path(&self, frame_number: usize) -> String {
        format!(
            "{}{:0pad$}{}",
            self.prefix,
            frame_number,
            self.suffix,
            pad = self.pad
        )
    }

    /// Paths for frames 1..=count, in sequence order.
    pub fn all(&self, count: usize) -> Vec<String> {
        (1..=count).map(|i| self.path(i)).collect()
    }
}

impl From<&SequenceConfig> for FramePaths {
    fn from(config: &SequenceConfig) -> Self {
        Self::new(
            config.path_prefix.clone(),
            config.path_suffix.clone(),
            config.index_pad,
        )
    }
}

/// Load state of a single frame image.
///
/// `Ready` records the image's natural dimensions at load time, so the
/// draw path never consults the image handle for geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadState {
    /// Load started, no outcome yet.
    Pending,
    /// Load completed. Dimensions are the natural size in px.
    Ready { width: u32, height: u32 },
    /// Load failed. Terminal: no retry is attempted.
    Failed,
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready { .. })
    }
}

/// Tracks the load state of every frame in a sequence.
///
/// Out-of-range indexes read as `Pending`, which keeps every caller on the
/// "not drawable" path instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadTracker {
    states: Vec<LoadState>,
}

impl LoadTracker {
    pub fn new(frame_count: usize) -> Self {
        Self {
            states: vec![LoadState::Pending; frame_count],
        }
    }

    /// Number of tracked frames.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// State of the frame at a 0-based index.
    pub fn state(&self, index: usize) -> LoadState {
        self.states.get(index).copied().unwrap_or(LoadState::Pending)
    }

    /// True when the frame at `index` finished loading.
    pub fn is_ready(&self, index: usize) -> bool {
        self.state(index).is_ready()
    }

    /// Record a completed load with the image's natural dimensions.
    pub fn mark_ready(&mut self, index: usize, width: u32, height: u32) {
        if let Some(slot) = self.states.get_mut(index) {
            *slot = LoadState::Ready { width, height };
        }
    }

    /// Record a failed load. Ready slots stay ready.
    pub fn mark_failed(&mut self, index: usize) {
        if let Some(slot) = self.states.get_mut(index) {
            if !slot.is_ready() {
                *slot = LoadState::Failed;
            }
        }
    }

    /// Number of frames that finished loading.
    pub fn ready_count(&self) -> usize {
        self.states.iter().filter(|s| s.is_ready()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_zero_padding() {
        let paths = FramePaths::new("/img/frame-", ".jpg", 3);
        assert_eq!(paths.path(1), "/img/frame-001.jpg");
        assert_eq!(paths.path(7), "/img/frame-007.jpg");
        assert_eq!(paths.path(33), "/img/frame-033.jpg");
        assert_eq!(paths.path(100), "/img/frame-100.jpg");
    }

    #[test]
    fn test_default_config_paths() {
        let config = SequenceConfig::default();
        let paths = FramePaths::from(&config);
        assert_eq!(
            paths.path(1),
            "/static/images/hero_sequence/ezgif-frame-001.jpg"
        );
        assert_eq!(
            paths.path(33),
            "/static/images/hero_sequence/ezgif-frame-033.jpg"
        );
    }

    #[test]
    fn test_all_paths_in_order() {
        let paths = FramePaths::new("f-", ".png", 2).all(4);
        assert_eq!(paths, vec!["f-01.png", "f-02.png", "f-03.png", "f-04.png"]);
    }

    #[test]
    fn test_tracker_starts_pending() {
        let tracker = LoadTracker::new(3);
        assert_eq!(tracker.len(), 3);
        assert_eq!(tracker.ready_count(), 0);
        for i in 0..3 {
            assert_eq!(tracker.state(i), LoadState::Pending);
        }
    }

    #[test]
    fn test_tracker_marks_ready_with_dimensions() {
        let mut tracker = LoadTracker::new(3);
        tracker.mark_ready(1, 1280, 720);
        assert!(tracker.is_ready(1));
        assert_eq!(
            tracker.state(1),
            LoadState::Ready {
                width: 1280,
                height: 720
            }
        );
        assert!(!tracker.is_ready(0));
        assert_eq!(tracker.ready_count(), 1);
    }

    #[test]
    fn test_tracker_failed_is_not_ready() {
        let mut tracker = LoadTracker::new(2);
        tracker.mark_failed(0);
        assert_eq!(tracker.state(0), LoadState::Failed);
        assert!(!tracker.is_ready(0));
    }

    #[test]
    fn test_tracker_ready_survives_late_failure() {
        let mut tracker = LoadTracker::new(1);
        tracker.mark_ready(0, 64, 64);
        tracker.mark_failed(0);
        assert!(tracker.is_ready(0));
    }

    #[test]
    fn test_tracker_ignores_out_of_range() {
        let mut tracker = LoadTracker::new(2);
        tracker.mark_ready(9, 10, 10);
        tracker.mark_failed(9);
        assert_eq!(tracker.state(9), LoadState::Pending);
        assert_eq!(tracker.ready_count(), 0);
    }
}
