//! # skroll-core
//!
//! Core math and state for the skroll page-effects engine.
//! This crate contains everything that does not touch the DOM:
//! configuration, frame paths and load states, scroll-to-frame mapping,
//! cover-fit geometry, the overlay fade law, and reveal bookkeeping.

pub mod config;
pub mod error;
pub mod layout;
pub mod overlay;
pub mod reveal;
pub mod scroll;
pub mod sequence;

pub use config::{OverlayConfig, RevealConfig, SequenceConfig, SkrollConfig};
pub use error::{SkrollError, SkrollResult};
pub use layout::{CoverFit, Size2D};
pub use overlay::{OverlayFade, OverlayStyle};
pub use reveal::{stagger_delay_ms, RevealSet};
pub use scroll::{frame_index, scroll_fraction};
pub use sequence::{FramePaths, LoadState, LoadTracker};
