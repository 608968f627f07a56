//! # skroll-wasm
//!
//! WebAssembly module for the skroll page-effects engine.
//! Binds the scroll-scrubbed hero frame sequence, the fading content
//! overlay, and reveal-on-scroll transitions to the DOM.
//!
//! Pages call [`mount`] once for the default contract, or construct
//! [`PageEffects`] directly for explicit lifecycle control.

mod controller;
mod dom;
mod reveal;

use std::rc::Rc;

use skroll_core::SkrollConfig;
use wasm_bindgen::prelude::*;

use controller::SequenceController;
use reveal::RevealObserver;

thread_local! {
    /// Page-lifetime instance backing `mount` / `unmount`.
    static MOUNTED: std::cell::RefCell<Option<PageEffects>> = std::cell::RefCell::new(None);
}

/// Set up panic reporting and console logging. Runs once at module load.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

/// The page effects: a scroll-scrubbed hero frame sequence plus
/// reveal-on-scroll transitions.
///
/// Constructing binds to the DOM and registers listeners; [`dispose`]
/// detaches everything again. Missing page elements disable the
/// corresponding effect instead of failing construction.
///
/// [`dispose`]: PageEffects::dispose
#[wasm_bindgen]
pub struct PageEffects {
    sequence: Option<Rc<SequenceController>>,
    reveal: Option<RevealObserver>,
}

#[wasm_bindgen]
impl PageEffects {
    /// Bind the effects using the default page contract.
    #[wasm_bindgen(constructor)]
    pub fn new() -> PageEffects {
        Self::from_config(SkrollConfig::default())
    }

    /// Bind the effects using a JSON configuration override.
    ///
    /// Throws a JS error when the JSON is malformed or invalid.
    pub fn with_config(json: &str) -> Result<PageEffects, JsValue> {
        let config =
            SkrollConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_config(config))
    }

    /// Detach all listeners, cancel scheduled redraws, and disconnect the
    /// reveal observer. The canvas keeps its last painted frame.
    pub fn dispose(&mut self) {
        let had_effects = self.sequence.is_some() || self.reveal.is_some();
        if let Some(sequence) = self.sequence.take() {
            sequence.dispose();
        }
        self.reveal.take();
        if had_effects {
            log::info!("skroll effects disposed");
        }
    }

    /// Number of frames in the hero sequence; 0 when the sequence is
    /// disabled.
    pub fn frame_count(&self) -> usize {
        self.sequence.as_ref().map_or(0, |s| s.frame_count())
    }

    /// Currently selected 0-based frame index.
    pub fn current_frame(&self) -> usize {
        self.sequence.as_ref().map_or(0, |s| s.current_frame())
    }

    /// Number of observed reveal targets.
    pub fn reveal_target_count(&self) -> usize {
        self.reveal.as_ref().map_or(0, RevealObserver::target_count)
    }

    /// Number of reveal targets marked visible so far.
    pub fn revealed_count(&self) -> usize {
        self.reveal.as_ref().map_or(0, RevealObserver::revealed_count)
    }
}

impl Default for PageEffects {
    fn default() -> Self {
        Self::new()
    }
}

// The sequence controller's event closures hold Rc handles back to it;
// dropping without dispose would keep that cycle alive.
impl Drop for PageEffects {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl PageEffects {
    fn from_config(config: SkrollConfig) -> PageEffects {
        let sequence = SequenceController::mount(&config);
        if sequence.is_none() {
            log::warn!(
                "no usable #{} canvas; frame sequence disabled",
                config.sequence.canvas_id
            );
        }
        let reveal = RevealObserver::mount(&config.reveal);
        log::info!(
            "skroll mounted: sequence {}, {} reveal targets",
            if sequence.is_some() { "active" } else { "off" },
            reveal.as_ref().map_or(0, RevealObserver::target_count),
        );
        PageEffects { sequence, reveal }
    }
}

/// Mount the default-configured effects for the page's lifetime.
///
/// A second call replaces (and disposes) the previous instance.
#[wasm_bindgen]
pub fn mount() {
    install(PageEffects::new());
}

/// Mount with a JSON configuration override.
#[wasm_bindgen]
pub fn mount_with_config(json: &str) -> Result<(), JsValue> {
    let effects = PageEffects::with_config(json)?;
    install(effects);
    Ok(())
}

/// Dispose the instance created by [`mount`], if any.
#[wasm_bindgen]
pub fn unmount() {
    MOUNTED.with(|slot| {
        if let Some(mut effects) = slot.borrow_mut().take() {
            effects.dispose();
        }
    });
}

/// Get the version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn install(effects: PageEffects) {
    MOUNTED.with(|slot| {
        let mut slot = slot.borrow_mut();
        if let Some(mut previous) = slot.take() {
            previous.dispose();
        }
        *slot = Some(effects);
    });
}
