//! Reveal-on-scroll: one-way visibility transitions driven by an
//! IntersectionObserver, with a staggered cascade for card grids.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use js_sys::Array;
use skroll_core::{stagger_delay_ms, RevealConfig, RevealSet};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::dom;

struct RevealTargets {
    config: RevealConfig,
    elements: Vec<Element>,
    set: RefCell<RevealSet>,
}

/// Owns the intersection observer and the one-way reveal state.
///
/// Elements are registered once at mount and observed until the observer
/// is dropped, which disconnects it.
pub struct RevealObserver {
    observer: IntersectionObserver,
    targets: Rc<RevealTargets>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    /// Observe every reveal target currently in the document.
    ///
    /// Returns None when nothing qualifies or the observer cannot be
    /// constructed; the page simply gets no reveal animations.
    pub fn mount(config: &RevealConfig) -> Option<RevealObserver> {
        let elements = dom::all_by_class(&config.target_class);
        if elements.is_empty() {
            log::info!("no .{} elements; reveal effect idle", config.target_class);
            return None;
        }

        let targets = Rc::new(RevealTargets {
            config: config.clone(),
            set: RefCell::new(RevealSet::new(elements.len())),
            elements,
        });

        let dispatch = Rc::clone(&targets);
        let callback = Closure::wrap(Box::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        dispatch.reveal(&entry.target());
                    }
                }
            },
        ) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        options.set_root_margin(&config.root_margin());
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;

        for element in &targets.elements {
            observer.observe(element);
        }
        log::debug!("observing {} reveal targets", targets.elements.len());

        Some(RevealObserver {
            observer,
            targets,
            _callback: callback,
        })
    }

    /// Number of observed elements.
    pub fn target_count(&self) -> usize {
        self.targets.elements.len()
    }

    /// Number of elements revealed so far.
    pub fn revealed_count(&self) -> usize {
        self.targets.set.borrow().revealed_count()
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl RevealTargets {
    /// Handle the first qualifying intersection of an element: add the
    /// visible class, and cascade card children when it is a grid.
    /// Repeat intersections are no-ops.
    fn reveal(&self, target: &Element) {
        let Some(index) = self.elements.iter().position(|el| el == target) else {
            return;
        };
        if !self.set.borrow_mut().mark_visible(index) {
            return;
        }

        let _ = target.class_list().add_1(&self.config.visible_class);
        log::debug!("reveal target {} visible", index);

        if target.class_list().contains(&self.config.grid_class) {
            self.stagger_cards(target);
        }
    }

    /// Reset each direct card child to its rest state on a delay
    /// proportional to its position, producing the cascading appearance.
    fn stagger_cards(&self, grid: &Element) {
        let children = grid.children();
        let mut cards = Vec::new();
        for i in 0..children.length() {
            let Some(child) = children.item(i) else {
                continue;
            };
            if child.class_list().contains(&self.config.card_class) {
                cards.push(child);
            }
        }

        for (position, card) in cards.into_iter().enumerate() {
            let Ok(card) = card.dyn_into::<HtmlElement>() else {
                continue;
            };
            let delay = stagger_delay_ms(position, self.config.stagger_ms);
            Timeout::new(delay, move || {
                let style = card.style();
                let _ = style.set_property("opacity", "1");
                let _ = style.set_property("transform", "translateY(0)");
            })
            .forget();
        }
    }
}
