//! The scroll-scrubbed hero sequence: image preloading, frame selection,
//! cover-fit drawing, and the fading content overlay.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use skroll_core::{
    frame_index, scroll_fraction, CoverFit, FramePaths, LoadState, LoadTracker, OverlayFade,
    Size2D, SkrollConfig,
};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, HtmlImageElement};

use crate::dom;

/// Drives the hero canvas: owns the frame image handles, tracks their load
/// states, and redraws on scroll and resize.
///
/// At most one animation frame is scheduled at a time. Scroll events that
/// arrive while a redraw is pending only overwrite the target frame, so
/// the paint that fires reflects the newest scroll position.
pub struct SequenceController {
    frame_count: usize,
    fade: OverlayFade,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    section: Option<HtmlElement>,
    content: Option<HtmlElement>,
    images: RefCell<Vec<Option<HtmlImageElement>>>,
    loads: RefCell<LoadTracker>,
    current_frame: Cell<usize>,
    pending_frame: Cell<Option<usize>>,
    frame_handle: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl SequenceController {
    /// Bind to the page and start preloading.
    ///
    /// Returns None when the hero canvas or its 2D context is missing,
    /// which disables the sequence entirely. A missing hero section only
    /// disables scrubbing (the overlay needs just the scroll offset), and
    /// a missing content element only disables the overlay.
    pub fn mount(config: &SkrollConfig) -> Option<Rc<Self>> {
        let canvas = dom::element_by_id(&config.sequence.canvas_id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        let section = dom::first_by_class(&config.sequence.section_class).and_then(dom::into_html);
        let content = dom::first_by_class(&config.overlay.content_class).and_then(dom::into_html);
        if section.is_none() {
            log::warn!(
                "no .{} element; frame scrubbing disabled",
                config.sequence.section_class
            );
        }
        if content.is_none() {
            log::warn!(
                "no .{} element; overlay fade disabled",
                config.overlay.content_class
            );
        }

        let controller = Rc::new(Self {
            frame_count: config.sequence.frame_count,
            fade: OverlayFade::from(&config.overlay),
            canvas,
            context,
            section,
            content,
            images: RefCell::new(Vec::new()),
            loads: RefCell::new(LoadTracker::new(config.sequence.frame_count)),
            current_frame: Cell::new(0),
            pending_frame: Cell::new(None),
            frame_handle: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });

        // size the surface, pick the frame, and style the overlay for the
        // live scroll position before any load can complete, so a mid-page
        // reload paints right
        controller.on_resize();
        controller.update_overlay(dom::scroll_top());
        controller.preload(&FramePaths::from(&config.sequence));
        controller.install_listeners();
        Some(controller)
    }

    /// Number of frames in the sequence.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Currently selected 0-based frame index.
    pub fn current_frame(&self) -> usize {
        self.current_frame.get()
    }

    /// Detach listeners and cancel any scheduled redraw. The canvas keeps
    /// its last painted frame.
    pub fn dispose(&self) {
        self.listeners.borrow_mut().clear();
        self.frame_handle.borrow_mut().take();
        self.pending_frame.set(None);
    }

    /// Create the frame image handles and start their loads.
    ///
    /// Fire-and-forget: slots flip to ready or failed as the browser
    /// finishes each fetch, and a completed load of the currently-selected
    /// frame schedules a redraw. At rest that is frame 0, so the first
    /// arriving frame paints the canvas without waiting for a scroll.
    fn preload(self: &Rc<Self>, paths: &FramePaths) {
        let mut images = Vec::with_capacity(self.frame_count);
        let mut listeners = self.listeners.borrow_mut();
        for slot in 0..self.frame_count {
            let image = match HtmlImageElement::new() {
                Ok(image) => image,
                Err(_) => {
                    self.loads.borrow_mut().mark_failed(slot);
                    images.push(None);
                    continue;
                }
            };
            let path = paths.path(slot + 1);

            let controller = Rc::clone(self);
            let loaded = image.clone();
            listeners.push(EventListener::once(&image, "load", move |_| {
                controller.loads.borrow_mut().mark_ready(
                    slot,
                    loaded.natural_width(),
                    loaded.natural_height(),
                );
                if controller.current_frame.get() == slot {
                    controller.schedule_redraw(slot);
                }
            }));

            let controller = Rc::clone(self);
            let failed_path = path.clone();
            listeners.push(EventListener::once(&image, "error", move |_| {
                controller.loads.borrow_mut().mark_failed(slot);
                log::warn!("frame image failed to load: {}", failed_path);
            }));

            image.set_src(&path);
            images.push(Some(image));
        }
        *self.images.borrow_mut() = images;
    }

    fn install_listeners(self: &Rc<Self>) {
        let Some(window) = dom::window() else {
            return;
        };

        let controller = Rc::clone(self);
        let scroll = EventListener::new(&window, "scroll", move |_| controller.on_scroll());
        let controller = Rc::clone(self);
        let resize = EventListener::new(&window, "resize", move |_| controller.on_resize());

        let mut listeners = self.listeners.borrow_mut();
        listeners.push(scroll);
        listeners.push(resize);
    }

    /// Scroll handler: restyle the overlay synchronously, then coalesce
    /// the canvas redraw onto the next animation frame.
    fn on_scroll(self: &Rc<Self>) {
        let scroll_top = dom::scroll_top();
        self.update_overlay(scroll_top);

        let Some(section_height) = self.section_height() else {
            return;
        };
        let Some((_, viewport_height)) = dom::viewport_size() else {
            return;
        };
        let fraction = scroll_fraction(scroll_top, section_height, viewport_height);
        let target = frame_index(fraction, self.frame_count);
        self.current_frame.set(target);
        self.schedule_redraw(target);
    }

    /// Resize handler: match the surface to the viewport and repaint from
    /// the live scroll position. Also runs once at mount.
    fn on_resize(&self) {
        let Some((width, height)) = dom::viewport_size() else {
            return;
        };
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);

        if let Some(section_height) = self.section_height() {
            let fraction = scroll_fraction(dom::scroll_top(), section_height, height);
            self.current_frame.set(frame_index(fraction, self.frame_count));
        }
        self.draw_frame(self.current_frame.get());
    }

    fn section_height(&self) -> Option<f64> {
        self.section.as_ref().map(|s| s.offset_height() as f64)
    }

    /// Remember the newest target and keep at most one animation-frame
    /// callback in flight.
    fn schedule_redraw(self: &Rc<Self>, target: usize) {
        self.pending_frame.set(Some(target));
        if self.frame_handle.borrow().is_some() {
            return;
        }
        let controller = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            controller.frame_handle.borrow_mut().take();
            if let Some(target) = controller.pending_frame.take() {
                controller.draw_frame(target);
            }
        });
        *self.frame_handle.borrow_mut() = Some(handle);
    }

    /// Paint one frame with cover-fit scaling.
    ///
    /// No-ops unless the slot's image finished loading, so a stale frame
    /// stays on screen rather than flashing blank.
    fn draw_frame(&self, index: usize) {
        let LoadState::Ready { width, height } = self.loads.borrow().state(index) else {
            return;
        };
        let surface = Size2D::new(self.canvas.width() as f64, self.canvas.height() as f64);
        let image_size = Size2D::new(width as f64, height as f64);
        let Some(fit) = CoverFit::compute(surface, image_size) else {
            return;
        };

        let images = self.images.borrow();
        let Some(Some(image)) = images.get(index) else {
            return;
        };
        self.context
            .clear_rect(0.0, 0.0, surface.width, surface.height);
        if let Err(err) = self
            .context
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                image,
                0.0,
                0.0,
                image_size.width,
                image_size.height,
                fit.offset_x,
                fit.offset_y,
                fit.width,
                fit.height,
            )
        {
            log::warn!("draw failed for frame {}: {:?}", index, err);
        }
    }

    fn update_overlay(&self, scroll_top: f64) {
        let Some(content) = &self.content else {
            return;
        };
        let style = self.fade.style_at(scroll_top);
        let css = content.style();
        let _ = css.set_property("opacity", &style.opacity.to_string());
        let _ = css.set_property("transform", &style.transform_value());
    }
}
