//! The page background: canvas, resize listener and animation-frame loop

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, Window};

use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::renderer::Scene;
use crate::sim::ParticleField;

pub const CANVAS_ID: &str = "particle-canvas";

const CANVAS_CSS: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
                          pointer-events: none; z-index: -1;";

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// State shared between the frame and resize callbacks
struct Shared {
    scene: Scene<CanvasRenderingContext2d>,
    /// Pending `requestAnimationFrame` handle
    frame_id: Option<i32>,
}

/// The one frame callback, reused for every frame and dropped on stop
type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A mounted particle background. Dropping it tears it down.
pub struct ParticleBackground {
    canvas: HtmlCanvasElement,
    shared: Rc<RefCell<Shared>>,
    on_frame: FrameSlot,
    on_resize: Option<Closure<dyn FnMut(Event)>>,
}

impl ParticleBackground {
    /// Insert the canvas behind the page content and spawn the field
    pub fn mount(config: FieldConfig) -> Result<Self, FieldError> {
        let window = web_sys::window().ok_or(FieldError::NoWindow)?;
        let document = window.document().ok_or(FieldError::NoDocument)?;
        let body = document.body().ok_or(FieldError::NoBody)?;

        let canvas: HtmlCanvasElement = document
            .create_element("canvas")?
            .dyn_into()
            .map_err(|_| FieldError::Dom("created element is not a canvas".into()))?;
        canvas.set_id(CANVAS_ID);
        canvas.style().set_css_text(CANVAS_CSS);

        let (width, height) = viewport_size(&window)?;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or(FieldError::NoContext)?
            .dyn_into()
            .map_err(|_| FieldError::NoContext)?;

        body.insert_before(&canvas, body.first_child().as_ref())?;

        let seed = config.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let count = config.particle_count;
        let field = ParticleField::new(config, width, height, seed);

        let shared = Rc::new(RefCell::new(Shared {
            scene: Scene::new(field, ctx),
            frame_id: None,
        }));

        let mut background = Self {
            canvas,
            shared,
            on_frame: Rc::new(RefCell::new(None)),
            on_resize: None,
        };
        background.listen_resize(&window)?;

        log::info!(
            "Particle background mounted: {} particles, {}x{}, seed {}",
            count,
            width,
            height,
            seed
        );
        Ok(background)
    }

    fn listen_resize(&mut self, window: &Window) -> Result<(), FieldError> {
        let canvas = self.canvas.clone();
        let shared = self.shared.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            match viewport_size(&window) {
                Ok((w, h)) => {
                    // Wipes the bitmap; the scene redraws a still frame itself
                    canvas.set_width(w as u32);
                    canvas.set_height(h as u32);
                    shared.borrow_mut().scene.resize(w, h);
                    log::debug!("Particle canvas resized to {}x{}", w, h);
                }
                Err(e) => log::warn!("Resize ignored: {e}"),
            }
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        self.on_resize = Some(closure);
        Ok(())
    }

    /// Start the animation loop (or draw a still frame for reduced motion)
    pub fn start(&self) -> Result<(), FieldError> {
        let window = web_sys::window().ok_or(FieldError::NoWindow)?;

        let animate = {
            let mut s = self.shared.borrow_mut();
            let still = s.scene.field().config().respect_reduced_motion
                && prefers_reduced_motion(&window);
            if still {
                log::info!("Reduced motion requested, drawing a still frame");
            }
            s.scene.start(still)
        };
        if !animate {
            return Ok(());
        }

        let shared = self.shared.clone();
        let slot = self.on_frame.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_time: f64| {
            let again = {
                let mut s = shared.borrow_mut();
                s.frame_id = None;
                s.scene.tick().is_some()
            };
            if again {
                if let Err(e) = request_frame(&window, &shared, &slot) {
                    log::warn!("Particle loop halted: {e}");
                    shared.borrow_mut().scene.stop();
                }
            }
        });
        *self.on_frame.borrow_mut() = Some(closure);

        let window = web_sys::window().ok_or(FieldError::NoWindow)?;
        request_frame(&window, &self.shared, &self.on_frame)
    }

    pub fn is_running(&self) -> bool {
        self.shared.borrow().scene.is_running()
    }

    /// Stop the loop, drop both callbacks and remove the canvas. Idempotent.
    pub fn stop(&mut self) {
        let pending = {
            let mut s = self.shared.borrow_mut();
            s.scene.stop();
            s.frame_id.take()
        };

        if let Some(window) = web_sys::window() {
            if let Some(id) = pending {
                let _ = window.cancel_animation_frame(id);
            }
            if let Some(closure) = &self.on_resize {
                let _ = window.remove_event_listener_with_callback(
                    "resize",
                    closure.as_ref().unchecked_ref(),
                );
            }
        }

        // The frame callback holds clones of `shared` and the slot; dropping it
        // breaks that cycle so the field and context are freed
        let frame_cb = self.on_frame.borrow_mut().take();
        drop(frame_cb);

        // Detached canvases ignore remove(), so this also covers a failed mount
        self.canvas.remove();
        if self.on_resize.take().is_some() {
            log::info!(
                "Particle background stopped after {} frames",
                self.shared.borrow().scene.field().frame
            );
        }
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Queue the stored frame callback; a no-op once it has been dropped
fn request_frame(
    window: &Window,
    shared: &Rc<RefCell<Shared>>,
    slot: &FrameSlot,
) -> Result<(), FieldError> {
    let id = match slot.borrow().as_ref() {
        Some(closure) => window.request_animation_frame(closure.as_ref().unchecked_ref())?,
        None => return Ok(()),
    };
    shared.borrow_mut().frame_id = Some(id);
    Ok(())
}

fn viewport_size(window: &Window) -> Result<(f32, f32), FieldError> {
    let width = window.inner_width()?.as_f64();
    let height = window.inner_height()?.as_f64();
    match (width, height) {
        (Some(w), Some(h)) => Ok((w as f32, h as f32)),
        _ => Err(FieldError::Dom("viewport size is not a number".into())),
    }
}

fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches())
}
