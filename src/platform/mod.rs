//! Browser platform layer
//!
//! Handles:
//! - Mounting the background once the document is loaded
//! - The page-wide instance and its JS start/stop exports
//!
//! Everything here is wasm32-only; the simulation and renderer build anywhere.

#[cfg(target_arch = "wasm32")]
pub mod background;

#[cfg(target_arch = "wasm32")]
pub use web::*;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use super::background::ParticleBackground;
    use crate::config::FieldConfig;
    use crate::error::FieldError;

    thread_local! {
        static BACKGROUND: RefCell<Option<ParticleBackground>> = const { RefCell::new(None) };
    }

    /// Mount now if the DOM is parsed, otherwise on `DOMContentLoaded`
    pub fn start_when_loaded() {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::warn!("No document, particle background disabled");
            return;
        };

        if document.ready_state() != "loading" {
            start_particles();
            return;
        }

        let callback = Closure::once_into_js(|_event: web_sys::Event| start_particles());
        if let Err(e) = document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        {
            log::warn!("Could not wait for DOMContentLoaded: {e:?}");
        }
    }

    /// Mount and start the page background (no-op if already running)
    #[wasm_bindgen(js_name = startParticles)]
    pub fn start_particles() {
        let already = BACKGROUND.with(|slot| slot.borrow().as_ref().is_some_and(|b| b.is_running()));
        if already {
            return;
        }

        match mount() {
            // Replacing a stopped or still instance drops (and tears down) the old one
            Ok(background) => BACKGROUND.with(|slot| *slot.borrow_mut() = Some(background)),
            Err(e) => log::warn!("Particle background disabled: {e}"),
        }
    }

    /// Stop the page background and remove its canvas
    #[wasm_bindgen(js_name = stopParticles)]
    pub fn stop_particles() {
        let background = BACKGROUND.with(|slot| slot.borrow_mut().take());
        if let Some(mut background) = background {
            background.stop();
        }
    }

    fn mount() -> Result<ParticleBackground, FieldError> {
        let background = ParticleBackground::mount(FieldConfig::load())?;
        background.start()?;
        Ok(background)
    }
}
