//! A field bound to a draw target, plus the run state deciding when it draws
//!
//! The browser loop asks `tick()` on every animation frame and only
//! reschedules when it returns a frame.

use super::{DrawTarget, FrameStats, draw_field, render_frame};
use crate::sim::ParticleField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Built, not started yet
    Idle,
    /// Drawing every frame
    Animating,
    /// One still frame, redrawn on resize (reduced motion)
    Still,
    /// Torn down; never draws again
    Stopped,
}

pub struct Scene<T> {
    field: ParticleField,
    target: T,
    mode: Mode,
}

impl<T: DrawTarget> Scene<T> {
    pub fn new(field: ParticleField, target: T) -> Self {
        Self {
            field,
            target,
            mode: Mode::Idle,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Returns true when the caller should schedule the first frame.
    ///
    /// With `still` set a single frame is drawn now and nothing is scheduled.
    pub fn start(&mut self, still: bool) -> bool {
        if self.mode != Mode::Idle {
            return false;
        }
        if still {
            draw_field(&self.field, &mut self.target);
            self.mode = Mode::Still;
            return false;
        }
        self.mode = Mode::Animating;
        true
    }

    /// One animation frame. `None` means nothing was drawn and the loop ends.
    pub fn tick(&mut self) -> Option<FrameStats> {
        if self.mode != Mode::Animating {
            return None;
        }
        Some(render_frame(&mut self.field, &mut self.target))
    }

    /// New bounds. Resizing a canvas wipes it, so a still scene redraws.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.field.resize(width, height);
        if self.mode == Mode::Still {
            self.target.clear(width, height);
            draw_field(&self.field, &mut self.target);
        }
    }

    pub fn stop(&mut self) {
        self.mode = Mode::Stopped;
    }

    pub fn is_running(&self) -> bool {
        self.mode == Mode::Animating
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfig;
    use crate::renderer::tests::{Op, Recorder};

    fn scene() -> Scene<Recorder> {
        let field = ParticleField::new(FieldConfig::default(), 800.0, 600.0, 11);
        Scene::new(field, Recorder::default())
    }

    #[test]
    fn test_idle_scene_does_not_draw() {
        let mut scene = scene();
        assert_eq!(scene.mode(), Mode::Idle);
        assert!(scene.tick().is_none());
        assert!(scene.target().ops.is_empty());
    }

    #[test]
    fn test_start_animates_each_tick() {
        let mut scene = scene();
        assert!(scene.start(false));
        assert!(scene.is_running());

        let stats = scene.tick().unwrap();
        assert_eq!(stats.particles, 50);
        assert!(scene.tick().is_some());
        assert_eq!(scene.field().frame, 2);

        // Starting twice does not schedule a second loop
        assert!(!scene.start(false));
    }

    #[test]
    fn test_stopped_scene_never_draws_again() {
        let mut scene = scene();
        scene.start(false);
        scene.tick();
        let drawn = scene.target().ops.len();

        scene.stop();

        // A frame callback that was already queued arrives late
        assert!(scene.tick().is_none());
        assert!(!scene.is_running());
        assert_eq!(scene.target().ops.len(), drawn);
        assert_eq!(scene.field().frame, 1);

        // Resizes and restarts after stop are inert too
        scene.resize(100.0, 100.0);
        assert!(!scene.start(false));
        assert!(!scene.start(true));
        assert_eq!(scene.target().ops.len(), drawn);
    }

    #[test]
    fn test_still_frame_drawn_once_without_loop() {
        let mut scene = scene();
        assert!(!scene.start(true));
        assert_eq!(scene.mode(), Mode::Still);

        let drawn = scene.target().ops.len();
        assert!(drawn >= 50);
        assert!(scene.tick().is_none());
        assert_eq!(scene.target().ops.len(), drawn);
        assert_eq!(scene.field().frame, 0);
    }

    #[test]
    fn test_still_frame_redrawn_after_resize() {
        let mut scene = scene();
        scene.start(true);
        let drawn = scene.target().ops.len();

        scene.resize(640.0, 480.0);

        let ops = &scene.target().ops[drawn..];
        assert_eq!(ops[0], Op::Clear(640.0, 480.0));
        assert_eq!(ops.len(), drawn + 1);
        assert_eq!(scene.field().frame, 0, "still frames never step");
    }

    #[test]
    fn test_animating_resize_waits_for_next_tick() {
        let mut scene = scene();
        scene.start(false);
        scene.resize(640.0, 480.0);
        assert!(scene.target().ops.is_empty());

        scene.tick();
        assert_eq!(scene.target().ops[0], Op::Clear(640.0, 480.0));
    }
}
