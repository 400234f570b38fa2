//! NYX Backdrop entry point
//!
//! On the web this mounts the particle background. Natively it runs the
//! simulation headless and logs what each frame would draw.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

    log::info!("NYX backdrop starting...");
    nyx_backdrop::platform::start_when_loaded();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use nyx_backdrop::consts::DEFAULT_SEED;
    use nyx_backdrop::renderer::{DrawTarget, Rgba, render_frame};
    use nyx_backdrop::sim::ParticleField;
    use nyx_backdrop::FieldConfig;

    /// Draws nothing; the frame stats are all we want
    struct Headless;

    impl DrawTarget for Headless {
        fn clear(&mut self, _width: f32, _height: f32) {}
        fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Rgba) {}
        fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _width: f32, _color: Rgba) {}
    }

    env_logger::init();

    let frames: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(600);

    let config = FieldConfig::load();
    let seed = config.seed.unwrap_or(DEFAULT_SEED);
    let mut field = ParticleField::new(config, 1280.0, 720.0, seed);
    log::info!(
        "Headless run: {} particles, {}x{}, seed {}, {} frames",
        field.particles().len(),
        field.width(),
        field.height(),
        seed,
        frames
    );

    let mut total_lines = 0usize;
    let mut max_lines = 0usize;
    for _ in 0..frames {
        let stats = render_frame(&mut field, &mut Headless);
        total_lines += stats.connections;
        max_lines = max_lines.max(stats.connections);
        log::trace!("frame {}: {:?}", field.frame, stats);
    }

    let avg = if frames > 0 {
        total_lines as f64 / frames as f64
    } else {
        0.0
    };
    println!("frames: {frames}, connections/frame avg {avg:.1}, max {max_lines}");
}
