//! Canvas 2D backend

use std::f64::consts::TAU;

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::{DrawTarget, Rgba};

impl DrawTarget for CanvasRenderingContext2d {
    fn clear(&mut self, width: f32, height: f32) {
        self.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.set_fill_style_str(&color.to_string());
        self.begin_path();
        // Only fails for a negative radius
        let _ = self.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.set_stroke_style_str(&color.to_string());
        self.set_line_width(width as f64);
        self.begin_path();
        self.move_to(from.x as f64, from.y as f64);
        self.line_to(to.x as f64, to.y as f64);
        self.stroke();
    }
}
