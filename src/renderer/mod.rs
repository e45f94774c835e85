//! Canvas 2D presentation adapter
//!
//! Paints the current frame from Body state: background, ground, contact
//! shadow, ball. Strictly a consumer - reads the body, never mutates it,
//! and carries no physics.

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::{ColorsConfig, VisualsConfig};
use crate::sim::Body;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    visuals: VisualsConfig,
    colors: ColorsConfig,
}

impl CanvasRenderer {
    /// Acquire the 2D context of `canvas`. Returns None when the context is
    /// unavailable (headless documents).
    pub fn new(
        canvas: &HtmlCanvasElement,
        visuals: VisualsConfig,
        colors: ColorsConfig,
    ) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        Some(Self {
            ctx,
            width: 0.0,
            height: 0.0,
            visuals,
            colors,
        })
    }

    /// Record the drawing size in CSS pixels and rescale for the device
    /// pixel ratio. Call after resizing the canvas backing store - that
    /// resets the 2D context transform.
    pub fn set_size(&mut self, width: f32, height: f32, dpr: f64) {
        self.width = width as f64;
        self.height = height as f64;
        let _ = self.ctx.scale(dpr, dpr);
    }

    /// Paint one complete frame
    pub fn render_frame(&self, body: &Body, ground_y: f32) {
        self.clear();
        self.draw_background();
        self.draw_ground(ground_y as f64);
        self.draw_contact_shadow(body, ground_y as f64);
        self.draw_ball(body);
    }

    fn clear(&self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_background(&self) {
        let gradient = self
            .ctx
            .create_linear_gradient(0.0, 0.0, 0.0, self.height);
        let _ = gradient.add_color_stop(0.0, &self.colors.background.top);
        let _ = gradient.add_color_stop(0.5, &self.colors.background.middle);
        let _ = gradient.add_color_stop(1.0, &self.colors.background.bottom);

        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_ground(&self, ground_y: f64) {
        self.ctx.begin_path();
        self.ctx.move_to(0.0, ground_y);
        self.ctx.line_to(self.width, ground_y);
        self.ctx.set_stroke_style_str(&self.colors.ground.line);
        self.ctx.set_line_width(2.0);
        self.ctx.stroke();

        let gradient = self
            .ctx
            .create_linear_gradient(0.0, ground_y, 0.0, self.height);
        let _ = gradient.add_color_stop(0.0, &self.colors.ground.gradient_start);
        let _ = gradient.add_color_stop(1.0, &self.colors.ground.gradient_end);

        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx
            .fill_rect(0.0, ground_y, self.width, self.height - ground_y);
    }

    /// Elliptical shadow under the ball; shrinks and fades with height
    fn draw_contact_shadow(&self, body: &Body, ground_y: f64) {
        let shadow = self.visuals.shadow;
        let radius = body.radius as f64;

        let distance_to_ground = ground_y - body.pos.y as f64;
        let max_distance = ground_y * 0.8;
        let ratio = distance_to_ground / max_distance;

        let scale = (1.0 - ratio * 0.7).max(shadow.min_scale as f64);
        let alpha = (shadow.max_alpha as f64 - ratio * 0.3).max(shadow.min_alpha as f64);

        let shadow_w = radius * 2.0 * scale;
        let shadow_h = radius * shadow.height_ratio as f64 * scale;

        self.ctx.save();
        self.ctx.begin_path();
        let _ = self.ctx.ellipse(
            body.pos.x as f64,
            ground_y - shadow.offset_y as f64,
            shadow_w,
            shadow_h,
            0.0,
            0.0,
            TAU,
        );
        self.ctx
            .set_fill_style_str(&format!("rgba(0, 0, 0, {alpha})"));
        self.ctx.fill();
        self.ctx.restore();
    }

    fn draw_ball(&self, body: &Body) {
        self.ctx.save();

        let _ = self
            .ctx
            .translate(body.pos.x as f64, body.pos.y as f64);
        let _ = self.ctx.rotate(body.rotation as f64);

        // Squash & stretch while the kick effect is live
        let squash_duration = self.visuals.squash.duration;
        if body.squash_timer > 0.0 && squash_duration > 0.0 {
            let t = body.squash_timer / squash_duration;
            let squash = (body.squash_amount * t) as f64;
            let _ = self.ctx.scale(1.0 + squash, 1.0 - squash * 0.5);
        }

        self.ctx.set_shadow_color(&self.visuals.ball_shadow.color);
        self.ctx
            .set_shadow_blur(self.visuals.ball_shadow.blur as f64);
        self.ctx
            .set_shadow_offset_y(self.visuals.ball_shadow.offset_y as f64);

        self.ctx.begin_path();
        let _ = self.ctx.arc(0.0, 0.0, body.radius as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&self.colors.fallback.ball_fill);
        self.ctx.fill();
        self.ctx
            .set_stroke_style_str(&self.colors.fallback.ball_stroke);
        self.ctx.set_line_width(2.0);
        self.ctx.stroke();

        self.ctx.restore();
    }
}
