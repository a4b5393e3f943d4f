use glam::Vec2;
use stadium_core::structure::{
    aisle_rings, field_radius, main_screen, outer_wall_radius_2d, stair_steps, AisleRing, Rect,
    Screen, StairStep,
};
use stadium_core::{
    css_hex, hover_target, Seat, StadiumConfig, ZoomTransform, COLOR_BACKGROUND, COLOR_EMPTY,
    COLOR_EMPTY_STROKE, COLOR_FIELD, COLOR_FIELD_STROKE, COLOR_FILLED, COLOR_FILLED_STROKE,
    COLOR_STAIRS, COLOR_STAGE, COLOR_WALL, COLOR_WALL_STROKE, SEAT_DOT_HOVER_RADIUS,
    SEAT_DOT_RADIUS, STAGE_RADIUS, STEP_DOT_RADIUS,
};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const SCREEN_FILL: &str = "#2196f3";
const SCREEN_STROKE: &str = "#1976d2";
const PANEL_FILL: &str = "#1565c0";
const PANEL_STROKE: &str = "#0d47a1";
const SCAN_LINE: &str = "#64b5f6";
const STAGE_STROKE: &str = "#d63031";
const STAGE_INNER_FILL: &str = "#ee5a6f";
const STAGE_INNER_STROKE: &str = "#c44569";
const LABEL_FONT: &str = "bold 2px sans-serif";

/// Top-down seat map drawn on a 2D canvas. World units map to canvas pixels
/// through `transform`.
pub struct MapView {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    config: StadiumConfig,
    seats: Vec<Seat>,
    steps: Vec<StairStep>,
    rings: Vec<AisleRing>,
    screen: Screen,
    pub transform: ZoomTransform,
    pub hovered: Option<usize>,
}

impl MapView {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        config: StadiumConfig,
        seats: Vec<Seat>,
    ) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let transform = ZoomTransform::fit(canvas.width() as f32, canvas.height() as f32, &config);
        Ok(Self {
            steps: stair_steps(&config),
            rings: aisle_rings(&config),
            screen: main_screen(&config),
            canvas,
            ctx,
            config,
            seats,
            transform,
            hovered: None,
        })
    }

    #[inline]
    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    /// Reset zoom and pan to fit the current canvas size.
    pub fn refit(&mut self) {
        self.transform = ZoomTransform::fit(
            self.canvas.width() as f32,
            self.canvas.height() as f32,
            &self.config,
        );
    }

    /// Update the hovered seat from a pointer in canvas pixels. Returns true
    /// when it changed.
    pub fn hover_at(&mut self, pointer: Option<Vec2>) -> bool {
        let next = pointer
            .and_then(|p| hover_target(&self.seats, self.transform.invert(p), self.hovered));
        if next == self.hovered {
            return false;
        }
        if let Some(seat) = next.and_then(|i| self.seats.get(i)) {
            log::debug!(
                "[hover] seat id={} section={} row={} number={} {}",
                seat.id,
                seat.section,
                seat.row,
                seat.seat_number,
                seat.status.as_str()
            );
        }
        self.hovered = next;
        true
    }

    pub fn draw(&self) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(&css_hex(COLOR_BACKGROUND));
        ctx.fill_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );

        let t = self.transform;
        let k = t.scale as f64;
        ctx.set_transform(k, 0.0, 0.0, k, t.translate.x as f64, t.translate.y as f64)?;

        self.draw_bowl()?;
        self.draw_screen()?;
        self.draw_stage()?;
        self.draw_seats()?;
        self.draw_stairs()?;
        Ok(())
    }

    fn disc(&self, centre: Vec2, radius: f32) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx
            .arc(centre.x as f64, centre.y as f64, radius as f64, 0.0, TAU)
    }

    fn rect_path(&self, r: &Rect) {
        self.ctx.begin_path();
        self.ctx
            .rect(r.min.x as f64, r.min.y as f64, r.size.x as f64, r.size.y as f64);
    }

    fn fill_and_stroke(&self, fill: &str, stroke: &str, width: f64) {
        self.ctx.set_fill_style_str(fill);
        self.ctx.fill();
        self.ctx.set_stroke_style_str(stroke);
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }

    fn label(&self, text: &str, at: Vec2, baseline: &str) -> Result<(), JsValue> {
        self.ctx.set_font(LABEL_FONT);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline(baseline);
        self.ctx.set_fill_style_str("#ffffff");
        self.ctx.fill_text(text, at.x as f64, at.y as f64)
    }

    fn draw_bowl(&self) -> Result<(), JsValue> {
        self.disc(Vec2::ZERO, outer_wall_radius_2d(&self.config))?;
        self.fill_and_stroke(&css_hex(COLOR_WALL), &css_hex(COLOR_WALL_STROKE), 0.5);
        self.disc(Vec2::ZERO, field_radius(&self.config))?;
        self.fill_and_stroke(&css_hex(COLOR_FIELD), &css_hex(COLOR_FIELD_STROKE), 0.3);
        Ok(())
    }

    fn draw_screen(&self) -> Result<(), JsValue> {
        let screen = &self.screen;
        self.rect_path(&screen.frame);
        self.fill_and_stroke(SCREEN_FILL, SCREEN_STROKE, 0.5);
        self.rect_path(&screen.panel);
        self.fill_and_stroke(PANEL_FILL, PANEL_STROKE, 0.3);

        self.ctx.set_global_alpha(0.6);
        self.ctx.set_stroke_style_str(SCAN_LINE);
        self.ctx.set_line_width(0.2);
        for (a, b) in &screen.scan_lines {
            self.ctx.begin_path();
            self.ctx.move_to(a.x as f64, a.y as f64);
            self.ctx.line_to(b.x as f64, b.y as f64);
            self.ctx.stroke();
        }
        self.ctx.set_global_alpha(1.0);
        self.label("MAIN SCREEN", screen.label_anchor, "alphabetic")
    }

    fn draw_stage(&self) -> Result<(), JsValue> {
        self.disc(Vec2::ZERO, STAGE_RADIUS)?;
        self.fill_and_stroke(&css_hex(COLOR_STAGE), STAGE_STROKE, 0.5);
        self.disc(Vec2::ZERO, STAGE_RADIUS - 0.5)?;
        self.fill_and_stroke(STAGE_INNER_FILL, STAGE_INNER_STROKE, 0.3);
        self.label("STAGE", Vec2::ZERO, "middle")
    }

    fn draw_seats(&self) -> Result<(), JsValue> {
        let filled = (css_hex(COLOR_FILLED), css_hex(COLOR_FILLED_STROKE));
        let empty = (css_hex(COLOR_EMPTY), css_hex(COLOR_EMPTY_STROKE));
        self.ctx.set_global_alpha(0.9);
        for (i, seat) in self.seats.iter().enumerate() {
            let radius = if self.hovered == Some(i) {
                SEAT_DOT_HOVER_RADIUS
            } else {
                SEAT_DOT_RADIUS
            };
            let (fill, stroke) = if seat.is_filled() { &filled } else { &empty };
            self.disc(seat.planar(), radius)?;
            self.fill_and_stroke(fill, stroke, 0.1);
        }
        self.ctx.set_global_alpha(1.0);
        Ok(())
    }

    fn draw_stairs(&self) -> Result<(), JsValue> {
        let colour = css_hex(COLOR_STAIRS);
        self.ctx.set_fill_style_str(&colour);
        self.ctx.set_global_alpha(0.7);
        for step in &self.steps {
            self.disc(step.planar(), STEP_DOT_RADIUS)?;
            self.ctx.fill();
        }

        let dash = js_sys::Array::of2(&JsValue::from_f64(1.0), &JsValue::from_f64(1.0));
        self.ctx.set_line_dash(&dash)?;
        self.ctx.set_global_alpha(0.5);
        self.ctx.set_stroke_style_str(&colour);
        self.ctx.set_line_width(0.3);
        for ring in &self.rings {
            self.disc(Vec2::ZERO, ring.radius)?;
            self.ctx.stroke();
        }
        self.ctx.set_line_dash(&js_sys::Array::new())?;
        self.ctx.set_global_alpha(1.0);
        Ok(())
    }
}
