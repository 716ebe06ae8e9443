//! Canvas 2D renderer (browser only)

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes::{ship_flame, ship_hull};
use super::view::Snapshot;
use crate::sim::Comet;

const BACKGROUND: &str = "#081124";
const STAR_COLOR: &str = "rgba(255,255,255,0.7)";
const COMET_CORE: &str = "#ffd6a1";
const COMET_EDGE: &str = "#ff7a59";
const HULL_COLOR: &str = "#40e0ff";
const HULL_GLOW: &str = "rgba(64,224,255,0.7)";
const FLAME_COLOR: &str = "#ffb454";
const FLAME_GLOW: &str = "rgba(255,180,84,0.7)";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Draw one frame
    pub fn render(&self, snapshot: &Snapshot<'_>) -> Result<(), JsValue> {
        let (w, h) = (snapshot.playfield.x as f64, snapshot.playfield.y as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.ctx.set_fill_style_str(BACKGROUND);
        self.ctx.fill_rect(0.0, 0.0, w, h);

        self.ctx.set_fill_style_str(STAR_COLOR);
        for star in snapshot.stars {
            self.ctx.begin_path();
            self.ctx
                .arc(star.pos.x as f64, star.pos.y as f64, star.radius as f64, 0.0, TAU)?;
            self.ctx.fill();
        }

        for comet in snapshot.comets {
            self.draw_comet(comet)?;
        }

        self.draw_ship(snapshot);
        Ok(())
    }

    fn draw_comet(&self, comet: &Comet) -> Result<(), JsValue> {
        let (x, y, r) = (comet.pos.x as f64, comet.pos.y as f64, comet.radius as f64);
        let gradient = self.ctx.create_radial_gradient(x, y, r * 0.2, x, y, r)?;
        gradient.add_color_stop(0.0, COMET_CORE)?;
        gradient.add_color_stop(1.0, COMET_EDGE)?;
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        self.ctx.arc(x, y, r, 0.0, TAU)?;
        self.ctx.fill();
        Ok(())
    }

    fn draw_ship(&self, snapshot: &Snapshot<'_>) {
        self.ctx.save();
        self.fill_triangle(&ship_hull(snapshot.player), HULL_COLOR, HULL_GLOW, 12.0);
        self.fill_triangle(&ship_flame(snapshot.player), FLAME_COLOR, FLAME_GLOW, 10.0);
        self.ctx.restore();
    }

    fn fill_triangle(&self, points: &[Vec2; 3], color: &str, glow: &str, blur: f64) {
        self.ctx.begin_path();
        self.ctx.move_to(points[0].x as f64, points[0].y as f64);
        for p in &points[1..] {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.set_fill_style_str(color);
        self.ctx.set_shadow_color(glow);
        self.ctx.set_shadow_blur(blur);
        self.ctx.fill();
    }
}
