use std::fmt::Write as _;

use hexx::Vec2;

use super::Canvas;

const OUTLINE_STROKE: &str = "#000000";
const STRAND_STROKE: &str = "#008000";
const MARGIN_PX: f32 = 10.0;

/// Canvas that writes a standalone SVG document.
///
/// Plane coordinates are y-up; SVG is y-down, so every point is flipped and
/// scaled by `px_per_unit` on the way in.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    px_per_unit: f32,
    body: String,
    min: Vec2,
    max: Vec2,
}

impl SvgCanvas {
    /// A canvas mapping one plane unit to `px_per_unit` pixels.
    pub fn new(px_per_unit: f32) -> Self {
        Self {
            px_per_unit,
            body: String::new(),
            min: Vec2::INFINITY,
            max: Vec2::NEG_INFINITY,
        }
    }

    fn project(&mut self, p: Vec2) -> Vec2 {
        let px = Vec2::new(p.x, -p.y) * self.px_per_unit;
        self.min = self.min.min(px);
        self.max = self.max.max(px);
        px
    }

    fn points_attr(&mut self, points: &[Vec2]) -> String {
        let mut attr = String::new();
        for (i, &p) in points.iter().enumerate() {
            let px = self.project(p);
            if i > 0 {
                attr.push(' ');
            }
            let _ = write!(attr, "{:.2},{:.2}", px.x, px.y);
        }
        attr
    }

    /// Closes the document, fitting the view box to everything drawn.
    pub fn finish(self) -> String {
        let (min, max) = if self.min.x <= self.max.x {
            (self.min - MARGIN_PX, self.max + MARGIN_PX)
        } else {
            (Vec2::ZERO, Vec2::ZERO)
        };
        let size = max - min;
        let mut s = String::new();
        s.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        s.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.0}\" height=\"{:.0}\" viewBox=\"{:.2} {:.2} {:.2} {:.2}\" font-family=\"sans-serif\">\n",
            size.x.ceil(),
            size.y.ceil(),
            min.x,
            min.y,
            size.x,
            size.y
        ));
        s.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"#ffffff\"/>\n",
            min.x, min.y, size.x, size.y
        ));
        s.push_str(&self.body);
        s.push_str("</svg>\n");
        s
    }
}

impl Canvas for SvgCanvas {
    fn draw_polygon(&mut self, vertices: &[Vec2]) {
        let points = self.points_attr(vertices);
        let _ = writeln!(
            self.body,
            "<polygon points=\"{points}\" fill=\"#ffffff\" stroke=\"{OUTLINE_STROKE}\" stroke-width=\"1\"/>"
        );
    }

    fn draw_curve(&mut self, points: &[Vec2]) {
        let points = self.points_attr(points);
        let _ = writeln!(
            self.body,
            "<polyline points=\"{points}\" fill=\"none\" stroke=\"{STRAND_STROKE}\" stroke-width=\"2\" stroke-linecap=\"round\"/>"
        );
    }

    fn draw_label(&mut self, position: Vec2, text: &str) {
        let px = self.project(position);
        let font_size = (self.px_per_unit * 0.2).max(6.0);
        let _ = writeln!(
            self.body,
            "<text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{:.1}\" text-anchor=\"middle\" dominant-baseline=\"central\">{}</text>",
            px.x,
            px.y,
            font_size,
            svg_escape(text)
        );
    }
}

fn svg_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
