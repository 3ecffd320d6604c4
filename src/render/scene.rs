use hexx::Vec2;

use super::Canvas;

/// Recorded display list: every primitive a render pass emitted, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    /// Closed hexagon outlines.
    pub outlines: Vec<Vec<Vec2>>,
    /// Sampled strand curves.
    pub strands: Vec<Vec<Vec2>>,
    /// Cell labels and their anchor positions.
    pub labels: Vec<(Vec2, String)>,
}

impl Scene {
    /// Axis-aligned `(min, max)` over all recorded points, `None` when empty.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        self.outlines
            .iter()
            .chain(&self.strands)
            .flatten()
            .copied()
            .chain(self.labels.iter().map(|(p, _)| *p))
            .fold(None, |acc, p| match acc {
                None => Some((p, p)),
                Some((min, max)) => Some((min.min(p), max.max(p))),
            })
    }

    /// Replays the recorded primitives onto another canvas.
    pub fn replay(&self, canvas: &mut impl Canvas) {
        for outline in &self.outlines {
            canvas.draw_polygon(outline);
        }
        for strand in &self.strands {
            canvas.draw_curve(strand);
        }
        for (position, text) in &self.labels {
            canvas.draw_label(*position, text);
        }
    }
}

impl Canvas for Scene {
    fn draw_polygon(&mut self, vertices: &[Vec2]) {
        self.outlines.push(vertices.to_vec());
    }

    fn draw_curve(&mut self, points: &[Vec2]) {
        self.strands.push(points.to_vec());
    }

    fn draw_label(&mut self, position: Vec2, text: &str) {
        self.labels.push((position, text.to_owned()));
    }
}
