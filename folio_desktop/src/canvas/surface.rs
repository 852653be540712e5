//! [`Surface`] over an iced canvas frame.

use folio_core::particles::{Bounds, Surface, Vec2};
use folio_core::theme::Rgba;
use iced::widget::canvas::{self, Path};
use iced::{Point, Size, Vector};

use crate::theme::rgba_to_color;

pub struct FrameSurface<'a> {
    frame: &'a mut canvas::Frame,
}

impl<'a> FrameSurface<'a> {
    pub fn new(frame: &'a mut canvas::Frame) -> Self {
        Self { frame }
    }
}

fn point(v: Vec2) -> Point {
    Point::new(v.x, v.y)
}

fn stroke(color: Rgba, width: f32) -> canvas::Stroke<'static> {
    canvas::Stroke::default()
        .with_color(rgba_to_color(color))
        .with_width(width)
}

impl Surface for FrameSurface<'_> {
    fn clear(&mut self) {
        // Cache redraws always start from an empty frame.
    }

    fn fill_rect(&mut self, origin: Vec2, size: Bounds, color: Rgba) {
        self.frame.fill_rectangle(
            point(origin),
            Size::new(size.width, size.height),
            rgba_to_color(color),
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.frame
            .fill(&Path::circle(point(center), radius), rgba_to_color(color));
    }

    fn fill_circle_rotated(&mut self, center: Vec2, radius: f32, angle: f32, color: Rgba) {
        self.frame.with_save(|frame| {
            frame.translate(Vector::new(center.x, center.y));
            frame.rotate(angle);
            frame.fill(&Path::circle(Point::ORIGIN, radius), rgba_to_color(color));
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.frame
            .stroke(&Path::line(point(from), point(to)), stroke(color, width));
    }

    fn stroke_polyline(&mut self, points: &[Vec2], color: Rgba, width: f32) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let path = Path::new(|builder| {
            builder.move_to(point(*first));
            for p in rest {
                builder.line_to(point(*p));
            }
        });
        self.frame.stroke(&path, stroke(color, width));
    }
}
