/*
 * Renderer Module
 *
 * This module handles the rendering of the countdown window.
 * It clears to the backdrop colour, strokes the snow segments produced by
 * the last field step, and draws the debug overlay and UI on top.
 *
 * The field works in surface-local pixels (origin top-left, y down) while
 * nannou draws around the window centre with y up, so every point goes
 * through `surface_to_screen` first.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::shape::{LineCap, LineSegment};
use crate::ui;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();

    draw.background().color(model.background);

    for segment in &model.segments {
        draw_segment(&draw, segment, window_rect);
    }

    if model.params.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, window_rect);
    }

    if let Err(error) = draw.to_frame(app, &frame) {
        tracing::error!("Couldn't draw frame: {error:?}");
    }

    if let Err(error) = model.egui.draw_to_frame(&frame) {
        tracing::error!("Couldn't draw UI: {error:?}");
    }
}

fn draw_segment(draw: &Draw, segment: &LineSegment, window_rect: Rect) {
    let line = draw
        .line()
        .start(surface_to_screen(segment.start, window_rect))
        .end(surface_to_screen(segment.end, window_rect))
        .weight(segment.stroke_width)
        .color(segment.color);

    match segment.cap {
        LineCap::Round => line.caps_round(),
    };
}

// Convert a surface-local point (top-left origin, y down) into nannou's window space
pub fn surface_to_screen(point: Point2, window_rect: Rect) -> Point2 {
    pt2(window_rect.left() + point.x, window_rect.top() - point.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_origin_is_top_left() {
        let rect = Rect::from_w_h(400.0, 800.0);

        assert_eq!(surface_to_screen(pt2(0.0, 0.0), rect), pt2(-200.0, 400.0));
        assert_eq!(surface_to_screen(pt2(400.0, 800.0), rect), pt2(200.0, -400.0));
        assert_eq!(surface_to_screen(pt2(200.0, 400.0), rect), pt2(0.0, 0.0));
    }
}
