//! Token rendering.
//!
//! Each token is painted at its projected transform: offset from the canvas
//! center, rotated about its own center, with a font size proportional to its
//! scale. Highlighted tokens are painted after the rest, and a dragged token
//! goes last so it stays on top while it moves.

use super::state::BrainfogApp;
use crate::constants::BASE_FONT_SIZE;
use crate::interaction::DragState;
use crate::placement::project;
use crate::types::*;
use eframe::egui;
use eframe::epaint::TextShape;

/// Text color for a token.
fn token_color(category: Category, highlighted: bool) -> egui::Color32 {
    if highlighted {
        return egui::Color32::WHITE;
    }
    match category {
        Category::Verb => egui::Color32::from_rgb(120, 170, 230),
        Category::Noun => egui::Color32::from_rgb(130, 200, 140),
        Category::Adjective => egui::Color32::from_rgb(220, 170, 110),
        Category::Outcome => egui::Color32::from_rgb(200, 130, 200),
    }
}

/// Axis-aligned size of a `size` box rotated by `angle` radians.
fn rotated_extent(size: egui::Vec2, angle: f32) -> egui::Vec2 {
    let (sin, cos) = (angle.sin().abs(), angle.cos().abs());
    egui::vec2(size.x * cos + size.y * sin, size.x * sin + size.y * cos)
}

impl BrainfogApp {
    /// Paints every token and records its screen rect for next frame's hit-testing.
    ///
    /// # Arguments
    ///
    /// * `painter` - The egui painter for drawing operations
    /// * `canvas_rect` - The screen-space rectangle of the canvas area
    pub fn draw_tokens(&mut self, painter: &egui::Painter, canvas_rect: egui::Rect) {
        let config = self.engine.config();
        let viewport = self.engine.viewport();

        let mut order: Vec<&Token> = self.engine.tokens().iter().collect();
        order.sort_by_key(|t| {
            let dragged = matches!(self.engine.drag_state(t.id), DragState::Dragging(_));
            (dragged, t.highlighted)
        });

        let mut hit_rects = Vec::with_capacity(order.len());
        for token in order {
            let transform = self
                .engine
                .transform(token.id)
                .unwrap_or_else(|| project(config, &token.position, viewport));
            let center = canvas_rect.center() + egui::vec2(transform.x, transform.y);

            let color = token_color(token.category, token.highlighted);
            let font_id = egui::FontId::proportional(BASE_FONT_SIZE * transform.scale);
            let galley = painter.layout_no_wrap(token.text.clone(), font_id, color);
            let size = galley.size();

            let angle = transform.rotation_degrees.to_radians();
            let rotation = egui::emath::Rot2::from_angle(angle);
            let top_left = center - rotation * (size / 2.0);

            if token.highlighted {
                let backdrop = egui::Rect::from_center_size(center, rotated_extent(size, angle));
                painter.rect_filled(
                    backdrop.expand(4.0),
                    6.0,
                    egui::Color32::from_black_alpha(140),
                );
            }
            painter.add(TextShape::new(top_left, galley, color).with_angle(angle));

            hit_rects.push((
                token.id,
                egui::Rect::from_center_size(center, rotated_extent(size, angle)),
            ));
        }
        self.canvas.hit_rects = hit_rects;
    }
}
