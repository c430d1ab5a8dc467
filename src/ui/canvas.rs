//! Canvas sizing and pointer input.
//!
//! egui pointer state is translated into [`PointerEvent`]s with coordinates
//! measured from the canvas' top-left corner, which is what the engine treats
//! as its viewport.

use super::state::BrainfogApp;
use crate::interaction::{PointerEvent, PointerId};
use crate::types::Viewport;
use eframe::egui;
use web_time::Instant;

/// The mouse (or primary touch) is the only pointer egui reports.
const PRIMARY_POINTER: PointerId = 0;

impl BrainfogApp {
    /// Draws the canvas and processes its input.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    pub fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        self.sync_viewport(ui.ctx(), canvas_rect);
        self.handle_pointer_input(ui, canvas_rect);
        self.draw_tokens(&painter, canvas_rect);
    }

    /// Feeds canvas size changes to the engine and drives the resize debounce.
    fn sync_viewport(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        let size = canvas_rect.size();
        let viewport = Viewport::new(size.x, size.y);
        let now = Instant::now();

        match self.canvas.size {
            None => self.engine.set_viewport(viewport),
            Some(previous) if previous != size => self.engine.resize(viewport, now),
            Some(_) => {}
        }
        self.canvas.size = Some(size);

        if self.engine.poll_resize(now) {
            log::debug!("Re-projected tokens for {}x{}", size.x, size.y);
        }
        if let Some(remaining) = self.engine.resize_remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }

    /// Turns this frame's primary-button state into engine pointer events.
    fn handle_pointer_input(&mut self, ui: &egui::Ui, canvas_rect: egui::Rect) {
        let (pressed, down, released, press_pos, latest_pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.primary_released(),
                i.pointer.press_origin(),
                i.pointer.latest_pos(),
            )
        });
        let local = |pos: egui::Pos2| pos - canvas_rect.min;

        if pressed {
            if let Some(pos) = press_pos.filter(|p| canvas_rect.contains(*p)) {
                if let Some(token) = self.token_at(pos) {
                    let offset = local(pos);
                    self.engine.handle_pointer(PointerEvent::Down {
                        pointer: PRIMARY_POINTER,
                        token,
                        x: offset.x,
                        y: offset.y,
                    });
                }
            }
        }

        if self.engine.is_dragging() {
            if let Some(pos) = latest_pos {
                let offset = local(pos);
                self.engine.handle_pointer(PointerEvent::Move {
                    pointer: PRIMARY_POINTER,
                    x: offset.x,
                    y: offset.y,
                });
            }
        }

        if released {
            self.engine.handle_pointer(PointerEvent::Up { pointer: PRIMARY_POINTER });
        } else if self.engine.is_dragging() && !down {
            // Button state lost without a release, e.g. focus moved away
            self.engine.handle_pointer(PointerEvent::Cancel { pointer: PRIMARY_POINTER });
        }
    }
}
