//! User interface for the word canvas.
//!
//! The UI is a thin collaborator of the layout engine: it measures the canvas,
//! forwards pointer input, paints the projected tokens and decides which idea
//! to show.
//!
//! # Module Organization
//!
//! - `state` - Application state and the main BrainfogApp
//! - `canvas` - Canvas sizing and pointer input translation
//! - `rendering` - Drawing tokens

mod canvas;
mod rendering;
mod state;


pub use state::BrainfogApp;

use eframe::egui;

impl eframe::App for BrainfogApp {
    /// Main update function called by egui for each frame.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context
    /// * `_frame` - The eframe frame
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::from_rgb(18, 18, 24)))
            .show(ctx, |ui| {
                self.draw_canvas(ui);
            });

        // The startup idea needs a measured canvas, so it waits for the first frame
        if !self.generated_once {
            self.generated_once = true;
            self.generate();
            ctx.request_repaint();
        }
    }
}

impl BrainfogApp {
    /// Draws the toolbar with the arrangement buttons and the current idea.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Shuffle").clicked() {
                self.shuffle();
            }
            if ui.button("Generate").clicked() {
                self.generate();
            }

            ui.separator();

            match &self.current_idea {
                Some(idea) => {
                    ui.label(egui::RichText::new(idea.phrase()).strong());
                }
                None => {
                    ui.weak("No idea yet");
                }
            }

            if let Some(notice) = &self.notice {
                ui.separator();
                ui.colored_label(egui::Color32::from_rgb(230, 160, 80), notice);
            }
        });
    }
}
