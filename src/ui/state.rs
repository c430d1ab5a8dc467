//! Application state structures.
//!
//! The app owns a [`LayoutEngine`] plus the bits of UI state the engine does
//! not care about: the current idea, the canvas geometry seen last frame and
//! the rects that were painted for hit-testing.

use crate::config::LayoutConfig;
use crate::engine::LayoutEngine;
use crate::samples;
use crate::types::*;
use eframe::egui;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

/// Notice shown when an idea cannot be picked.
pub const EMPTY_CATEGORY_NOTICE: &str = "Add words in each category first!";

/// Canvas geometry and hit-test data carried between frames.
#[derive(Debug, Default)]
pub struct CanvasState {
    /// Size of the canvas rect last frame; `None` before the first frame
    pub size: Option<egui::Vec2>,
    /// Screen rects of the painted tokens, in paint order (last is topmost)
    pub hit_rects: Vec<(TokenId, egui::Rect)>,
}

/// Main application structure.
pub struct BrainfogApp {
    /// Layout engine holding tokens, positions and drag state
    pub engine: LayoutEngine,
    /// Idea currently pulled into the middle, if any
    pub current_idea: Option<Selection>,
    /// Canvas geometry and hit rects
    pub canvas: CanvasState,
    /// Message shown in the toolbar, e.g. why no idea could be generated
    pub notice: Option<String>,
    /// Whether the startup idea has been generated
    pub generated_once: bool,
    idea_rng: StdRng,
}

impl Default for BrainfogApp {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl BrainfogApp {
    /// Creates the app with the built-in word lists scattered across the canvas.
    ///
    /// The viewport starts at a placeholder size; the first frame measures
    /// the real canvas.
    pub fn new(config: LayoutConfig) -> Self {
        let engine = LayoutEngine::new(config, Viewport::new(1200.0, 800.0));
        Self::with_engine(engine, StdRng::from_os_rng())
    }

    /// Creates the app with fixed seeds for both layout and idea picking.
    #[cfg(test)]
    pub fn with_seed(config: LayoutConfig, seed: u64) -> Self {
        let engine = LayoutEngine::with_seed(config, Viewport::new(1200.0, 800.0), seed);
        Self::with_engine(engine, StdRng::seed_from_u64(seed.wrapping_add(1)))
    }

    fn with_engine(mut engine: LayoutEngine, idea_rng: StdRng) -> Self {
        engine.rebuild(samples::default_words());
        Self {
            engine,
            current_idea: None,
            canvas: CanvasState::default(),
            notice: None,
            generated_once: false,
            idea_rng,
        }
    }

    /// Picks one random word per category from the current tokens.
    ///
    /// # Returns
    ///
    /// The selection, or a user-facing message if some category has no words.
    pub fn pick_idea(&mut self) -> Result<Selection, String> {
        let mut selection = Selection::new();
        for category in Category::ALL {
            let token = self
                .engine
                .tokens()
                .category(category)
                .choose(&mut self.idea_rng)
                .ok_or_else(|| EMPTY_CATEGORY_NOTICE.to_string())?;
            selection.insert(category, &token.text);
        }
        Ok(selection)
    }

    /// Picks a new idea and pulls it into the middle of the canvas.
    pub fn generate(&mut self) {
        match self.pick_idea() {
            Ok(selection) => {
                log::info!("Generated idea: {}", selection.phrase());
                self.engine.arrange(Some(selection.clone()));
                self.current_idea = Some(selection);
                self.notice = None;
            }
            Err(message) => {
                log::warn!("{message}");
                self.notice = Some(message);
            }
        }
    }

    /// Rebuilds the built-in word lists and scatters them without an idea.
    pub fn shuffle(&mut self) {
        self.engine.rebuild(samples::default_words());
        self.current_idea = None;
        self.notice = None;
    }

    /// Topmost token whose painted rect contains a screen position.
    pub fn token_at(&self, pos: egui::Pos2) -> Option<TokenId> {
        self.canvas
            .hit_rects
            .iter()
            .rev()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(id, _)| *id)
    }
}
