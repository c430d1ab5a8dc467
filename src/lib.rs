//! # Brainfog
//!
//! Scatters categorized words across a canvas and, on demand, pulls one
//! word per category (the "idea") into a readable line in the middle while
//! pushing the remaining words away from it.
//!
//! ## Components
//! - **Placement**: pure position sampling, distance-based scale and the
//!   percent → pixel projection
//! - **Arrangement**: interior/peripheral scatter, highlight slots, overlap
//!   resolution and repulsion
//! - **Interaction**: pointer dragging and debounced resize re-projection
//!
//! [`LayoutEngine`] ties them together as an explicit context object; the
//! egui front end started by [`run_app`] is one consumer of it.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod arrangement;
pub mod config;
pub mod constants;
mod engine;
pub mod interaction;
pub mod placement;
pub mod samples;
mod types;
mod ui;

// Re-export public types and functions
pub use config::LayoutConfig;
pub use engine::*;
pub use types::*;
use ui::BrainfogApp;

/// Runs the Brainfog application.
///
/// # Arguments
///
/// * `config` - Layout configuration used by the engine
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// use brainfog::{run_app, LayoutConfig};
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app(LayoutConfig::default())
/// }
/// ```
pub fn run_app(config: LayoutConfig) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Brainfog",
        options,
        Box::new(|_cc| Ok(Box::new(BrainfogApp::new(config)))),
    )
}
