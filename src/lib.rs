//! Procedural calendar icon generator.
//!
//! Renders the calendar glyph at a ladder of sizes and writes the PNG icons,
//! PWA icons and favicon a web app expects.

pub mod config;
pub mod error;
pub mod generate;
pub mod models;
pub mod render;
pub mod utils;

pub use config::{IconPlan, PlanEntry};
pub use error::{IconError, Result};
pub use models::{GenMessage, GeneratedFile, RenderSpec};
pub use render::{IconLayout, render_icon};
