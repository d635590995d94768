//! Personal CV and website generation library
//!
//! Loads a structured JSON profile, optionally scores it against a job
//! description by keyword relevance, and renders it into a LaTeX CV
//! document and a set of static website pages.

pub mod cli;
pub mod config;
pub mod error;
pub mod pdf;
pub mod profile;
pub mod publications;
pub mod render;
pub mod tailor;
pub mod watch;

pub use config::Config;
pub use error::{CvTailorError, Result};
