//! Configuration module for FinLight
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinlightPaths;
pub use settings::{Settings, SummaryScope};
