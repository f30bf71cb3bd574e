//! Configuration management for Tally.
//!
//! Provides XDG-compliant settings storage and data file resolution.

mod settings;

pub use settings::{AppSettings, Paths};
