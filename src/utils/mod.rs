//! Utility modules for the Folio shell.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::format_inr;
