//! Shareview Core Library
//!
//! Response models, the fixed market-share analysis, chart replies and
//! server configuration.

pub mod analysis;
pub mod chart;
pub mod config;
pub mod envelope;
pub mod error;

pub use error::{ShareviewError, ShareviewResult};
pub use envelope::Envelope;
