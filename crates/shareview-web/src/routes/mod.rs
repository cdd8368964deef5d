//! Route handlers.

pub mod chart;
pub mod chat;
pub mod health;
