//! Schema module - Configuration types and channel layout for playback.

pub mod channels;
mod config;

pub use config::*;
