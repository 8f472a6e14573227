//! CLI library components for the clearinghouse tools.

pub mod config;
pub mod logging;
