//! CLI library components for the NOTAM codec.

pub mod cli;
pub mod commands;
pub mod config;
pub mod input;
pub mod logging;
pub mod summary;
