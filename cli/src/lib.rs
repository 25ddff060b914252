//! Step Tracker CLI Library
//!
//! Exposes the command-line modules for use in tests.

pub mod args;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
