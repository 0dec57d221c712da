//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - new: Record a book you started or finished
//! - list: List entries, optionally filtered
//! - config init: Initialize configuration file
pub mod config;
pub mod list;
pub mod new;
