//! CLI module for guestdesk
//!
//! Handles command-line argument parsing.

pub mod args;

pub use args::{Args, Commands, LlmBackendKind};
