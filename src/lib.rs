//! livecam-ascii library crate.
//!
//! Renders a live camera feed as ASCII art in the terminal. The modules
//! are exposed for the binary and for integration testing.

pub mod ascii;
pub mod camera;
pub mod cli;
pub mod config;
pub mod error;
pub mod session;
pub mod terminal;
