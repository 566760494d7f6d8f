//! # UI Components Module
//!
//! This module organizes the reusable UI components of the demo.
//!
//! ## Module Organization:
//! - `money_input` - Text field that normalizes typed amounts to cents

pub mod money_input;

pub use money_input::*;
