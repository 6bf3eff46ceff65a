//! # Commands
//!
//! - [`solve`] - one-shot calculation from arguments
//! - [`interactive`] - line-oriented form session

pub mod interactive;
pub mod solve;
