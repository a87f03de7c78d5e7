//! Formatting helpers shared by the commands

mod date;

pub use date::*;
