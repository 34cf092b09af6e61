//! Command line interface

pub mod commands;
pub mod display;
pub mod tunnel;

pub use self::commands::{CliArgs, Commands};
