//! Terminal front end for the Hearts engine: argument handling lives in the
//! `hearts` binary, everything it drives lives here.

pub mod commands;
pub mod config;
pub mod human;
pub mod logging;
pub mod prompt;
pub mod render;
