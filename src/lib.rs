pub mod commands;
pub mod config;
pub mod launcher;
pub mod process;
pub mod utils;
