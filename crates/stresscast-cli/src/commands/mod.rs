pub mod completions;
pub mod config;
pub mod interactive;
pub mod score;
