// src/lib.rs
pub mod chart;
pub mod cli;
pub mod config;
pub mod console;
pub mod core;
pub mod error;
pub mod models;
pub mod report;
pub mod session;
pub mod utils;

pub use cli::{Args, execute, init_logging, run};
pub use error::AnalysisError;
