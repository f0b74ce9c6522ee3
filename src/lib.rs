pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod names;
pub mod scanner;
pub mod shell;
