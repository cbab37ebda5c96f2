pub mod clients;
pub mod config;
pub mod content;
pub mod error;
pub mod models;
pub mod utils;
