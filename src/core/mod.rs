pub mod analysis;
pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod narrative;
pub mod paths;
pub mod report;
pub mod state;
