pub mod api;
pub mod app;
pub mod browser;
pub mod cli;
pub mod config;
pub mod output;
pub mod utils;

#[cfg(test)]
mod tests;
