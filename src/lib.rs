pub mod app;
pub mod badge;
pub mod classify;
pub mod config;
pub mod term;
