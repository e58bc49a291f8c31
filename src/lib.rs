pub mod config;
pub mod error;
pub mod feed;
pub mod handlers;
pub mod models;
pub mod render;
pub mod state;
