pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod locale;
pub mod middleware;
pub mod models;
pub mod services;
