pub mod error;
pub mod validation;
pub mod config;
pub mod logging;
pub mod model;
pub mod api;
pub mod store;
pub mod queries;
pub mod cli;
