pub mod assets;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod template;

pub use routes::AppState;
