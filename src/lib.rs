pub mod agent;
pub mod api;
pub mod args;
mod clean;
pub mod commands;
mod config;
mod error;
pub mod model;
mod month;
mod render;
mod utils;

pub use api::Mode;
pub use clean::clean_rows;
pub use config::Config;
pub use error::Error;
pub use error::Result;
pub use month::MonthFilter;
