// src/lib.rs

#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod appearance;
pub mod icon;
pub mod mutate;
pub mod progress;
pub mod query;
pub mod runner;

pub use error::{Error, Result};
pub use icon::IconName;
pub use query::{GraphQuery, QueryMode};
