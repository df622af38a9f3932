//! Two small console applications over a local SQLite file: an employee
//! attendance register and a student mark book.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod menu;
pub mod model;
pub mod ops;
pub mod utils;

pub use error::{Error, Result, RuleViolation};
