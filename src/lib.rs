//! # taskman - personal task tracker
//!
//! Tasks live in a single SQLite file. [`TaskRepository`] owns every storage
//! operation; each call opens its own connection and commits before returning.

pub mod cli;
pub mod cli_handlers;
pub mod db;
pub mod error;
pub mod export;
pub mod menu;
pub mod models;
pub mod output;
pub mod repository;

pub use db::DbPath;
pub use error::{Result, TaskError};
pub use models::*;
pub use repository::TaskRepository;
