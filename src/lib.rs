// src/lib.rs
// folio - portfolio site with a filtered project gallery and a keyword chat assistant

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod assistant;
pub mod build;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod render;
pub mod web;

pub use error::{FolioError, Result};
