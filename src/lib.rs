//! Workforce metrics engine for a logistics HR system
//!
//! This crate derives the values an HR administration backend shows next to
//! its records: scheduled hours, task timestamps and progress, time-log
//! validity, performance scores and daily warehouse productivity. It also
//! exposes them over a small JSON API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
