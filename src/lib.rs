//! Payroll calculation engine for Argentine salaries.
//!
//! This crate provides the deterministic calculations behind the year-end bonus
//! (aguinaldo) estimator, the gross-to-net salary estimator, and dollar
//! conversion with caller-supplied quotes, together with the YAML configuration
//! tables they read and an HTTP API that exposes them.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
