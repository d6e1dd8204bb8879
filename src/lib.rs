//! Payroll Engine for construction workforce attendance
//!
//! This crate turns attendance entries (employee, date, start and end time,
//! minute deduction) and per-employee hourly rates into payroll lines with a
//! regular/overtime split at a daily threshold, and folds those lines into
//! daily, weekly, monthly and per-employee totals. An axum service exposes
//! the computation over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
