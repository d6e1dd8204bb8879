//! Configuration loading for the Payroll Engine.
//!
//! Payroll settings (daily threshold, overtime policy, week start) and the
//! default rate card are loaded from YAML files in a configuration directory.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll").unwrap();
//! println!("Employees with rates: {}", config.rate_card().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PayrollConfig, PayrollSettings, RatesFile};
