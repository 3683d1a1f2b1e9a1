//! Trip budget planner
//!
//! This library provides the core of an interactive trip budget planner. A
//! session collects a total budget, trip length and daily spending target,
//! records expenses one at a time against four fixed categories, and reports
//! the remaining budget and allowance per day. Every stage is echoed to a
//! trip document for later reference.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, expenses, parameters)
//! - `prompt`: Validated line-based prompting
//! - `services`: Expense ledger and budget summary
//! - `session`: Session steps and orchestration
//! - `display`: Terminal formatting
//! - `mirror`: Trip document output
//!
//! # Example
//!
//! ```rust,no_run
//! use std::io;
//!
//! use trip_budget::config::Settings;
//! use trip_budget::mirror::NullMirror;
//! use trip_budget::prompt::Prompter;
//! use trip_budget::session::Session;
//!
//! let prompter = Prompter::new(io::stdin().lock(), io::stdout());
//! let mut mirror = NullMirror;
//! let report = Session::new(prompter, &mut mirror, Settings::default()).run()?;
//! println!("{}", report.summary.remaining);
//! # Ok::<(), trip_budget::TripError>(())
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod intro;
pub mod mirror;
pub mod models;
pub mod prompt;
pub mod services;
pub mod session;

pub use error::{TripError, TripResult};
