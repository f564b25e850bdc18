//! Feedlot - purchase profitability simulator for fattening cattle.
//!
//! Given what is paid for a lot of live weight, how it is fed and what it is
//! sold for, the simulator computes the net result per head, splits it into
//! economic margins and tabulates how it moves when two inputs vary.
//!
//! # Modules
//!
//! - [`domain`] - Scenario inputs, result calculator, composition, sensitivity
//!   grids and result bands. Pure and synchronous.
//! - [`config`] - Configuration loading from TOML files
//! - [`error`] - Error types for the crate
//! - [`cli`] - Command-line front end
//!
//! # Example
//!
//! ```
//! use feedlot::domain::{compute, decompose, GridKind, GridSteps, ScenarioInputs};
//!
//! let inputs = ScenarioInputs::default();
//! let result = compute(&inputs);
//! assert_eq!(result.net_result, 31);
//!
//! let composition = decompose(&inputs, &result).unwrap();
//! assert_eq!(composition.lines()[3].value, 31);
//!
//! let grid = GridKind::Price.build(&inputs, &GridSteps::default());
//! assert_eq!(grid.center().value, 31);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
