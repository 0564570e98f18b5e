//! Shared domain types for VietCal backend services
//!
//! This crate provides the pieces every service-side component agrees on:
//!
//! - **Models**: the nutrition record stored in the `foods` collection and
//!   the ephemeral notification message
//! - **Validation**: field-level checks that produce values, never panics
//! - **Catalog**: the built-in Vietnamese food reference list used by the
//!   seed pipeline
//!
//! # Example
//!
//! ```rust
//! use vietcal_core::catalog;
//!
//! let foods = catalog::seed_foods();
//! assert_eq!(foods.len(), catalog::SEED_FOOD_COUNT);
//! assert!(foods.iter().all(|f| f.validate().is_valid()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod validation;

pub use error::exit_codes;
pub use model::{NotificationMessage, NutritionRecord};
pub use validation::{ValidationError, ValidationResult};
