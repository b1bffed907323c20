//! Display formatting functions and result types.
//!
//! Domain enums implement [`std::fmt::Display`] directly ([`models`]); the
//! view models from [`crate::view`] render as markdown ([`views`]); operation
//! outcomes are wrapped in result types ([`results`], [`status`]).
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Agenda state  │    │   View models   │    │    Markdown     │
//! │  (tasks, logs)  │───▶│ (sorted/filtered)│───▶│  (terminal)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use agenda_core::display::OperationStatus;
//!
//! let failure = OperationStatus::failure("Could not delete the task.");
//! assert_eq!(failure.to_string(), "Error: Could not delete the task.\n");
//! ```

pub mod datetime;
pub mod models;
pub mod results;
pub mod status;
pub mod views;

pub use datetime::{LocalDate, LocalDateTime};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
