//! Domain types for the to-do list application.
//!
//! # Overview
//! Everything the server persists or accepts at its form boundary is
//! defined here: the `Todo` row, the typed form commands, the partial
//! update patch, and the `Priority` enumeration with its rotation rule.
//! The crate performs no I/O and is fully deterministic.
//!
//! # Design
//! - `Priority` is a closed sum type with an explicit successor function;
//!   rotation is a `match`, not index arithmetic over strings.
//! - Form input is typed at the boundary (`NewTodo`, `UpdateTitle`) rather
//!   than read as loose fields.
//! - `TodoPatch` carries `Option` per field so the store applies partial
//!   updates, leaving omitted fields untouched.

pub mod error;
pub mod priority;
pub mod types;

pub use error::ParsePriorityError;
pub use priority::Priority;
pub use types::{NewTodo, Todo, TodoPatch, UpdateTitle};
