//! Core types shared by every Dungeon layer.
//!
//! This crate provides:
//! - [`Id`] - Opaque identifiers keying every registry
//! - [`Name`] - Singular/plural display names and the [`Selectable`] trait
//! - [`Error`] - Fatal error types with loading context
//! - [`Scalar`] - Recoverable outcome of a scalar read
//! - [`CounterMap`] - Key-indexed non-negative counters
//! - [`BoundedHistory`] - Fixed-capacity, overwrite-oldest history
//! - [`Registry`] - Frozen, read-only content registries
//! - [`Token`] - Closed enumerations with explicit token tables

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod history;
pub mod id;
pub mod name;
pub mod registry;
pub mod scalar;
pub mod token;

pub use collections::CounterMap;
pub use error::{Error, ErrorContext, ErrorKind, Result, UnknownToken};
pub use history::BoundedHistory;
pub use id::Id;
pub use name::{Name, Selectable};
pub use registry::{Identified, Registry, RegistryBuilder};
pub use scalar::Scalar;
pub use token::Token;
