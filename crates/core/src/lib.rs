//! Shared primitive types, the domain error and input rules for the movie
//! catalog.

pub mod error;
pub mod naming;
pub mod types;
