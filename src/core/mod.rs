//! Core library components.
//!
//! Annotation parsing, parameter type dispatch, value decomposition and
//! collision-safe materialization onto cluster objects.

pub mod annotations;
pub mod config;
pub mod constants;
pub mod decompose;
pub mod object;
pub mod provider;
pub mod resolved;
pub mod resolver;
pub mod store;
pub mod types;
