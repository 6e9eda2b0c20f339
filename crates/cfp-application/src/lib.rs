//! Application Layer - Cache Frontend Pool
//!
//! Orchestrates the domain ports into the frontend pool.
//!
//! ## Contents
//!
//! - `ports::registry`: compile-time registry of cache frontend backends
//! - `use_cases::FrontendPool`: lazy, ordered, memoized frontend registry
//! - `use_cases::RegistryFrontendFactory`: builds frontends from the registry
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `cfp-domain`: For core types and port traits
//! - Pure Rust libraries for registration, ordering and memoization

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
