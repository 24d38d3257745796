//! Plantify Core - Shared types library.
//!
//! This crate provides common types used across all Plantify components:
//! - `storefront` - The storefront application (views, cart, router)
//! - `integration-tests` - End-to-end tests against the assembled app
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no framework code. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product records, type-safe IDs, and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
