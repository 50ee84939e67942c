//! Company Orders Core - Shared types library.
//!
//! This crate provides the domain types shared across Company Orders
//! components:
//! - `web` - Server-rendered order management front end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no
//! rendering. Everything here mirrors the resources served by the upstream
//! commerce API: baskets, checkouts, orders, and the items they contain.
//!
//! # Modules
//!
//! - [`types`] - Items, item options, delivery details, and order resources

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
