//! Item and order view-model mapping.
//!
//! Everything here is a pure, synchronous transformation from fully-fetched
//! domain objects to the view structures the templates render. No I/O, no
//! shared mutable state: the feature flags are captured once when the
//! mapper factory is built, and every call constructs fresh rows.
//!
//! # Modules
//!
//! - [`formatting`] - shared string/date/currency formatting
//! - [`filing_history`] - templated description resolution
//! - [`certificate`] - the certificate detail mapper family
//! - [`factory`] - mapper selection from company type, status, and flags
//! - [`confirmation`] - item to confirmation-page mapping
//! - [`summary`] - basket, order summary, and order item summary mapping

pub mod certificate;
pub mod confirmation;
pub mod factory;
pub mod filing_history;
pub mod formatting;
pub mod summary;

use thiserror::Error;

/// Errors raised by the mapping layer.
///
/// These are fatal for the request that triggered them; partial view models
/// are never returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapperError {
    /// No certificate detail mapper exists for the combination looked up.
    #[error("Mapper not found")]
    MapperNotFound,

    /// An item's kind is not one this service sells.
    #[error("Unknown item type: [{0}]")]
    UnknownItemType(String),

    /// An item's options do not match its kind.
    #[error("Item options do not match the item kind")]
    MissingItemOptions,
}
