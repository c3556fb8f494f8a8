//! # Unspoken Core
//!
//! The domain layer of the Unspoken journal.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the entry/post/settings domain types, the port traits the hosted platform is
//! consumed through, and the view-model reducer that turns an entry snapshot
//! plus filter state into everything the presentation layer shows.

pub mod domain;
pub mod error;
pub mod ports;
pub mod view;

pub use error::DomainError;
