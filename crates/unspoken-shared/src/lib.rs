//! # Unspoken Shared
//!
//! Types crossing process boundaries: wire documents for the hosted
//! platform, its response envelope, and the local backup (import/export)
//! codec.

pub mod backup;
pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
