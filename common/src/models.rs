//! # Domain Models
//!
//! ## Value Objects
//! * [`reading::Reading`]: A single numeric value produced by a data source.
//! * [`source_kind::SourceKind`]: The closed set of data source variants a calculator can be wired to.

pub mod reading;
pub mod source_kind;
