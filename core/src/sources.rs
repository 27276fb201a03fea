//! # Data Source Adapters
//!
//! Concrete implementations of [`DataSource`](calcul_common::source::DataSource).
//! Both are stateless and return a constant; they differ only in value and tag.
//!
//! * [`primary::PrimarySource`]: database backed, returns `31`.
//! * [`secondary::SecondarySource`]: web service backed, returns `32`.

pub mod primary;
pub mod secondary;

pub use primary::PrimarySource;
pub use secondary::SecondarySource;
