//! # Data Source Port
//!
//! The outbound boundary between the calculator and whatever supplies its input.
//!
//! ## Rules
//! 1. Implementations live in `calcul-core` (adapters), never here.
//! 2. `produce_reading` never fails and returns a fresh value on every call.
//! 3. Every call announces the serving variant by emitting a `tracing` event
//!    with a `source` field set to [`DataSource::tag`].

use crate::models::reading::Reading;

pub trait DataSource: Send + Sync {
    /// Produces one reading.
    fn produce_reading(&self) -> Reading;

    /// Short human readable name of the variant, e.g. `"database"`.
    fn tag(&self) -> &'static str;
}
