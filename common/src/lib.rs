//! # Calcul Common
//!
//! Types shared by every layer of `calcul`.
//!
//! * **[`models`]**: Domain values (`Reading`, `SourceKind`). Pure Rust, no IO.
//! * **[`source`]**: The outbound port through which the application obtains readings.
//! * **[`config`]**: Runtime configuration handed from the CLI to the wiring.
//! * **[`error`]**: Errors raised while wiring components together.

pub mod config;
pub mod error;
pub mod models;
pub mod source;
