//! # Calcul Core
//!
//! * **[`sources`]**: Concrete [`DataSource`](calcul_common::source::DataSource) adapters.
//! * **[`calculator`]**: The application service turning a reading into a result.
//! * **[`wiring`]**: Binds a chosen source to a calculator.

pub mod calculator;
pub mod sources;
pub mod wiring;
