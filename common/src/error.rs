use thiserror::Error;

/// Failures raised while binding a data source to a calculator.
///
/// Once a calculator exists it cannot fail, so these are only ever
/// seen at wiring time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WiringError {
    #[error("no data source bound to calculator")]
    InvalidState,
    #[error("unknown data source: {0}")]
    UnknownSource(String),
}
