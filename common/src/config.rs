use crate::models::source_kind::SourceKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Which data source gets bound to the calculator.
    ///
    /// Selection happens once, at wiring time. Nothing inspects the data to pick one.
    pub source: SourceKind,
}

impl Config {
    pub fn new(source: SourceKind) -> Self {
        Self { source }
    }
}
