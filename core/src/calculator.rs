//! # Calculator Service
//!
//! Scales the reading of the bound [`DataSource`] by a fixed multiplier.
//!
//! The source is injected through [`Calculator::new`] and can be swapped later
//! with [`Calculator::set_source`]. There is no way to hold a calculator without
//! a source: code that assembles one step by step goes through
//! [`CalculatorBuilder`], which refuses to build until a source is bound.

use std::fmt;
use std::sync::Arc;

use calcul_common::error::WiringError;
use calcul_common::models::reading::Reading;
use calcul_common::source::DataSource;
use tracing::debug;

pub const MULTIPLIER: f64 = 23.0;

pub struct Calculator {
    source: Arc<dyn DataSource>,
}

impl Calculator {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        debug!(bound = source.tag(), "calculator constructed with data source");
        Self { source }
    }

    pub fn builder() -> CalculatorBuilder {
        CalculatorBuilder::default()
    }

    /// Reads the bound source exactly once and returns the reading times [`MULTIPLIER`].
    ///
    /// Nothing is cached: every call hits the source again.
    pub fn compute(&self) -> Reading {
        self.source.produce_reading().scale(MULTIPLIER)
    }

    /// Rebinds the calculator. Only later calls to [`Calculator::compute`] see the new source.
    pub fn set_source(&mut self, source: Arc<dyn DataSource>) {
        debug!(from = self.source.tag(), to = source.tag(), "rebinding data source");
        self.source = source;
    }

    pub fn source_tag(&self) -> &'static str {
        self.source.tag()
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("source", &self.source.tag())
            .finish()
    }
}

/// Staged construction of a [`Calculator`].
#[derive(Default)]
pub struct CalculatorBuilder {
    source: Option<Arc<dyn DataSource>>,
}

impl CalculatorBuilder {
    pub fn with_source(mut self, source: Arc<dyn DataSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Fails with [`WiringError::InvalidState`] when no source was bound.
    pub fn build(self) -> Result<Calculator, WiringError> {
        let source = self.source.ok_or(WiringError::InvalidState)?;
        Ok(Calculator::new(source))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
