//! # Reading Model
//!
//! A reading is the only piece of data flowing through `calcul`: a data source
//! produces one, the calculator scales it and hands a new one back.

use std::fmt;

/// A single floating point value. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Reading(f64);

impl Reading {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Returns a new reading multiplied by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        Self(self.0 * factor)
    }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Reading {
    /// Integral values keep one decimal place (`713.0`, not `713`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_finite() && v.fract() == 0.0 {
            write!(f, "{v:.1}")
        } else {
            write!(f, "{v}")
        }
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
