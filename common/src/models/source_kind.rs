//! # Source Kind
//!
//! Names the data source variants a calculator can be wired to.
//!
//! Parsing accepts the variant names (`primary`, `secondary`) as well as the
//! historical component names `dao` and `dao2`.

use std::fmt;
use std::str::FromStr;

use crate::error::WiringError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Database backed source.
    #[default]
    Primary,
    /// Web service backed source.
    Secondary,
}

impl SourceKind {
    pub const ALL: [SourceKind; 2] = [SourceKind::Primary, SourceKind::Secondary];

    pub const fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Primary => "primary",
            SourceKind::Secondary => "secondary",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = WiringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" | "dao" => Ok(SourceKind::Primary),
            "secondary" | "dao2" => Ok(SourceKind::Secondary),
            _ => Err(WiringError::UnknownSource(s.to_string())),
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
