//! # Wiring
//!
//! The one place where a concrete [`DataSource`] is chosen and bound to a
//! [`Calculator`]. Callers describe the choice with a [`Config`]; the rest of
//! the application only ever sees the port.

use std::sync::Arc;

use calcul_common::config::Config;
use calcul_common::models::source_kind::SourceKind;
use calcul_common::source::DataSource;

use crate::calculator::Calculator;
use crate::sources::{PrimarySource, SecondarySource};

pub fn data_source(kind: SourceKind) -> Arc<dyn DataSource> {
    match kind {
        SourceKind::Primary => Arc::new(PrimarySource),
        SourceKind::Secondary => Arc::new(SecondarySource),
    }
}

pub fn wire(cfg: &Config) -> Calculator {
    Calculator::new(data_source(cfg.source))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
