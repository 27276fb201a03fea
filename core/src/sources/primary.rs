use calcul_common::models::reading::Reading;
use calcul_common::source::DataSource;
use tracing::info;

const PRIMARY_VALUE: f64 = 31.0;

/// Database backed data source.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimarySource;

impl DataSource for PrimarySource {
    fn produce_reading(&self) -> Reading {
        info!(source = self.tag(), "serving reading from database version");
        Reading::new(PRIMARY_VALUE)
    }

    fn tag(&self) -> &'static str {
        "database"
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
