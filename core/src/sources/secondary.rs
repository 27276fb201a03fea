use calcul_common::models::reading::Reading;
use calcul_common::source::DataSource;
use tracing::info;

const SECONDARY_VALUE: f64 = 32.0;

/// Web service backed data source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecondarySource;

impl DataSource for SecondarySource {
    fn produce_reading(&self) -> Reading {
        info!(source = self.tag(), "serving reading from web service version");
        Reading::new(SECONDARY_VALUE)
    }

    fn tag(&self) -> &'static str {
        "web service"
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
