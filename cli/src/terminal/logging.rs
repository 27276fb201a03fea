use std::fmt;

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

const DEFAULT_FILTER: &str = "info";

/// Splits an event into its message and the remaining `key=value` fields.
#[derive(Default)]
struct EventFields {
    message: String,
    fields: Vec<(&'static str, String)>,
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push((field.name(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push((field.name(), format!("{value:?}")));
        }
    }
}

impl EventFields {
    /// Message first, then each field as a dimmed key and a plain value.
    fn render(&self) -> String {
        let mut line = self.message.clone();
        for (key, value) in &self.fields {
            line.push_str(&format!(" {}{}", format!("{key}=").dimmed(), value));
        }
        line
    }
}

pub struct CalculFormatter;

impl<S, N> FormatEvent<S, N> for CalculFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let symbol: ColoredString = match *event.metadata().level() {
            Level::TRACE => "[ ]".dimmed(),
            Level::DEBUG => "[?]".blue(),
            Level::INFO => "[+]".green().bold(),
            Level::WARN => "[*]".yellow().bold(),
            Level::ERROR => "[-]".red().bold(),
        };

        let mut fields = EventFields::default();
        event.record(&mut fields);

        writeln!(writer, "{} {}", symbol, fields.render())
    }
}

/// Installs the global subscriber. Diagnostics go to stderr so stdout only
/// carries the result line.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Ignore the error when a subscriber is already set
    let _ = tracing_subscriber::fmt()
        .event_format(CalculFormatter)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_message_only() {
        colored::control::set_override(false);
        let fields = EventFields {
            message: "wiring calculator".to_string(),
            fields: Vec::new(),
        };
        assert_eq!(fields.render(), "wiring calculator");
    }

    #[test]
    fn test_render_keeps_source_value_plain() {
        colored::control::set_override(false);
        let fields = EventFields {
            message: "serving reading from database version".to_string(),
            fields: vec![("source", "database".to_string())],
        };
        assert_eq!(
            fields.render(),
            "serving reading from database version source=database"
        );
    }

    #[test]
    fn test_formatter_writes_symbol_message_and_fields() {
        use std::io;
        use std::sync::{Arc, Mutex};

        struct SharedBuf(Arc<Mutex<Vec<u8>>>);
        impl io::Write for SharedBuf {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        colored::control::set_override(false);
        let output = Arc::new(Mutex::new(Vec::new()));
        let sink = output.clone();
        let subscriber = tracing_subscriber::fmt()
            .event_format(CalculFormatter)
            .with_writer(move || SharedBuf(sink.clone()))
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(source = "web service", "serving reading");
        });

        let written = String::from_utf8(output.lock().unwrap().clone()).unwrap();
        assert_eq!(written, "[+] serving reading source=web service\n");
    }
}
