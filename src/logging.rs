use tracing::Level;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

/// Install the global subscriber for the sync binary: `yyyy-MM-dd HH:mm:ss`
/// timestamps, info lines on stdout, warn/error lines on stderr.
///
/// `RUST_LOG` overrides the fallback filter when set. Repeated calls are
/// harmless; only the first installation wins.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    let writer = std::io::stderr
        .with_max_level(Level::WARN)
        .or_else(std::io::stdout);

    let _ = SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_timer(ChronoUtc::new("%Y-%m-%d %H:%M:%S".to_owned()))
        .with_target(false)
        .with_writer(writer)
        .try_init();
}
