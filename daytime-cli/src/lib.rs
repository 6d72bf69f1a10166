pub mod command;
pub mod config;
pub mod report;

/// Install a `tracing` subscriber writing to stderr, and route records from
/// the `log` facade (used by the `daytime` library) into it.
pub fn setup_logger(
    level: log::LevelFilter,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_log::LogTracer::init_with_filter(level)?;

    let Some(level) = tracing_level(level) else {
        return Ok(());
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
}

fn tracing_level(level: log::LevelFilter) -> Option<tracing::Level> {
    match level {
        log::LevelFilter::Off => None,
        log::LevelFilter::Error => Some(tracing::Level::ERROR),
        log::LevelFilter::Warn => Some(tracing::Level::WARN),
        log::LevelFilter::Info => Some(tracing::Level::INFO),
        log::LevelFilter::Debug => Some(tracing::Level::DEBUG),
        log::LevelFilter::Trace => Some(tracing::Level::TRACE),
    }
}
