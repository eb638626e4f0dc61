use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes the logging system with console output.
pub fn init_logging() {
    let console_layer = fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("cards_cleaner=info".parse().unwrap()))
        .with(console_layer)
        .init();
}
