//! max-line - top gainers dashboard for the terminal
//!
//! Polls the ranking backend and renders the strongest movers of a crypto
//! exchange as a grid of candlestick cards.

use maxline::{App, Config, Result, config::log_dir};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Log to a file; the terminal belongs to the UI
    let file_appender = tracing_appender::rolling::daily(log_dir()?, "maxline.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "maxline=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    // Load configuration
    let config = Config::load_or_default()?;

    // Run the application
    let mut app = App::new(config)?;
    let result = app.run().await;
    drop(app);

    if let Err(e) = &result {
        tracing::error!(error = %e, "Dashboard exited with an error");
        eprintln!("maxline: {e}");
    }
    result
}
