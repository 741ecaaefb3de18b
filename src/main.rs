use std::process::ExitCode;
use tracing::{Subscriber, error};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

mod model;
mod stop_converter;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    console_subscriber(std::io::stdout, env_filter, true).init();

    // The only place a failed run gets reported
    if let Err(e) = stop_converter::run().await {
        error!("{e:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Diagnostics only go to `writer`, no files are created.
pub fn console_subscriber<W>(
    writer: W,
    env_filter: EnvFilter,
    ansi: bool,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let console_log = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false);

    Registry::default().with(console_log).with(env_filter)
}
