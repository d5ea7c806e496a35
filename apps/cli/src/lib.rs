pub mod command;
pub mod console;
pub mod error;
pub mod options;
pub mod session;

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::options::Options;
use crate::session::Session;

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // stdout carries the interactive protocol, so diagnostics go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let options = Options::parse(std::env::args().skip(1));
    tracing::debug!(?options, "starting session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::start(options, stdin.lock(), stdout.lock())?;
    session.run()?;

    Ok(())
}
