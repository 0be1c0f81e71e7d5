//! # pagseguro-form
//!
//! Render the PagSeguro cart checkout form for an order file.
//!
//! ## Usage
//!
//! ```bash
//! export PAGSEGURO_EMAIL=loja@example.com.br
//!
//! pagseguro-form config/order.example.toml
//! pagseguro-form order.json --format json
//!
//! # JSON logs on stderr
//! PAGSEGURO_LOG_FORMAT=json RUST_LOG=debug pagseguro-form order.toml
//! ```

use clap::Parser;
use pag_cli::{run, Cli};
use tracing::{debug, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the rendered form can be piped
    let json_logs = std::env::var("PAGSEGURO_LOG_FORMAT")
        .map(|format| format == "json")
        .unwrap_or(false);
    let (text_layer, json_layer) = if json_logs {
        (None, Some(fmt::layer().json().with_writer(std::io::stderr)))
    } else {
        (Some(fmt::layer().with_writer(std::io::stderr)), None)
    };

    tracing_subscriber::registry()
        .with(text_layer)
        .with(json_layer)
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();
    debug!("Arguments: {:?}", cli);

    let output = run(&cli)?;
    print!("{}", output);

    Ok(())
}
