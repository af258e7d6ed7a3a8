//! Quaternion demo binary
//!
//! ## Usage
//!
//! ```bash
//! # Built-in operands
//! quaternion-demo
//!
//! # Custom operands, JSON output
//! quaternion-demo --json "1-2i+3j-4.5k" "0+1i+0j+0k"
//!
//! # Operands from a config file
//! quaternion-demo --config demo.json
//! ```

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quaternion_cli::{run, CliResult, DemoConfig, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "quaternion-demo")]
#[command(about = "Apply every quaternion operation to two operands")]
#[command(version)]
struct Args {
    /// First operand, e.g. "12.0-34.0i+1.0j+5.0k"
    first: Option<String>,

    /// Second operand, e.g. "1.0-2.0i-1.0j+2.0k"
    second: Option<String>,

    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output as JSON instead of text lines
    #[arg(long)]
    json: bool,

    /// Verbose output (debug logging)
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(args: &Args) -> CliResult<DemoConfig> {
    let base = match &args.config {
        Some(path) => {
            tracing::debug!("Loading config from: {}", path.display());
            DemoConfig::from_file(path)?
        }
        None => DemoConfig::default(),
    };
    Ok(base.with_overrides(args.first.clone(), args.second.clone(), args.json))
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the report
    let default_filter = if args.verbose { "quaternion_cli=debug" } else { "quaternion_cli=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("quaternion-demo v{}", env!("CARGO_PKG_VERSION"));

    let json = args.json;
    let result = load_config(&args).and_then(|config| {
        let report = run(&config)?;
        match config.output {
            OutputFormat::Json => report.to_json(),
            OutputFormat::Text => Ok(report.render_text()),
        }
    });

    match result {
        Ok(rendered) => print!("{}", rendered),
        Err(e) => {
            tracing::error!(code = e.error_code(), "{}", e);
            if json {
                match serde_json::to_string_pretty(&e.to_error_response()) {
                    Ok(body) => println!("{}", body),
                    Err(_) => eprintln!("Error: {}", e),
                }
            } else {
                eprintln!("Error: {}", e);
            }
            std::process::exit(1);
        }
    }
}
