//! Paramsync - project parameter store values onto annotated cluster objects.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use paramsync::cli::output;
use paramsync::cli::{execute, Cli};
use paramsync::core::constants::LOG_ENV;
use paramsync::error::{ConfigError, Error, FetchError};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("paramsync=debug")
        } else {
            EnvFilter::new("paramsync=warn")
        }
    });

    let registry = tracing_subscriber::registry().with(filter);
    if cli.log_json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    if let Err(e) = execute(cli.command, cli.config) {
        let suggestion = match &e {
            Error::Fetch(FetchError::NotFound(_)) => Some("check the aws-param-name annotation"),
            Error::KeyCollision { .. } => Some("resolved keys must be new to the object and unique after flattening"),
            Error::UnsupportedParamType(_) => {
                Some("use String, SecureString, StringList or Directory")
            }
            Error::Config(ConfigError::Invalid(_)) => Some("see paramsync --help"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
