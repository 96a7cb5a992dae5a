use anyhow::Result;
use clap::{Args, Parser, Subcommand};

pub mod commands;

use crate::config::ConfigOverrides;
use commands::{check_upstream, serve};

#[derive(Parser)]
#[command(name = "aqi-forecast")]
#[command(about = "Air quality forecast page and gateway to the prediction service")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the frontend and relay API calls to the prediction service
    Serve {
        #[command(flatten)]
        overrides: OverrideArgs,
    },
    /// Query the prediction service once and print the model status table
    ///
    /// Exits with a non-zero code when the service cannot be reached or
    /// reports an error.
    CheckUpstream {
        /// Base URL of the prediction service
        #[arg(short, long, env = "UPSTREAM_URL")]
        upstream_url: Option<String>,
    },
}

/// Command line values layered over the configuration file and environment.
#[derive(Args, Debug, Default)]
pub struct OverrideArgs {
    /// Bind address for the web server
    ///
    /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
    #[arg(short, long, env = "BIND_ADDRESS")]
    pub bind_address: Option<String>,

    /// Base URL of the prediction service (e.g., http://127.0.0.1:5000)
    #[arg(short, long, env = "UPSTREAM_URL")]
    pub upstream_url: Option<String>,

    /// Directory with the compiled frontend (index.html and wasm bundle)
    #[arg(short, long, env = "STATIC_DIR")]
    pub static_dir: Option<String>,
}

impl From<OverrideArgs> for ConfigOverrides {
    fn from(args: OverrideArgs) -> Self {
        Self {
            bind_address: args.bind_address,
            upstream_url: args.upstream_url,
            static_dir: args.static_dir,
        }
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { overrides } => {
                serve(&overrides.into()).await?;
            }
            Commands::CheckUpstream { upstream_url } => {
                let overrides = ConfigOverrides {
                    upstream_url,
                    ..Default::default()
                };
                check_upstream(&overrides).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_arguments() {
        let cli = Cli::try_parse_from([
            "aqi-forecast",
            "serve",
            "--bind-address",
            "127.0.0.1:8080",
            "--upstream-url",
            "http://predictor:5000",
        ])
        .unwrap();

        match cli.command {
            Commands::Serve { overrides } => {
                assert_eq!(overrides.bind_address.as_deref(), Some("127.0.0.1:8080"));
                assert_eq!(overrides.upstream_url.as_deref(), Some("http://predictor:5000"));
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_check_upstream_subcommand() {
        let cli = Cli::try_parse_from(["aqi-forecast", "check-upstream", "-u", "http://localhost:5000"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::CheckUpstream { upstream_url: Some(ref url) } if url == "http://localhost:5000"
        ));
    }
}
