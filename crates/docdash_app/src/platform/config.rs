use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use docdash_client::{ClientSettings, DEFAULT_BASE_URL};

use super::logging::LogDestination;

/// Terminal dashboard for a document question-answering backend.
#[derive(Debug, Parser)]
#[command(name = "docdash", version, about, long_about = None)]
struct Cli {
    /// Base URL of the backend serving /upload, /query and /stats.
    #[arg(long, env = "DOCDASH_API_BASE", default_value = DEFAULT_BASE_URL, value_name = "URL")]
    api_base: String,
    /// Directory holding the saved theme preference.
    #[arg(long, default_value = ".docdash", value_name = "PATH")]
    state_dir: PathBuf,
    /// Where log output goes; stdout is the dashboard itself.
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    log: LogTarget,
    /// Disable the animated placeholder in the search view.
    #[arg(long)]
    no_typing_effect: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogTarget {
    File,
    Terminal,
    Both,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub client: ClientSettings,
    pub state_dir: PathBuf,
    pub log_destination: LogDestination,
    pub typing_effect: bool,
}

impl Config {
    pub fn from_args() -> Result<Self> {
        Self::from_cli(Cli::parse())
    }

    fn from_cli(cli: Cli) -> Result<Self> {
        let parsed = url::Url::parse(&cli.api_base)
            .with_context(|| format!("invalid --api-base {:?}", cli.api_base))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!(
                "--api-base must be an http(s) URL, got scheme {:?}",
                parsed.scheme()
            );
        }

        let log_destination = match cli.log {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        };

        Ok(Self {
            client: ClientSettings {
                base_url: cli.api_base,
                ..ClientSettings::default()
            },
            state_dir: cli.state_dir,
            log_destination,
            typing_effect: !cli.no_typing_effect,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config> {
        let cli = Cli::try_parse_from(std::iter::once("docdash").chain(args.iter().copied()))?;
        Config::from_cli(cli)
    }

    #[test]
    fn defaults_point_at_local_backend() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.client.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.client.request_timeout, None);
        assert_eq!(config.state_dir, PathBuf::from(".docdash"));
        assert_eq!(config.log_destination, LogDestination::File);
        assert!(config.typing_effect);
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&[
            "--api-base",
            "https://kb.example.com/api",
            "--state-dir",
            "/tmp/dd",
            "--log",
            "both",
            "--no-typing-effect",
        ])
        .unwrap();
        assert_eq!(config.client.base_url, "https://kb.example.com/api");
        assert_eq!(config.state_dir, PathBuf::from("/tmp/dd"));
        assert_eq!(config.log_destination, LogDestination::Both);
        assert!(!config.typing_effect);
    }

    #[test]
    fn rejects_non_http_base() {
        let err = parse(&["--api-base", "ftp://kb.example.com"]).unwrap_err();
        assert!(err.to_string().contains("http(s)"));

        assert!(parse(&["--api-base", "not a url"]).is_err());
    }
}
