use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::view::FetchMode;

#[derive(Parser, Debug)]
#[command(name = "feedview", version, about = "Fetch a JSON resource and show it as a list")]
pub struct Cli {
    /// Override the resource endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Fetch a single resource: GET {endpoint}/{param}
    #[arg(long)]
    pub param: Option<String>,

    /// Override the re-fetch policy
    #[arg(long, value_enum)]
    pub mode: Option<FetchMode>,

    /// Read configuration from this file instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fetch once, print the result to stdout and exit
    #[arg(long)]
    pub plain: bool,

    /// Append logs to this file (terminal UI mode)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Flags given on the command line win over the config file.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.view.endpoint = endpoint.clone();
        }
        if let Some(param) = &self.param {
            config.view.param = Some(param.clone());
        }
        if let Some(mode) = self.mode {
            config.view.mode = mode;
        }
        if let Some(log_file) = &self.log_file {
            config.logging.file = Some(log_file.clone());
        }
    }
}
