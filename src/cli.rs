use clap::Parser;
use std::path::PathBuf;

/// agentdeck - agent catalog server and web UI
#[derive(Parser, Debug, Clone)]
#[command(name = "agentdeck", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "AGENTDECK_CONFIG", default_value = "agentdeck.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "AGENTDECK_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "AGENTDECK_PORT")]
    pub port: Option<u16>,
}
