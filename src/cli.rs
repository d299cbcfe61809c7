use clap::Parser;
use std::path::PathBuf;

/// Formsmith - HTTP service that turns JSON form descriptions into HTML forms
#[derive(Parser, Debug, Clone)]
#[command(name = "formsmith", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "FORMSMITH_CONFIG", default_value = "formsmith.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "FORMSMITH_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "FORMSMITH_PORT")]
    pub port: Option<u16>,
}
