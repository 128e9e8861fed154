//! CLI parser and command dispatch.

use clap::{Parser, Subcommand};
use console::style;

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "basewatch")]
#[command(about = "Server-rendered compliance baseline console")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Address to bind to: PORT, HOST, or HOST:PORT
        /// (defaults to the HOST/PORT environment settings)
        bind: Option<String>,
    },
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind } => cmd_serve(bind.as_deref()).await,
    }
}

/// Start the web server.
async fn cmd_serve(bind: Option<&str>) -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    let (host, port) = match bind {
        Some(bind) => parse_bind_address(bind, &settings.host, settings.port)?,
        None => (settings.host.clone(), settings.port),
    };

    println!(
        "{} Starting basewatch server at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    if settings.debug {
        println!("  {} Debug mode enabled", style("!").yellow());
    }
    if settings.vite_dev {
        println!(
            "  {} Assets served from {}",
            style("→").cyan(),
            settings.vite_dev_server
        );
    }
    println!("  Press Ctrl+C to stop");

    crate::server::serve(settings, &host, port).await
}

/// Parse a bind address that can be:
/// - Just a port: "8080" -> default_host:8080
/// - Just a host: "0.0.0.0" -> 0.0.0.0:default_port
/// - Host and port: "0.0.0.0:8080" -> 0.0.0.0:8080
fn parse_bind_address(
    bind: &str,
    default_host: &str,
    default_port: u16,
) -> anyhow::Result<(String, u16)> {
    // Try parsing as just a port number
    if let Ok(port) = bind.parse::<u16>() {
        return Ok((default_host.to_string(), port));
    }

    // Try parsing as host:port
    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if let Ok(port) = port_str.parse::<u16>() {
            return Ok((host.to_string(), port));
        }
    }

    // Must be just a host, use the default port
    Ok((bind.to_string(), default_port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_address_forms() {
        assert_eq!(
            parse_bind_address("8080", "127.0.0.1", 5000).unwrap(),
            ("127.0.0.1".to_string(), 8080)
        );
        assert_eq!(
            parse_bind_address("0.0.0.0", "127.0.0.1", 5000).unwrap(),
            ("0.0.0.0".to_string(), 5000)
        );
        assert_eq!(
            parse_bind_address("0.0.0.0:9000", "127.0.0.1", 5000).unwrap(),
            ("0.0.0.0".to_string(), 9000)
        );
    }
}
