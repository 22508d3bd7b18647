//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Load probe settings for the commands that poll or spawn the JVM tool.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Exit code mapping (see `error` module).

use anyhow::Result;
use ub_probe::Service;

use crate::args::{Cli, Commands};
use crate::commands::{self, kafka_ready::KafkaReadyOptions, load_probe_settings};

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Ensure { name } => commands::ensure::run(&name)?,
        Commands::Path { path, operation } => commands::path::run(&path, &operation)?,
        Commands::RenderTemplate { template } => commands::render_template::run(&template)?,
        Commands::RenderProperties { spec } => commands::render_properties::run(&spec)?,
        Commands::Listeners { listeners } => commands::listeners::run(&listeners)?,
        Commands::KafkaReady {
            min_brokers,
            timeout,
            bootstrap_servers,
            config,
            zookeeper_connect,
            security,
        } => {
            let options = KafkaReadyOptions {
                bootstrap_servers,
                config,
                zookeeper_connect,
                security,
            };
            let settings = load_probe_settings()?;
            commands::kafka_ready::run(&min_brokers, &timeout, &options, &settings).await?;
        }
        Commands::SchemaRegistryReady(args) => {
            let settings = load_probe_settings()?;
            commands::ready::run(Service::SchemaRegistry, args, &settings).await?;
        }
        Commands::KafkaRestReady(args) => {
            let settings = load_probe_settings()?;
            commands::ready::run(Service::KafkaRest, args, &settings).await?;
        }
        Commands::ControlCenterReady(args) => {
            let settings = load_probe_settings()?;
            commands::ready::run(Service::ControlCenter, args, &settings).await?;
        }
        Commands::ConnectReady(args) => {
            let settings = load_probe_settings()?;
            commands::ready::run(Service::Connect, args, &settings).await?;
        }
        Commands::WaitForServer {
            host,
            port,
            timeout,
        } => {
            let settings = load_probe_settings()?;
            commands::wait::run_server(&host, &port, &timeout, &settings).await?;
        }
        Commands::WaitForHttp { url, timeout } => {
            let settings = load_probe_settings()?;
            commands::wait::run_http(&url, &timeout, &settings).await?;
        }
    }

    Ok(())
}
