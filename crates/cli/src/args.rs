//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read credentials for the HTTP readiness checks from the environment.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate host/port/timeout values; they are taken as strings
//!   and validated by the commands so bad input maps to the validation exit
//!   code rather than clap's usage error.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ub")]
#[command(about = "Utility belt for service containers: derive configuration and wait for dependencies", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  ub ensure KAFKA_ADVERTISED_LISTENERS\n  ub path /var/lib/kafka/data writable\n  ub render-template /etc/kafka/log4j.properties.template > /etc/kafka/log4j.properties\n  ub render-properties /etc/kafka/kafka-propertiesSpec.json > /etc/kafka/kafka.properties\n  ub listeners PLAINTEXT://broker:9092,SSL://broker:9093\n  ub schema-registry-ready schema-registry 8081 60\n  ub connect-ready connect 8083 120 --secure --ignore-cert\n  ub wait-for-http http://broker:8090/kafka/v3/clusters 60\n"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Positional target and connection flags shared by the HTTP readiness checks.
#[derive(Args, Debug, Clone)]
pub struct ReadyArgs {
    /// Host name or IP address of the service
    pub host: String,

    /// Port the service listens on
    #[arg(allow_negative_numbers = true)]
    pub port: String,

    /// Seconds to wait before giving up
    #[arg(allow_negative_numbers = true)]
    pub timeout: String,

    /// Use HTTPS instead of HTTP
    #[arg(long)]
    pub secure: bool,

    /// Skip TLS certificate verification (only with --secure)
    #[arg(long)]
    pub ignore_cert: bool,

    /// Username for basic authentication
    #[arg(long, env = "UB_USERNAME")]
    pub username: Option<String>,

    /// Password for basic authentication
    #[arg(long, env = "UB_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Succeed if an environment variable is set (even to an empty value)
    Ensure {
        /// Name of the environment variable
        name: String,
    },

    /// Check a file permission or existence
    Path {
        /// File to check
        path: PathBuf,

        /// One of: readable, writable, executable, existence
        operation: String,
    },

    /// Render a template against the environment and print it
    RenderTemplate {
        /// Path to the template file
        template: PathBuf,
    },

    /// Render Java properties from the environment using a JSON config spec
    RenderProperties {
        /// Path to the config spec file
        spec: PathBuf,
    },

    /// Strip the protocol from advertised listeners and print host:port pairs
    Listeners {
        /// Comma-separated advertised listeners, e.g. PLAINTEXT://broker:9092
        listeners: Vec<String>,
    },

    /// Wait for a Kafka cluster using the JVM readiness tool
    KafkaReady {
        /// Minimum number of brokers that must be available
        #[arg(allow_negative_numbers = true)]
        min_brokers: String,

        /// Seconds to wait before giving up
        #[arg(allow_negative_numbers = true)]
        timeout: String,

        /// Comma-separated list of brokers
        #[arg(short = 'b', long)]
        bootstrap_servers: Option<String>,

        /// Path to a client config file
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// ZooKeeper connect string
        #[arg(short = 'z', long)]
        zookeeper_connect: Option<String>,

        /// Security protocol
        #[arg(short = 's', long)]
        security: Option<String>,
    },

    /// Wait for Schema Registry to serve its config
    SchemaRegistryReady(ReadyArgs),

    /// Wait for the Kafka REST Proxy to list topics
    KafkaRestReady(ReadyArgs),

    /// Wait for Control Center to serve its UI
    ControlCenterReady(ReadyArgs),

    /// Wait for a Kafka Connect worker to report its version
    ConnectReady(ReadyArgs),

    /// Wait for a TCP port to accept connections
    WaitForServer {
        host: String,
        #[arg(allow_negative_numbers = true)]
        port: String,
        /// Seconds to wait before giving up
        #[arg(allow_negative_numbers = true)]
        timeout: String,
    },

    /// Wait for a URL to answer HTTP 200
    WaitForHttp {
        url: String,
        /// Seconds to wait before giving up
        #[arg(allow_negative_numbers = true)]
        timeout: String,
    },
}
