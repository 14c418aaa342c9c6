mod extract_from_cmd;
mod output;

use std::error::Error;

use broker_config_core::client::client_properties;
use clap::Parser;
use env_logger::Env;

use crate::extract_from_cmd::extract_config;
use crate::output::{render_json, render_properties};

/// Builds a Kafka broker configuration and prints it, either as a JSON document or as librdkafka properties
/// The configuration is assembled from (in this order):
///   - a configuration file (JSON, TOML, YAML...) describing brokers, SASL and TLS options: --cluster-config-file
///   - a Confluent-style broker URL: --broker-url=sasl_ssl://host:port
///     (only 'sasl_ssl://' URLs are understood, anything else leaves the configuration as is)
///   - SASL / TLS overrides: --sasl-username, --sasl-password, --insecure-skip-verify, ...
///
/// The SASL password is masked in the printed document, use --show-secrets to get a reusable one
///
/// A full valid example could be:
///   broker-config --broker-url sasl_ssl://pkc-123.eu-west-1.aws.confluent.cloud:9092 --sasl-username=KEY --sasl-password=SECRET --client-properties
///
/// Another one:
///   broker-config --cluster-config-file=/opt/secrets/kafka.json
///
#[derive(Clone, Parser, Debug, Default)]
#[clap(version, about)]
pub(crate) struct BrokerConfigCli {
    /// Broker configuration file
    #[clap(short, long)]
    pub(crate) cluster_config_file: Option<String>,

    /// Confluent-style broker URL (sasl_ssl://host:port), replaces the brokers from the configuration file
    #[clap(short, long)]
    pub(crate) broker_url: Option<String>,

    /// SASL mechanism (PLAIN, SCRAM-SHA-256, SCRAM-SHA-512...), enables SASL
    #[clap(long)]
    pub(crate) sasl_mechanism: Option<String>,
    /// SASL username, enables SASL
    #[clap(long)]
    pub(crate) sasl_username: Option<String>,
    /// SASL password, enables SASL
    #[clap(long)]
    pub(crate) sasl_password: Option<String>,

    /// Enables TLS without verifying the brokers' certificates
    #[clap(long)]
    pub(crate) insecure_skip_verify: bool,

    /// Print the librdkafka client properties (secrets masked) rather than the configuration document
    #[clap(long)]
    pub(crate) client_properties: bool,

    /// Print the SASL password in the configuration document instead of masking it
    #[clap(long)]
    pub(crate) show_secrets: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = BrokerConfigCli::parse();
    let conf = extract_config(&cli)?;
    log::debug!("Broker configuration: {:?}", conf);
    if cli.client_properties {
        println!("{}", render_properties(&client_properties(&conf)?));
    } else {
        println!("{}", render_json(&conf, cli.show_secrets)?);
    }
    Ok(())
}
