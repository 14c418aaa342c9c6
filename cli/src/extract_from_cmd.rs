use std::error::Error;

use broker_config_core::config::{Config, Sasl, Tls, SASL_SSL_PREFIX};
use broker_config_core::load;

use crate::BrokerConfigCli;

pub(crate) fn extract_config(cli: &BrokerConfigCli) -> Result<Config, Box<dyn Error>> {
    let mut conf = match (&cli.cluster_config_file, &cli.broker_url) {
        (Some(path), _) => load::from_file(path)?,
        (None, Some(_)) => Config::default(),
        (None, None) => {
            return Err("Broker configuration not found, try using either --broker-url or --cluster-config-file".into())
        }
    };
    if let Some(url) = &cli.broker_url {
        if !url.starts_with(SASL_SSL_PREFIX) {
            log::warn!(
                "Only {} broker URLs are understood, ignoring --broker-url={}",
                SASL_SSL_PREFIX,
                url
            );
        }
        conf.parse_broker_url(url);
    }
    apply_overrides(cli, &mut conf);
    Ok(conf)
}

fn apply_overrides(cli: &BrokerConfigCli, conf: &mut Config) {
    if cli.sasl_mechanism.is_some() || cli.sasl_username.is_some() || cli.sasl_password.is_some() {
        let sasl = conf.sasl.get_or_insert_with(Sasl::plain);
        if let Some(mechanism) = &cli.sasl_mechanism {
            sasl.mechanism = mechanism.clone();
        }
        if let Some(username) = &cli.sasl_username {
            sasl.username = username.clone();
        }
        if let Some(password) = &cli.sasl_password {
            sasl.password = password.clone();
        }
    }
    if cli.insecure_skip_verify {
        conf.tls.get_or_insert_with(Tls::default).insecure_skip_verify = true;
    }
}
