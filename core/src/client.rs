use std::collections::BTreeMap;

use rdkafka::ClientConfig;

use crate::config::{ClientCertificateSecretRef, Config};
use crate::errors::{BrokerConfigError, BrokerConfigResult};

/// librdkafka properties whose value must never be displayed as is
pub const SENSITIVE_PROPERTIES: &[&str] = &["sasl.password", "ssl.key.pem"];

/// PEM-encoded material a client certificate secret reference points to
#[derive(Clone)]
pub struct ClientCertificate {
    pub key_pem: String,
    pub cert_pem: String,
}

/// Resolves client certificate secret references into actual key / certificate pairs
/// (from a secret store, mounted files, whatever the caller has at hand)
pub trait CertificateSource {
    fn resolve(&self, secret_ref: &ClientCertificateSecretRef) -> Result<ClientCertificate, String>;
}

/// Returns the librdkafka properties matching a broker configuration
/// The client certificate reference (if any) is left unresolved, use `client_properties_with` for mTLS
pub fn client_properties(conf: &Config) -> BrokerConfigResult<BTreeMap<String, String>> {
    let props = base_properties(conf)?;
    if let Some(secret_ref) = certificate_ref(conf) {
        log::warn!(
            "Client certificate secret '{}/{}' is referenced but no certificate source was given, mTLS won't be configured",
            secret_ref.namespace,
            secret_ref.name
        );
    }
    Ok(props)
}

/// Same as `client_properties`, resolving the client certificate reference through `source`
pub fn client_properties_with(conf: &Config, source: &dyn CertificateSource) -> BrokerConfigResult<BTreeMap<String, String>> {
    let mut props = base_properties(conf)?;
    if let Some(secret_ref) = certificate_ref(conf) {
        let certificate = source.resolve(secret_ref).map_err(|reason| BrokerConfigError::CertificateResolution {
            namespace: secret_ref.namespace.clone(),
            name: secret_ref.name.clone(),
            reason,
        })?;
        log::debug!("Resolved client certificate from secret '{}/{}'", secret_ref.namespace, secret_ref.name);
        props.insert("ssl.key.pem".to_string(), certificate.key_pem);
        props.insert("ssl.certificate.pem".to_string(), certificate.cert_pem);
    }
    Ok(props)
}

/// Creates an rdkafka client configuration (no connection is made until a client is created from it)
pub fn client_config(conf: &Config) -> BrokerConfigResult<ClientConfig> {
    Ok(to_client_config(client_properties(conf)?))
}

pub fn client_config_with(conf: &Config, source: &dyn CertificateSource) -> BrokerConfigResult<ClientConfig> {
    Ok(to_client_config(client_properties_with(conf, source)?))
}

/// Whether a property value should be masked when displayed
pub fn is_sensitive(property: &str) -> bool {
    SENSITIVE_PROPERTIES.contains(&property)
}

fn to_client_config(props: BTreeMap<String, String>) -> ClientConfig {
    let mut builder = ClientConfig::new();
    for (key, value) in props {
        builder.set(key, value);
    }
    builder
}

fn certificate_ref(conf: &Config) -> Option<&ClientCertificateSecretRef> {
    conf.tls.as_ref().and_then(|tls| tls.client_certificate_secret_ref.as_ref())
}

fn base_properties(conf: &Config) -> BrokerConfigResult<BTreeMap<String, String>> {
    if conf.brokers.is_empty() {
        return Err(BrokerConfigError::NoBrokers);
    }
    let mut props = BTreeMap::new();
    props.insert("bootstrap.servers".to_string(), conf.brokers.join(","));
    let protocol = match (&conf.sasl, &conf.tls) {
        (Some(_), Some(_)) => "SASL_SSL",
        (Some(_), None) => "SASL_PLAINTEXT",
        (None, Some(_)) => "SSL",
        (None, None) => "PLAINTEXT",
    };
    props.insert("security.protocol".to_string(), protocol.to_string());
    if let Some(sasl) = &conf.sasl {
        props.insert("sasl.mechanism".to_string(), sasl.mechanism.clone());
        props.insert("sasl.username".to_string(), sasl.username.clone());
        props.insert("sasl.password".to_string(), sasl.password.clone());
    }
    if let Some(tls) = &conf.tls {
        if tls.insecure_skip_verify {
            props.insert("enable.ssl.certificate.verification".to_string(), "false".to_string());
            props.insert("ssl.endpoint.identification.algorithm".to_string(), "none".to_string());
        }
    }
    log::debug!(
        "Built client properties for {} broker(s) using {}",
        conf.brokers.len(),
        protocol
    );
    Ok(props)
}
