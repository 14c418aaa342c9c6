use serde::{Deserialize, Serialize};
use std::fmt;

/// The only broker URL scheme `Config::parse_broker_url` understands (Confluent Cloud style)
pub const SASL_SSL_PREFIX: &str = "sasl_ssl://";

/// Mechanism used when SASL has to be enabled without any further information
pub const DEFAULT_SASL_MECHANISM: &str = "PLAIN";

/// Entry of a TLS secret holding the private key, when `keyField` is not set
pub const DEFAULT_KEY_FIELD: &str = "tls.key";

/// Entry of a TLS secret holding the certificate, when `certField` is not set
pub const DEFAULT_CERT_FIELD: &str = "tls.crt";

/// How to reach a Kafka cluster
/// `sasl` and `tls` are optional, their absence meaning the feature is disabled
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// "host:port" entries, the first one usually being the primary broker
    pub brokers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sasl: Option<Sasl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<Tls>,
}

#[derive(Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Sasl {
    /// PLAIN, SCRAM-SHA-256, SCRAM-SHA-512... not checked here
    pub mechanism: String,
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tls {
    // config-rs lowercases keys, hence the aliases
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "clientcertificatesecretref")]
    pub client_certificate_secret_ref: Option<ClientCertificateSecretRef>,
    #[serde(default, alias = "insecureskipverify")]
    pub insecure_skip_verify: bool,
}

/// Points at a secret holding the client key and certificate used for mTLS
/// The secret itself is never read from here
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClientCertificateSecretRef {
    pub name: String,
    pub namespace: String,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "keyfield")]
    pub key_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "certfield")]
    pub cert_field: Option<String>,
}

impl Config {
    /// Builds a configuration out of a single broker URL, see `parse_broker_url`
    pub fn from_broker_url(url: &str) -> Config {
        let mut config = Config::default();
        config.parse_broker_url(url);
        config
    }

    /// Parses a Confluent-style broker URL (`sasl_ssl://host:port`)
    ///   - the broker list is replaced by the single "host:port" remainder
    ///   - TLS is enabled (with certificate verification) unless already configured
    ///   - SASL is enabled with the PLAIN mechanism unless already configured
    ///
    /// Any other input (other scheme, no scheme at all) leaves the configuration untouched
    pub fn parse_broker_url(&mut self, url: &str) {
        match url.strip_prefix(SASL_SSL_PREFIX) {
            Some(broker) => {
                self.brokers = vec![broker.to_string()];
                self.tls.get_or_insert_with(Tls::default);
                self.sasl.get_or_insert_with(Sasl::plain);
            }
            None => log::debug!("Not a {} broker URL, ignoring: {:?}", SASL_SSL_PREFIX, url),
        }
    }
}

impl Sasl {
    /// SASL/PLAIN with empty credentials, to be filled in later on
    pub fn plain() -> Sasl {
        Sasl {
            mechanism: DEFAULT_SASL_MECHANISM.to_string(),
            ..Sasl::default()
        }
    }
}

impl fmt::Debug for Sasl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sasl")
            .field("mechanism", &self.mechanism)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl ClientCertificateSecretRef {
    pub fn key_field(&self) -> &str {
        self.key_field.as_deref().unwrap_or(DEFAULT_KEY_FIELD)
    }

    pub fn cert_field(&self) -> &str {
        self.cert_field.as_deref().unwrap_or(DEFAULT_CERT_FIELD)
    }
}
