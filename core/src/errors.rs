use thiserror::Error;

/// Possible errors when turning a [`crate::config::Config`] into something usable by a Kafka client.
/// Parsing broker URLs never fails, hence no variant for it.
#[derive(Error, Debug)]
pub enum BrokerConfigError {
    /// At least one "host:port" broker is needed to bootstrap a client.
    #[error("No broker configured, at least one 'host:port' entry is required")]
    NoBrokers,

    /// The [`crate::client::CertificateSource`] could not provide the referenced client certificate.
    #[error("Could not resolve client certificate secret '{namespace}/{name}': {reason}")]
    CertificateResolution {
        namespace: String,
        name: String,
        reason: String,
    },

    /// The configuration document could not be read or did not match the expected shape.
    #[error("Could not load broker configuration: {0}")]
    Load(#[from] ::config::ConfigError),
}

pub type BrokerConfigResult<T> = Result<T, BrokerConfigError>;
