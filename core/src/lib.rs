pub mod client;
pub mod config;
pub mod errors;
pub mod load;

pub use crate::config::Config;
pub use crate::errors::{BrokerConfigError, BrokerConfigResult};

#[cfg(test)]
mod tests {
    use quickcheck::{Arbitrary, Gen};

    use crate::config::{ClientCertificateSecretRef, Config, Sasl, Tls};

    // The root module contains test utilities, tests themselves are placed in every submodule

    // Property-Based Testing
    // Some of our tests are not "example-based", some are in the form of: "no matter what configuration, [...] should happen"
    // For this kind of tests we are using quickcheck
    // This part of the module contains generators for the configuration types

    fn rand_mechanism(g: &mut Gen) -> String {
        let mechanisms = &["PLAIN", "SCRAM-SHA-256", "SCRAM-SHA-512", "OAUTHBEARER", "GSSAPI"];
        if bool::arbitrary(g) {
            g.choose(mechanisms).unwrap().to_string()
        } else {
            String::arbitrary(g)
        }
    }

    impl Arbitrary for Sasl {
        fn arbitrary(g: &mut Gen) -> Self {
            Sasl {
                mechanism: rand_mechanism(g),
                username: String::arbitrary(g),
                password: String::arbitrary(g),
            }
        }
    }

    impl Arbitrary for ClientCertificateSecretRef {
        fn arbitrary(g: &mut Gen) -> Self {
            ClientCertificateSecretRef {
                name: String::arbitrary(g),
                namespace: String::arbitrary(g),
                key_field: Option::arbitrary(g),
                cert_field: Option::arbitrary(g),
            }
        }
    }

    impl Arbitrary for Tls {
        fn arbitrary(g: &mut Gen) -> Self {
            Tls {
                client_certificate_secret_ref: Option::arbitrary(g),
                insecure_skip_verify: bool::arbitrary(g),
            }
        }
    }

    impl Arbitrary for Config {
        fn arbitrary(g: &mut Gen) -> Self {
            Config {
                brokers: Vec::arbitrary(g),
                sasl: Option::arbitrary(g),
                tls: Option::arbitrary(g),
            }
        }
    }
}
