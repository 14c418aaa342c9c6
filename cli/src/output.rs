use std::collections::BTreeMap;

use broker_config_core::client::is_sensitive;
use broker_config_core::config::Config;

const MASK: &str = "********";

/// The configuration document, as it would be stored (SASL password masked unless `show_secrets`)
pub(crate) fn render_json(conf: &Config, show_secrets: bool) -> serde_json::Result<String> {
    if show_secrets {
        return serde_json::to_string_pretty(conf);
    }
    let mut masked = conf.clone();
    if let Some(sasl) = masked.sasl.as_mut() {
        sasl.password = MASK.to_string();
    }
    serde_json::to_string_pretty(&masked)
}

/// One `key=value` per line, sorted by key, secrets masked
pub(crate) fn render_properties(props: &BTreeMap<String, String>) -> String {
    props
        .iter()
        .map(|(key, value)| {
            if is_sensitive(key) {
                format!("{key}={MASK}")
            } else {
                format!("{key}={value}")
            }
        })
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use broker_config_core::client::client_properties;
    use broker_config_core::config::Config;

    use crate::output::{render_json, render_properties};

    #[test]
    fn properties_are_sorted_and_masked() {
        let mut conf = Config::from_broker_url("sasl_ssl://broker1:9092");
        if let Some(sasl) = conf.sasl.as_mut() {
            sasl.username = "key".to_string();
            sasl.password = "hunter2".to_string();
        }
        let rendered = render_properties(&client_properties(&conf).expect("Could not build properties"));
        assert_eq!(
            rendered,
            [
                "bootstrap.servers=broker1:9092",
                "sasl.mechanism=PLAIN",
                "sasl.password=********",
                "sasl.username=key",
                "security.protocol=SASL_SSL",
            ]
            .join("\n")
        );
    }

    #[test]
    fn no_properties() {
        assert_eq!(render_properties(&BTreeMap::new()), "");
    }

    #[test]
    fn json_document() {
        let rendered = render_json(&Config::from_broker_url("sasl_ssl://broker1:9092"), true).expect("Could not render JSON");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("Rendered JSON is invalid");
        assert_eq!(
            value,
            serde_json::json!({
                "brokers": ["broker1:9092"],
                "sasl": { "mechanism": "PLAIN", "username": "", "password": "" },
                "tls": { "insecureSkipVerify": false }
            })
        );
    }

    #[test]
    fn json_password_is_masked_unless_asked_for() {
        let mut conf = Config::from_broker_url("sasl_ssl://broker1:9092");
        if let Some(sasl) = conf.sasl.as_mut() {
            sasl.username = "key".to_string();
            sasl.password = "hunter2".to_string();
        }

        let masked: serde_json::Value =
            serde_json::from_str(&render_json(&conf, false).expect("Could not render JSON")).expect("Rendered JSON is invalid");
        assert_eq!(masked["sasl"]["password"], "********");
        assert_eq!(masked["sasl"]["username"], "key");

        let shown: serde_json::Value =
            serde_json::from_str(&render_json(&conf, true).expect("Could not render JSON")).expect("Rendered JSON is invalid");
        assert_eq!(shown["sasl"]["password"], "hunter2");
    }

    #[test]
    fn json_without_sasl_is_left_alone() {
        let conf = Config {
            brokers: vec!["broker1:9092".to_string()],
            ..Config::default()
        };
        assert_eq!(
            render_json(&conf, false).expect("Could not render JSON"),
            render_json(&conf, true).expect("Could not render JSON")
        );
    }
}
