use std::{thread, time::Duration};

use log::info;

use crate::{config::AppConfig, observer::Observer, subject::Subject};

mod config;
mod error;
mod observer;
mod subject;

fn main() -> anyhow::Result<()> {
    let app_config = AppConfig::new()?;
    crate::config::log::init(&app_config.log_level);

    run(&app_config);
    Ok(())
}

/// Wires one observer to one subject, raises each event once and, in the
/// `handles` variant, detaches the first integer slot before returning.
fn run(app_config: &AppConfig) -> Vec<String> {
    info!("Running the {} variant", app_config.variant);
    let subject = Subject::default();
    let observer = Observer::attach(&subject, app_config.variant);

    thread::sleep(Duration::from_millis(app_config.delay_ms));

    subject.raise_int(app_config.int_value, app_config.companion_value);
    subject.raise_text(&app_config.text);
    observer.detach(&subject);

    observer.transcript()
}

#[cfg(test)]
mod tests {
    use crate::config::{AppConfig, Variant};

    use super::run;

    fn app_config(variant: Variant) -> AppConfig {
        AppConfig {
            delay_ms: 0,
            int_value: 1,
            companion_value: 2,
            text: "test".to_string(),
            variant,
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn test_run_handles() {
        let transcript = run(&app_config(Variant::Handles));

        assert_eq!(
            vec![
                "Integer value is 1 2",
                "Integer second slot is 1 2",
                "String value is test",
            ],
            transcript
        );
    }

    #[test]
    fn test_run_connect() {
        let transcript = run(&app_config(Variant::Connect));

        assert_eq!(
            vec!["Integer value is 1", "String value is test"],
            transcript
        );
    }
}
