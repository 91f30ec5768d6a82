use env_logger::Env;

/// Installs the global logger. `RUST_LOG` wins over `default_filter`.
pub fn init(default_filter: &str) {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use crate::config::log::init;

    #[test]
    fn test_init() {
        let noop_logger = log::logger();
        init("debug");
        let logger = log::logger();
        assert!(
            !ptr::eq(&*noop_logger, &*logger),
            "Should initialize global logger"
        );
    }
}
