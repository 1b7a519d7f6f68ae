use std::sync::Once;

use env_logger::Builder;

use crate::config::LogLevel;

/// Sets up `env_logger` once. `RUST_LOG` is read first and the requested
/// level is applied on top of it.
pub fn init_logger(level: LogLevel) {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let mut builder = Builder::from_default_env();

        if level == LogLevel::Off {
            builder
                .filter_level(log::LevelFilter::Off)
                .format(|_, _| Ok(()))
                .try_init()
                .ok();
        } else {
            builder
                .filter_level(level.to_filter())
                .format_timestamp(None)
                .format_target(false)
                .try_init()
                .ok();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_logger(LogLevel::Warn);
        init_logger(LogLevel::Trace);
        log::warn!("logger initialised twice without panicking");
    }
}
