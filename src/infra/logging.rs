//! Настройка tracing для бинарников и тестов.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TEST_INIT: Once = Once::new();

/// Подписчик для бинарников. Уровень берётся из `RUST_LOG`, по умолчанию `info`.
/// Повторный вызов ничего не ломает.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).try_init().ok();
}

/// Подписчик для тестов: `TEST_LOG` -> `RUST_LOG` -> `warn`, вывод через test writer.
pub fn init_test_tracing() {
    TEST_INIT.call_once(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
