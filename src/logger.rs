//! 日志初始化
//!
//! `RUST_LOG` 优先；未设置时按 `verbose_logging` 选择 `debug` 或 `info`。

use tracing_subscriber::EnvFilter;

/// 初始化全局日志（重复调用无副作用，测试中可放心调用）
pub fn init() {
    init_with_verbosity(false);
}

/// 按详细程度初始化全局日志
pub fn init_with_verbosity(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
