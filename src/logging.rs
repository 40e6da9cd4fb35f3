// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 支持环境变量配置日志级别
// 日志一律写 stderr,stdout 只输出报价 JSON
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

fn env_filter() -> EnvFilter {
    // 从环境变量读取日志级别，默认为 info
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: info）
///   例如: RUST_LOG=debug 或 RUST_LOG=pouch_quote=trace
///
/// # 示例
/// ```no_run
/// use pouch_quote::logging;
/// logging::init();
/// ```
pub fn init() {
    init_with_format(LogFormat::Text);
}

/// 按指定格式初始化日志系统（重复初始化时忽略）
pub fn init_with_format(format: LogFormat) {
    let builder = fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true);

    let _ = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
