// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持中文（默认）和英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// 报价说明一律显式传入 locale,不依赖全局语言设置
// ==========================================

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["zh-CN", "en"];

/// 翻译消息（指定语言,无参数）
///
/// # 示例
/// ```no_run
/// use pouch_quote::i18n::t;
/// let title = t("en", "explain.print.title");
/// ```
pub fn t(locale: &str, key: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 翻译消息（指定语言,带参数）
///
/// 占位符格式: %{name}
///
/// # 示例
/// ```no_run
/// use pouch_quote::i18n::t_with_args;
/// let msg = t_with_args("zh-CN", "explain.accessory.total", &[("cost", "12.00")]);
/// ```
pub fn t_with_args(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
    let mut result = t(locale, key);
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
