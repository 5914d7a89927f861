//! # Harness Relay Library / Harness Relay 库
//!
//! This library provides the core functionality for the Harness Relay tool,
//! a launch controller and status relay for device-based test harnesses.
//! It resolves command-line arguments and filter files into a normalized
//! launch plan, and relays test lifecycle events between processes over a
//! pluggable message bus.
//!
//! 此库为 Harness Relay 工具提供核心功能，
//! 这是一个面向设备端测试工具链的启动控制器与状态中继。
//! 它将命令行参数和过滤器文件解析为规范化的启动计划，
//! 并通过可插拔的消息总线在进程之间中继测试生命周期事件。
//!
//! ## Modules / 模块
//!
//! - `core` - Launch configuration, argument and filter resolution
//! - `infra` - Infrastructure services like file access and path expansion
//! - `reporter` - Test status events, message bus, sender and receiver
//! - `reporting` - Console rendering of launch plans and status events
//! - `cli` - Command-line entry point
//!
//! - `core` - 启动配置、参数与过滤器解析
//! - `infra` - 基础设施服务，如文件访问和路径展开
//! - `reporter` - 测试状态事件、消息总线、发送端与接收端
//! - `reporting` - 启动计划与状态事件的控制台呈现
//! - `cli` - 命令行入口

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporter;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::args;
pub use crate::core::config::{LaunchConfig, RunnerKind, ShadowsAllowlist};
pub use crate::core::error::LaunchError;
pub use crate::core::filter;
pub use crate::reporter::events::StatusEvent;

pub use rust_i18n::t;

/// Initializes the application's internationalization (i18n) based on the
/// system locale, and returns the locale that was selected.
///
/// This function detects the user's system locale and sets the appropriate
/// language for the application's user interface. It attempts to match the
/// full locale (e.g., "zh-CN"), then just the language code (e.g., "en"),
/// and finally falls back to the default language ("en").
pub fn init() -> String {
    // Detect system locale and set it for i18n.
    // Fallback to "en" if detection fails.
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    // Try to match the full locale first (e.g., "zh-CN")
    // Then try to match the language part only (e.g., "en" from "en-US")
    // Finally, fall back to "en"
    let lang = if available_locales.contains(&locale.as_str()) {
        &locale
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
    lang.to_string()
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
