//! # Console Reporting Module / 控制台报告模块
//!
//! Renders the resolved launch plan after argument parsing, and provides a
//! status listener that prints test lifecycle events as they arrive.
//!
//! 在参数解析完成后呈现解析出的启动计划，
//! 并提供一个随事件到达打印测试生命周期的状态监听器。

use colored::*;

use crate::core::config::LaunchConfig;
use crate::infra::t;
use crate::reporter::receiver::RunStatusCallback;

/// Prints a formatted summary of the resolved launch configuration.
///
/// Shows the selection filters, the engine config and results paths, and the
/// shadows allowlist policy. The merged filter expression line is a
/// diagnostic join of the filter set; the engine composes the set itself.
///
/// 打印解析后启动配置的格式化摘要。合并过滤表达式仅为诊断显示。
///
/// # Output Format / 输出格式
/// ```text
/// --- Resolved Launch Plan ---
///   Package filters: org.example.feature
///   Runner filters: org.junit.runners.JUnit4
///   Test filters (2):
///     - base.Unit.*
///     - net.Socket*-net.SocketSlowTest.*
///   Merged filter expression: base.Unit.*:net.Socket*-net.SocketSlowTest.*
///   JSON config: config.json
///   Shadows allowlist: allow all
/// ```
pub fn print_launch_plan(config: &LaunchConfig, locale: &str) {
    println!("\n{}", t!("plan_banner", locale = locale).bold());

    if config.list_tests_only() {
        println!("  {}", t!("plan_list_only", locale = locale).cyan());
    }

    if !config.package_filters().is_empty() {
        let filters = config
            .package_filters()
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "  {}",
            t!("plan_package_filters", locale = locale, filters = filters)
        );
    }

    if !config.runner_filters().is_empty() {
        let runners = config
            .runner_filters()
            .iter()
            .map(|r| r.class_name().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "  {}",
            t!("plan_runner_filters", locale = locale, runners = runners)
        );
    }

    if config.gtest_filters().is_empty() {
        println!("  {}", t!("plan_no_filters", locale = locale).dimmed());
    } else {
        println!(
            "  {}",
            t!(
                "plan_gtest_filters",
                locale = locale,
                count = config.gtest_filters().len()
            )
        );
        for expression in config.gtest_filters().iter() {
            if expression.is_empty() {
                // An empty expression comes from a filter file with no
                // tokens; it selects nothing on its own.
                println!("    - {}", t!("plan_empty_expression", locale = locale).dimmed());
            } else {
                println!("    - {}", expression.yellow());
            }
        }
        println!(
            "  {}",
            t!(
                "plan_merged_expression",
                locale = locale,
                expression = config.gtest_filters().to_display_string()
            )
        );
    }

    println!(
        "  {}",
        t!(
            "plan_json_config",
            locale = locale,
            path = config.json_config_path()
        )
    );
    if let Some(path) = config.json_output_path() {
        println!("  {}", t!("plan_json_output", locale = locale, path = path));
    }

    match config.shadows_allowlist().entry_count() {
        None => println!("  {}", t!("plan_allowlist_all", locale = locale).dimmed()),
        Some(count) => println!(
            "  {}",
            t!("plan_allowlist_entries", locale = locale, count = count)
        ),
    }
}

/// A status listener that prints each lifecycle event as a timestamped,
/// colored console line. Register it on a `StatusReceiver` to follow a test
/// run live.
///
/// 将每个生命周期事件打印为带时间戳的彩色控制台行的状态监听器。
pub struct ConsoleStatusListener {
    locale: String,
}

impl ConsoleStatusListener {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    fn timestamp() -> String {
        chrono::Local::now().format("[%H:%M:%S]").to_string()
    }
}

impl RunStatusCallback for ConsoleStatusListener {
    fn on_run_started(&self, pid: u32) {
        println!(
            "{} {}",
            Self::timestamp().dimmed(),
            t!("status_run_started", locale = &self.locale, pid = pid).green()
        );
    }

    fn on_run_finished(&self, pid: u32) {
        println!(
            "{} {}",
            Self::timestamp().dimmed(),
            t!("status_run_finished", locale = &self.locale, pid = pid).green()
        );
    }

    fn on_uncaught_exception(&self, pid: u32, stack_trace: &str) {
        println!(
            "{} {}",
            Self::timestamp().dimmed(),
            t!("status_uncaught_exception", locale = &self.locale, pid = pid)
                .red()
                .bold()
        );
        if !stack_trace.is_empty() {
            println!("{}", stack_trace);
        }
    }
}
