//! # Launch Configuration Module / 启动配置模块
//!
//! This module defines the resolved launch configuration and its building
//! blocks: the runner registry that maps fully-qualified runner class names
//! to known runner kinds, and the opaque shadows allowlist policy.
//!
//! 此模块定义解析后的启动配置及其组成部分：
//! 将完全限定的 runner 类名映射到已知 runner 种类的注册表，
//! 以及不透明的 shadows 允许列表策略。

use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::core::error::LaunchError;
use crate::core::filter::FilterSet;
use crate::infra::fs;

/// A test runner implementation the harness knows how to host.
///
/// Runner selection used to be a reflective class lookup in the hosting VM;
/// here it is an explicit registry so an unknown identifier is an ordinary
/// resolution failure instead of a loader condition.
///
/// 测试工具链可以承载的 runner 实现。选择通过显式注册表完成，
/// 未知标识符是普通的解析失败。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RunnerKind {
    /// The plain JUnit4 block runner.
    JUnit4,
    /// The JUnit4 parameterized runner.
    Parameterized,
    /// The Robolectric sandbox runner.
    Robolectric,
    /// The AndroidX instrumentation runner.
    AndroidJUnit4,
}

/// Known runner identifiers, including historical aliases.
/// 已知的 runner 标识符，包含历史别名。
static RUNNER_REGISTRY: Lazy<HashMap<&'static str, RunnerKind>> = Lazy::new(|| {
    HashMap::from([
        ("org.junit.runners.JUnit4", RunnerKind::JUnit4),
        ("org.junit.runners.BlockJUnit4ClassRunner", RunnerKind::JUnit4),
        ("org.junit.runners.Parameterized", RunnerKind::Parameterized),
        ("org.robolectric.RobolectricTestRunner", RunnerKind::Robolectric),
        (
            "androidx.test.ext.junit.runners.AndroidJUnit4",
            RunnerKind::AndroidJUnit4,
        ),
    ])
});

impl RunnerKind {
    /// Resolves a fully-qualified runner class name against the registry.
    ///
    /// Unknown names fail with [`LaunchError::UnknownRunner`], the
    /// "not found" outcome the launch surface reports to users.
    pub fn resolve(name: &str) -> Result<Self, LaunchError> {
        RUNNER_REGISTRY
            .get(name)
            .copied()
            .ok_or_else(|| LaunchError::UnknownRunner {
                name: name.to_string(),
            })
    }

    /// The canonical class name for this runner kind.
    pub fn class_name(&self) -> &'static str {
        match self {
            RunnerKind::JUnit4 => "org.junit.runners.JUnit4",
            RunnerKind::Parameterized => "org.junit.runners.Parameterized",
            RunnerKind::Robolectric => "org.robolectric.RobolectricTestRunner",
            RunnerKind::AndroidJUnit4 => "androidx.test.ext.junit.runners.AndroidJUnit4",
        }
    }
}

impl fmt::Display for RunnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// The policy restricting which classes the test framework may shadow.
///
/// Carried as an opaque pass-through value: the harness loads it and hands it
/// to the framework, nothing in this crate interprets it beyond membership.
/// The default permits everything.
///
/// 限制测试框架可以 shadow 哪些类的策略。默认允许所有类。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowsAllowlist {
    // None means every class is permitted.
    entries: Option<BTreeSet<String>>,
}

impl ShadowsAllowlist {
    /// The permissive default: every class may be shadowed.
    pub fn allow_all() -> Self {
        Self { entries: None }
    }

    /// Loads an allowlist from the file at `path` (after `~`/env expansion).
    /// One class name per line; `#` starts a comment; blank lines are
    /// skipped. An unreadable file is fatal for the invocation.
    pub fn from_file(path: &str) -> Result<Self, LaunchError> {
        let contents = fs::read_to_string(path).map_err(|source| LaunchError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(Self::from_contents(&contents))
    }

    /// Parses allowlist text. Exposed separately so policies can be built
    /// without touching the filesystem.
    pub fn from_contents(contents: &str) -> Self {
        let entries = contents
            .lines()
            .map(|raw_line| match raw_line.find('#') {
                Some(comment_idx) => &raw_line[..comment_idx],
                None => raw_line,
            })
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            entries: Some(entries),
        }
    }

    /// Whether `class_name` may be shadowed under this policy.
    pub fn permits(&self, class_name: &str) -> bool {
        match &self.entries {
            None => true,
            Some(entries) => entries.contains(class_name),
        }
    }

    pub fn is_allow_all(&self) -> bool {
        self.entries.is_none()
    }

    /// Number of explicit entries; `None` for the allow-all policy.
    pub fn entry_count(&self) -> Option<usize> {
        self.entries.as_ref().map(BTreeSet::len)
    }
}

impl Default for ShadowsAllowlist {
    fn default() -> Self {
        Self::allow_all()
    }
}

/// The resolved launch configuration.
///
/// Built exactly once per invocation by the argument parser and read-only
/// afterwards; the only way to observe one is through the builder, which
/// refuses to produce a configuration without a `--json-config` path.
/// Package, runner and gtest filters are not mutually exclusive — the
/// external test-selection logic combines whichever are populated.
///
/// 解析后的启动配置。每次调用只构建一次，之后只读；
/// 构建器拒绝在缺少 `--json-config` 路径时产出配置。
/// 各类过滤器互不排斥，由外部的测试选择逻辑组合。
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    package_filters: BTreeSet<String>,
    runner_filters: BTreeSet<RunnerKind>,
    gtest_filters: FilterSet,
    shadows_allowlist: ShadowsAllowlist,
    list_tests_only: bool,
    json_config_path: String,
    json_output_path: Option<String>,
}

impl LaunchConfig {
    /// Package name filters (substrings or exact names).
    pub fn package_filters(&self) -> &BTreeSet<String> {
        &self.package_filters
    }

    /// Resolved runner filters.
    pub fn runner_filters(&self) -> &BTreeSet<RunnerKind> {
        &self.runner_filters
    }

    /// The accumulated gtest filter expressions.
    pub fn gtest_filters(&self) -> &FilterSet {
        &self.gtest_filters
    }

    pub fn shadows_allowlist(&self) -> &ShadowsAllowlist {
        &self.shadows_allowlist
    }

    /// Whether the invocation only lists tests instead of running them.
    pub fn list_tests_only(&self) -> bool {
        self.list_tests_only
    }

    /// Path of the JSON configuration consumed by the execution engine.
    /// Always non-empty.
    pub fn json_config_path(&self) -> &str {
        &self.json_config_path
    }

    /// Optional path for the engine's JSON results.
    pub fn json_output_path(&self) -> Option<&str> {
        self.json_output_path.as_deref()
    }
}

/// Mutable accumulator the argument parser dispatches into.
///
/// `build` freezes it into a [`LaunchConfig`], enforcing the
/// required-argument invariant.
///
/// 参数解析器写入的可变累加器。`build` 将其冻结为 [`LaunchConfig`]，
/// 并强制执行必需参数的约束。
#[derive(Debug, Default)]
pub struct LaunchConfigBuilder {
    package_filters: BTreeSet<String>,
    runner_filters: BTreeSet<RunnerKind>,
    gtest_filters: FilterSet,
    shadows_allowlist: Option<ShadowsAllowlist>,
    list_tests_only: bool,
    json_config_path: Option<String>,
    json_output_path: Option<String>,
}

impl LaunchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_list_tests_only(&mut self) {
        self.list_tests_only = true;
    }

    pub fn add_package_filter(&mut self, name: impl Into<String>) {
        self.package_filters.insert(name.into());
    }

    pub fn add_runner_filter(&mut self, runner: RunnerKind) {
        self.runner_filters.insert(runner);
    }

    pub fn add_gtest_filter(&mut self, expression: impl Into<String>) {
        self.gtest_filters.insert(expression);
    }

    pub fn set_shadows_allowlist(&mut self, allowlist: ShadowsAllowlist) {
        self.shadows_allowlist = Some(allowlist);
    }

    pub fn set_json_config_path(&mut self, path: impl Into<String>) {
        self.json_config_path = Some(path.into());
    }

    pub fn set_json_output_path(&mut self, path: impl Into<String>) {
        self.json_output_path = Some(path.into());
    }

    /// Freezes the accumulated state into an immutable [`LaunchConfig`].
    ///
    /// Fails with [`LaunchError::MissingJsonConfig`] if no usable
    /// `--json-config` value was seen during the scan.
    pub fn build(self) -> Result<LaunchConfig, LaunchError> {
        let json_config_path = self
            .json_config_path
            .filter(|path| !path.is_empty())
            .ok_or(LaunchError::MissingJsonConfig)?;

        Ok(LaunchConfig {
            package_filters: self.package_filters,
            runner_filters: self.runner_filters,
            gtest_filters: self.gtest_filters,
            shadows_allowlist: self.shadows_allowlist.unwrap_or_default(),
            list_tests_only: self.list_tests_only,
            json_config_path,
            json_output_path: self.json_output_path,
        })
    }
}
