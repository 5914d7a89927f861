//! # Filter Resolution Module / 过滤器解析模块
//!
//! This module turns filter files and repeated filter flags into gtest-style
//! filter expressions. A filter file is line-oriented UTF-8 text: `#` starts
//! a comment, blank lines are skipped, and a leading `-` marks a token as
//! negative (excluded). The parsed file collapses into a single expression of
//! the form `positive1:positive2[-negative1:negative2]`.
//!
//! 此模块将过滤器文件和重复的过滤器标志转换为 gtest 风格的过滤表达式。
//! 过滤器文件是面向行的 UTF-8 文本：`#` 开始注释，空行被跳过，
//! 行首的 `-` 将该条目标记为排除项。解析后的文件合并为
//! `positive1:positive2[-negative1:negative2]` 形式的单个表达式。

use std::collections::BTreeSet;

use crate::core::error::LaunchError;
use crate::infra::fs;

/// Parses the contents of a filter file into one merged gtest filter string.
///
/// Per line: everything from the first `#` onward is dropped as a comment
/// *before any other processing*, then surrounding whitespace is trimmed and
/// empty lines are skipped. A leading `-` classifies the token as negative.
/// Within retained token content, `#` is rewritten to `.` (the
/// class#method -> class.method translation of the filter dialect). Because
/// comment truncation runs first, a token cannot carry a literal `#` past
/// that point; the rewrite is applied where the dialect defines it all the
/// same.
///
/// Positives are joined with `:`; if any negatives exist, a `-` and the
/// `:`-joined negatives are appended. A file of only comments and blank
/// lines parses to the empty string.
///
/// 解析过滤器文件内容，合并为单个 gtest 过滤字符串。注释截断先于其他
/// 所有处理；保留内容中的 `#` 会被重写为 `.`。
pub fn parse_filter_lines(contents: &str) -> String {
    let mut positive: Vec<String> = Vec::new();
    let mut negative: Vec<String> = Vec::new();

    for raw_line in contents.lines() {
        // Comment truncation happens before trimming and classification.
        let line = match raw_line.find('#') {
            Some(comment_idx) => &raw_line[..comment_idx],
            None => raw_line,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(token) = line.strip_prefix('-') {
            negative.push(token.replace('#', "."));
        } else {
            positive.push(line.replace('#', "."));
        }
    }

    let mut merged = positive.join(":");
    if !negative.is_empty() {
        merged.push('-');
        merged.push_str(&negative.join(":"));
    }
    merged
}

/// Reads and parses the filter file at `path` (after `~`/env expansion).
///
/// An unreadable file is fatal for the invocation: no partial result is
/// produced.
///
/// 读取并解析 `path` 处的过滤器文件（路径先做 `~`/环境变量展开）。
/// 文件不可读对本次调用是致命错误，不会产生部分结果。
pub fn read_filter_file(path: &str) -> Result<String, LaunchError> {
    let contents = fs::read_to_string(path).map_err(|source| LaunchError::Io {
        path: path.to_string(),
        source,
    })?;
    Ok(parse_filter_lines(&contents))
}

/// The accumulated set of gtest filter expressions for one invocation.
///
/// Each `--gtest-filter` value and each parsed filter file contributes one
/// opaque member. Set semantics apply: duplicates collapse, and member order
/// does not reflect flag order. Files are never cross-merged with each other;
/// every file's merged string stands alone in the set. How the external test
/// engine composes multiple expressions is its own business.
///
/// 单次调用累积的 gtest 过滤表达式集合。集合语义：重复项合并，
/// 成员顺序与标志顺序无关。各过滤器文件的表达式互不合并。
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterSet {
    filters: BTreeSet<String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one filter expression. Re-inserting an identical expression is a
    /// no-op.
    pub fn insert(&mut self, expression: impl Into<String>) {
        self.filters.insert(expression.into());
    }

    /// Iterates the expressions in deterministic (sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.filters.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn contains(&self, expression: &str) -> bool {
        self.filters.contains(expression)
    }

    /// Joins the non-empty expressions with `:` for diagnostics and console
    /// output. This is a display form, not the engine-side composition.
    ///
    /// 将非空表达式用 `:` 连接，仅用于诊断显示，不是引擎侧的合成规则。
    pub fn to_display_string(&self) -> String {
        self.filters
            .iter()
            .filter(|f| !f.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(":")
    }
}

impl FromIterator<String> for FilterSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            filters: iter.into_iter().collect(),
        }
    }
}
