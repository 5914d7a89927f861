//! # Argument Parsing Module / 参数解析模块
//!
//! This module walks the launcher's flat `--flag value` token stream and
//! dispatches every recognized flag to the configuration builder. Tokens the
//! launcher does not recognize are ignored with a diagnostic line — callers
//! routinely forward flags meant for other tools in the same command line.
//!
//! 此模块遍历启动器扁平的 `--flag value` 令牌流，
//! 并将每个可识别的标志分发到配置构建器。
//! 无法识别的令牌会被忽略并打印诊断信息 ——
//! 调用方经常在同一命令行中转发属于其他工具的标志。

use crate::core::config::{LaunchConfigBuilder, RunnerKind, ShadowsAllowlist};
use crate::core::error::LaunchError;
use crate::core::filter;
use crate::t;

/// Parses the launcher's argument tokens into a [`LaunchConfig`].
///
/// Recognized flags:
///
/// | flag | effect |
/// |---|---|
/// | `--list-tests` | list tests only, do not run them |
/// | `--package-filter <name>` | add a package filter (repeatable) |
/// | `--runner-filter <class>` | resolve and add a runner filter (repeatable) |
/// | `--gtest-filter <expr>` | add a gtest filter expression (repeatable) |
/// | `--test-launcher-filter-file <path>` | parse a filter file into one expression (repeatable) |
/// | `--json-results <path>` | set the results output path |
/// | `--json-config <path>` | set the engine config path (required) |
/// | `--shadows-allowlist <path>` | load the shadows allowlist policy |
///
/// Any other `--flag`, and any token not prefixed with `--`, is logged and
/// skipped. A flag whose value would sit past the end of the token list
/// fails exactly like a missing value. After the scan, a missing
/// `--json-config` is fatal.
///
/// The parser never terminates the process; the embedding CLI layer maps
/// every [`LaunchError`] to exit code 1.
///
/// [`LaunchConfig`]: crate::core::config::LaunchConfig
pub fn parse_args(argv: &[String]) -> Result<crate::core::config::LaunchConfig, LaunchError> {
    let mut builder = LaunchConfigBuilder::new();

    let mut i = 0;
    while i < argv.len() {
        let token = &argv[i];
        if let Some(flag) = token.strip_prefix("--") {
            match flag {
                "list-tests" => builder.set_list_tests_only(),
                "package-filter" => {
                    let value = next_value(argv, &mut i, flag)?;
                    builder.add_package_filter(value);
                }
                "runner-filter" => {
                    let value = next_value(argv, &mut i, flag)?;
                    builder.add_runner_filter(RunnerKind::resolve(value)?);
                }
                "gtest-filter" => {
                    let value = next_value(argv, &mut i, flag)?;
                    builder.add_gtest_filter(value);
                }
                "test-launcher-filter-file" => {
                    let path = next_value(argv, &mut i, flag)?;
                    builder.add_gtest_filter(filter::read_filter_file(path)?);
                }
                "json-results" => {
                    let path = next_value(argv, &mut i, flag)?;
                    builder.set_json_output_path(path);
                }
                "json-config" => {
                    let path = next_value(argv, &mut i, flag)?;
                    builder.set_json_config_path(path);
                }
                "shadows-allowlist" => {
                    let path = next_value(argv, &mut i, flag)?;
                    builder.set_shadows_allowlist(ShadowsAllowlist::from_file(path)?);
                }
                _ => println!("{}", t!("ignoring_flag", flag = flag)),
            }
        } else {
            println!("{}", t!("ignoring_argument", argument = token));
        }
        i += 1;
    }

    builder.build()
}

/// Consumes the value slot following the flag at `*i`.
///
/// Advances the cursor even on failure so the missing-value case and the
/// value-past-the-end case report identically.
fn next_value<'a>(argv: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, LaunchError> {
    *i += 1;
    argv.get(*i)
        .map(String::as_str)
        .ok_or_else(|| LaunchError::MissingValue {
            flag: flag.to_string(),
        })
}
