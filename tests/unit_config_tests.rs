//! # Config Module Unit Tests / Config 模块单元测试
//!
//! This module contains unit tests for the `config.rs` module, covering the
//! launch configuration builder invariant, the runner registry, and the
//! shadows allowlist policy.
//!
//! 此模块包含 `config.rs` 模块的单元测试，
//! 覆盖启动配置构建器的约束、runner 注册表和 shadows 允许列表策略。

use harness_relay::core::config::LaunchConfigBuilder;
use harness_relay::{LaunchError, RunnerKind, ShadowsAllowlist};

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn test_build_without_json_config_fails() {
        let builder = LaunchConfigBuilder::new();
        let err = builder.build().unwrap_err();
        assert!(matches!(err, LaunchError::MissingJsonConfig));
    }

    #[test]
    fn test_build_with_empty_json_config_fails() {
        let mut builder = LaunchConfigBuilder::new();
        builder.set_json_config_path("");
        let err = builder.build().unwrap_err();
        assert!(matches!(err, LaunchError::MissingJsonConfig));
    }

    #[test]
    fn test_build_defaults() {
        let mut builder = LaunchConfigBuilder::new();
        builder.set_json_config_path("cfg.json");
        let config = builder.build().unwrap();

        assert_eq!(config.json_config_path(), "cfg.json");
        assert!(config.package_filters().is_empty());
        assert!(config.runner_filters().is_empty());
        assert!(config.gtest_filters().is_empty());
        assert!(!config.list_tests_only());
        assert!(config.json_output_path().is_none());
        assert!(config.shadows_allowlist().is_allow_all());
    }

    #[test]
    fn test_builder_accumulates_filters() {
        let mut builder = LaunchConfigBuilder::new();
        builder.add_package_filter("org.example.base");
        builder.add_runner_filter(RunnerKind::JUnit4);
        builder.add_runner_filter(RunnerKind::JUnit4);
        builder.add_gtest_filter("Suite.*");
        builder.set_json_config_path("cfg.json");
        let config = builder.build().unwrap();

        assert_eq!(config.package_filters().len(), 1);
        // Set semantics: the duplicate runner collapsed.
        assert_eq!(config.runner_filters().len(), 1);
        assert_eq!(config.gtest_filters().len(), 1);
    }
}

#[cfg(test)]
mod runner_registry_tests {
    use super::*;

    #[test]
    fn test_canonical_names_resolve() {
        assert_eq!(
            RunnerKind::resolve("org.junit.runners.JUnit4").unwrap(),
            RunnerKind::JUnit4
        );
        assert_eq!(
            RunnerKind::resolve("org.junit.runners.Parameterized").unwrap(),
            RunnerKind::Parameterized
        );
        assert_eq!(
            RunnerKind::resolve("org.robolectric.RobolectricTestRunner").unwrap(),
            RunnerKind::Robolectric
        );
        assert_eq!(
            RunnerKind::resolve("androidx.test.ext.junit.runners.AndroidJUnit4").unwrap(),
            RunnerKind::AndroidJUnit4
        );
    }

    #[test]
    fn test_aliases_resolve_to_the_same_kind() {
        assert_eq!(
            RunnerKind::resolve("org.junit.runners.BlockJUnit4ClassRunner").unwrap(),
            RunnerKind::JUnit4
        );
    }

    #[test]
    fn test_unknown_name_is_not_found() {
        let err = RunnerKind::resolve("com.example.MadeUpRunner").unwrap_err();
        match err {
            LaunchError::UnknownRunner { name } => assert_eq!(name, "com.example.MadeUpRunner"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_display_is_the_canonical_class_name() {
        assert_eq!(
            RunnerKind::Robolectric.to_string(),
            "org.robolectric.RobolectricTestRunner"
        );
        assert_eq!(
            RunnerKind::JUnit4.class_name(),
            "org.junit.runners.JUnit4"
        );
    }
}

#[cfg(test)]
mod allowlist_tests {
    use super::*;

    #[test]
    fn test_allow_all_permits_everything() {
        let allowlist = ShadowsAllowlist::allow_all();
        assert!(allowlist.is_allow_all());
        assert!(allowlist.permits("org.example.Anything"));
        assert_eq!(allowlist.entry_count(), None);
    }

    #[test]
    fn test_default_is_allow_all() {
        assert!(ShadowsAllowlist::default().is_allow_all());
    }

    #[test]
    fn test_explicit_entries_restrict_membership() {
        let allowlist = ShadowsAllowlist::from_contents(
            "org.example.ShadowClock\norg.example.ShadowLooper\n",
        );
        assert!(!allowlist.is_allow_all());
        assert_eq!(allowlist.entry_count(), Some(2));
        assert!(allowlist.permits("org.example.ShadowClock"));
        assert!(!allowlist.permits("org.example.Other"));
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let allowlist =
            ShadowsAllowlist::from_contents("# header\n\norg.example.ShadowClock # trailing\n");
        assert_eq!(allowlist.entry_count(), Some(1));
        assert!(allowlist.permits("org.example.ShadowClock"));
    }

    #[test]
    fn test_empty_contents_permit_nothing() {
        let allowlist = ShadowsAllowlist::from_contents("# comments only\n");
        assert!(!allowlist.is_allow_all());
        assert_eq!(allowlist.entry_count(), Some(0));
        assert!(!allowlist.permits("org.example.Anything"));
    }
}
