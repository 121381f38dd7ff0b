//! Tests for roster configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        environment_mode = "reproducible"
        random_seed = 42
        restart_count = 10
        thread_count = { count = 2 }

        [termination]
        seconds_spent_limit = 30

        [fairness]
        step_limit = 80

        [rules]
        priority = ["night", "evening", "day"]
        weekday_only = []
        forbidden = [{ from = "night", to = "day" }]
    "#;

    let config = RosterConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::Reproducible);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.restart_count, 10);
    assert_eq!(config.thread_count, ThreadCount::Count(2));
    assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
    assert_eq!(config.fairness.step_limit, 80);
    assert_eq!(config.support.step_limit, DEFAULT_STEP_LIMIT);

    let rules = config.rules.unwrap();
    assert_eq!(rules.priority.len(), 3);
    assert!(rules.forbidden.is_forbidden(ShiftKind::Night, ShiftKind::Day));
    assert!(!rules.forbidden.is_forbidden(ShiftKind::Evening, ShiftKind::Day));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        environment_mode: full_assert
        random_seed: 42
        termination:
          millis_spent_limit: 1500
        support:
          primary: night
          secondary: evening
          threshold: 0.5
        parameters:
          min_rest_days: 9
          max_consecutive: 4
          support_enabled: true
          demand:
            day: 3
            night: 2
    "#;

    let config = RosterConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::FullAssert);
    assert!(config.environment_mode.is_asserted());
    assert_eq!(config.time_limit(), Some(Duration::from_millis(1500)));
    assert_eq!(config.support.threshold, 0.5);

    let params = config.parameters.unwrap();
    assert_eq!(params.min_rest_days, 9);
    assert_eq!(params.demand.get(ShiftKind::Night), 2);
    assert_eq!(params.demand.get(ShiftKind::Evening), 0);
    assert!(params.support_enabled);
}

#[test]
fn test_defaults() {
    let config = RosterConfig::from_toml_str("").unwrap();
    assert_eq!(config.restart_count, DEFAULT_RESTART_COUNT);
    assert_eq!(config.thread_count, ThreadCount::Auto);
    assert_eq!(config.shortage_weight, 1000.0);
    assert_eq!(config.support.primary, ShiftKind::Night);
    assert_eq!(config.support.secondary, ShiftKind::Evening);
    assert_eq!(config.support.threshold, 1.0);
    assert!(config.time_limit().is_none());
    assert!(config.parameters.is_none());
}

#[test]
fn test_builder() {
    let config = RosterConfig::new()
        .with_random_seed(123)
        .with_restart_count(5)
        .with_termination_seconds(2)
        .with_termination_millis(250)
        .with_thread_count(ThreadCount::None);

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.restart_count, 5);
    assert_eq!(config.time_limit(), Some(Duration::from_millis(2250)));
    assert_eq!(config.thread_count, ThreadCount::None);
}

#[test]
fn test_effective_seed() {
    assert_eq!(RosterConfig::new().effective_seed(), None);
    assert_eq!(
        RosterConfig::new()
            .with_environment_mode(EnvironmentMode::Reproducible)
            .effective_seed(),
        Some(0)
    );
    assert_eq!(RosterConfig::new().with_random_seed(9).effective_seed(), Some(9));
}

#[test]
fn test_invalid_values_rejected() {
    assert!(matches!(
        RosterConfig::from_toml_str("restart_count = 0"),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        RosterConfig::from_toml_str("shortage_weight = -1.0"),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        RosterConfig::from_toml_str("[support]\nprimary = \"day\"\nsecondary = \"day\""),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        RosterConfig::from_toml_str("[parameters]\nmax_consecutive = 0"),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        RosterConfig::from_toml_str("restart_count = \"many\""),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        RosterConfig::load("/definitely/not/here/roster.toml"),
        Err(ConfigError::Io(_))
    ));
}
