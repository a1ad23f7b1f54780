use scroll_guard_core::visibility::{IntersectionRule, TieBreak, ViewportMargin};
use scroll_guard_core::{ConfigError, PageConfig, RateLimiterConfig};

#[test]
fn test_partial_sections_keep_defaults() {
    let config = PageConfig::from_toml_str(
        r#"
        [nav]
        lead_in = 80
        tie_break = "first_match"

        [reveal]
        threshold = 0.25
        "#,
    )
    .unwrap();

    assert_eq!(config.nav.lead_in, 80);
    assert_eq!(config.nav.tie_break, TieBreak::FirstMatch);
    assert_eq!(config.nav.debounce, RateLimiterConfig::leading(10));
    assert_eq!(config.nav.rule(), IntersectionRule::offset_passed(80));

    assert_eq!(config.reveal.threshold, 0.25);
    assert_eq!(config.reveal.margin, ViewportMargin::new(0, -100));
    assert_eq!(config.back_to_top.threshold, 300);
}

#[test]
fn test_margin_inline_table() {
    let config = PageConfig::from_toml_str("[lazy_images]\nmargin = { bottom = 200 }\n").unwrap();
    assert_eq!(config.lazy_images.margin, ViewportMargin::new(0, 200));
    assert_eq!(
        config.lazy_images.rule(),
        IntersectionRule::Intersects {
            margin: ViewportMargin::new(0, 200),
            threshold: 0.0,
        }
    );
}

#[test]
fn test_negative_window_rejected() {
    let result = PageConfig::from_toml_str("[nav.debounce]\nwindow_ms = -10\n");
    assert_eq!(result, Err(ConfigError::NegativeWindow { window_ms: -10 }));
}

#[test]
fn test_threshold_out_of_range_rejected() {
    let result = PageConfig::from_toml_str("[reveal]\nthreshold = 1.5\n");
    assert_eq!(result, Err(ConfigError::InvalidThreshold { threshold: 1.5 }));
}

#[test]
fn test_malformed_document_rejected() {
    let result = PageConfig::from_toml_str("[nav\nlead_in = ");
    assert!(matches!(result, Err(ConfigError::Parse(_))));

    let result = PageConfig::from_toml_str("[nav]\nlead_in = \"far\"\n");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_serialized_config_parses_back() {
    let mut config = PageConfig::default();
    config.parallax.enabled = false;
    config.nav.debounce = RateLimiterConfig::trailing(75);

    let text = config.to_toml_string().unwrap();
    assert_eq!(PageConfig::from_toml_str(&text).unwrap(), config);
}
