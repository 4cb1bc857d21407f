use super::*;

#[test]
fn multiples_config_to_options() {
    let config = MultiplesConfig {
        sort: true,
        top: Some(3),
        preserve_order: false,
        totals: true,
        title: Some("ignored here".to_string()),
    };

    let options = config.options();
    assert!(options.sort);
    assert_eq!(options.top, Some(3));
    assert!(!options.preserve_order);
    assert!(options.totals);
}

#[test]
fn default_config_serializes_to_toml() {
    let text = toml::to_string(&Config::default()).unwrap();
    assert!(text.contains("[multiples]"));
    assert!(text.contains("preserve_aspect_ratio = \"xMinYMin\""));
    assert!(!text.contains("top"));
}

#[test]
fn config_toml_round_trip() {
    let mut config = Config::default();
    config.chart.title_font_family = Some("Helvetica".to_string());
    config.multiples.top = Some(5);
    config.input.newline = Some("//".to_string());

    let text = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}
