use std::fs;
use std::path::PathBuf;

use gaitscope::config::{AppConfig, DataConfig, FilterConfig, RankingConfig};

fn unique_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "gaitscope_config_restore_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    path
}

fn assert_config_eq(actual: &AppConfig, expected: &AppConfig) {
    assert_eq!(actual.data.workbook, expected.data.workbook);
    assert_eq!(actual.filter.anova_p_max, expected.filter.anova_p_max);
    assert_eq!(actual.filter.kruskal_p_max, expected.filter.kruskal_p_max);
    assert_eq!(actual.filter.eta_min, expected.filter.eta_min);
    assert_eq!(actual.ranking.per_category, expected.ranking.per_category);
    assert_eq!(actual.ranking.per_pair, expected.ranking.per_pair);
}

#[test]
fn config_roundtrip_default_toml() {
    let default_cfg = AppConfig::default();
    let text = toml::to_string_pretty(&default_cfg).expect("serialize default");
    let parsed: AppConfig = toml::from_str(&text).expect("parse default");
    assert_config_eq(&parsed, &default_cfg);
}

#[test]
fn config_load_custom_values() {
    let path = unique_path("custom.toml");
    let path_str = path.to_string_lossy().to_string();
    let custom = AppConfig {
        data: DataConfig {
            workbook: "results/batch2.xlsx".to_string(),
        },
        filter: FilterConfig {
            anova_p_max: 0.01,
            kruskal_p_max: 0.01,
            eta_min: 0.06,
        },
        ranking: RankingConfig {
            per_category: 10,
            per_pair: 25,
        },
    };
    let text = toml::to_string_pretty(&custom).expect("serialize custom");
    fs::write(&path, text).expect("write custom config");

    let loaded = AppConfig::load_or_default(&path_str);
    assert_config_eq(&loaded, &custom);

    let _ = fs::remove_file(&path);
}

#[test]
fn config_missing_file_fallback() {
    let path = unique_path("missing.toml");
    let path_str = path.to_string_lossy().to_string();
    let _ = fs::remove_file(&path);

    let loaded = AppConfig::load_or_default(&path_str);
    let defaults = AppConfig::default();
    assert!(path.exists(), "missing config should be created");
    assert_config_eq(&loaded, &defaults);

    let _ = fs::remove_file(&path);
}

#[test]
fn partial_config_fills_missing_sections_with_defaults() {
    let text = r#"
[filter]
eta_min = 0.2
"#;
    let parsed: AppConfig = toml::from_str(text).expect("parse partial config");
    assert_eq!(parsed.filter.eta_min, 0.2);
    assert_eq!(parsed.filter.anova_p_max, 0.05);
    assert_eq!(parsed.ranking.per_category, 15);
    assert_eq!(
        parsed.data.workbook,
        "group_anova_with_effect_0331_STR_v2.xlsx"
    );
}
