use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::data::dataset::{Thresholds, TopCaps};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "DataConfig::default_workbook")]
    pub workbook: String,
}

impl DataConfig {
    fn default_workbook() -> String {
        "group_anova_with_effect_0331_STR_v2.xlsx".to_string()
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            workbook: Self::default_workbook(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default = "FilterConfig::default_anova_p_max")]
    pub anova_p_max: f64,
    #[serde(default = "FilterConfig::default_kruskal_p_max")]
    pub kruskal_p_max: f64,
    #[serde(default = "FilterConfig::default_eta_min")]
    pub eta_min: f64,
}

impl FilterConfig {
    fn default_anova_p_max() -> f64 {
        0.05
    }
    fn default_kruskal_p_max() -> f64 {
        0.05
    }
    fn default_eta_min() -> f64 {
        0.139
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            anova_p_max: Self::default_anova_p_max(),
            kruskal_p_max: Self::default_kruskal_p_max(),
            eta_min: Self::default_eta_min(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    #[serde(default = "RankingConfig::default_per_category")]
    pub per_category: usize,
    #[serde(default = "RankingConfig::default_per_pair")]
    pub per_pair: usize,
}

impl RankingConfig {
    fn default_per_category() -> usize {
        15
    }
    fn default_per_pair() -> usize {
        20
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            per_category: Self::default_per_category(),
            per_pair: Self::default_per_pair(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
}

impl AppConfig {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            anova_p_max: self.filter.anova_p_max,
            kruskal_p_max: self.filter.kruskal_p_max,
            eta_min: self.filter.eta_min,
        }
    }

    pub fn caps(&self) -> TopCaps {
        TopCaps {
            per_category: self.ranking.per_category,
            per_pair: self.ranking.per_pair,
        }
    }

    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        eprintln!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    eprintln!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        // File does not exist: write commented defaults and return them.
        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                let mut commented = String::new();
                for line in text.lines() {
                    let trimmed = line.trim();
                    if trimmed.is_empty() || (trimmed.starts_with('[') && trimmed.ends_with(']')) {
                        commented.push_str(line);
                    } else {
                        commented.push_str("# ");
                        commented.push_str(line);
                    }
                    commented.push('\n');
                }
                if let Err(err) = fs::write(path_obj, commented) {
                    eprintln!("Failed to write default config to {path}: {err}");
                }
            }
            Err(err) => {
                eprintln!("Failed to serialize default config: {err}");
            }
        }
        default_cfg
    }
}
