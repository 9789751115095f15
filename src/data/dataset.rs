//! data/dataset.rs — load-once dataset with filtering and ranking.
//!
//! The dataset is built once at startup and never mutated. Views borrow row
//! slices out of the pre-ranked set; nothing here touches the UI.

use std::cmp::Ordering;
use std::path::Path;

use tracing::debug;

use super::record::{Category, DemoTable, FeatureRecord, GroupPair};
use super::workbook;

/// Conjunctive significance thresholds. All three apply to every category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    pub anova_p_max: f64,
    pub kruskal_p_max: f64,
    pub eta_min: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            anova_p_max: 0.05,
            kruskal_p_max: 0.05,
            eta_min: 0.139,
        }
    }
}

impl Thresholds {
    /// True when the record passes all three cutoffs at once.
    #[inline]
    pub fn passes(&self, record: &FeatureRecord) -> bool {
        record.anova_p < self.anova_p_max
            && record.kruskal_p < self.kruskal_p_max
            && record.eta_squared >= self.eta_min
    }
}

/// Per-view truncation caps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TopCaps {
    pub per_category: usize,
    pub per_pair: usize,
}

impl Default for TopCaps {
    fn default() -> Self {
        Self {
            per_category: 15,
            per_pair: 20,
        }
    }
}

/// Keep the records passing every threshold, in source order.
pub fn filter_significant(records: &[FeatureRecord], thresholds: Thresholds) -> Vec<FeatureRecord> {
    records
        .iter()
        .filter(|r| thresholds.passes(r))
        .cloned()
        .collect()
}

// Effect size descending; equal effects fall back to the feature name so the
// ranking does not depend on source row order.
fn rank_order(a: &FeatureRecord, b: &FeatureRecord) -> Ordering {
    b.eta_squared
        .partial_cmp(&a.eta_squared)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.name.cmp(&b.name))
}

/// Sort by (category, effect size desc, name) and keep the first
/// `per_category` rows of each category.
pub fn rank_by_category(
    mut filtered: Vec<FeatureRecord>,
    per_category: usize,
) -> Vec<FeatureRecord> {
    filtered.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| rank_order(a, b)));

    let mut kept = Vec::with_capacity(filtered.len());
    let mut current: Option<Category> = None;
    let mut count = 0usize;
    for record in filtered {
        if current != Some(record.category) {
            current = Some(record.category);
            count = 0;
        }
        if count < per_category {
            count += 1;
            kept.push(record);
        }
    }
    kept
}

/// Rows for one pair view: drawn from the per-category ranked set, excluding
/// Demo+Clinical, flag set for `pair`, capped at `per_pair` rows per
/// category. The pooled result stays in global effect-size-descending order.
pub fn pair_rows<'a>(
    ranked: &'a [FeatureRecord],
    pair: GroupPair,
    per_pair: usize,
) -> Vec<&'a FeatureRecord> {
    let mut candidates: Vec<&FeatureRecord> = ranked
        .iter()
        .filter(|r| r.category != Category::DemoClinical && r.is_significant(pair))
        .collect();
    candidates.sort_by(|a, b| rank_order(a, b));

    let mut counts = [0usize; 7];
    candidates
        .into_iter()
        .filter(|r| {
            let count = &mut counts[r.category as usize];
            if *count < per_pair {
                *count += 1;
                true
            } else {
                false
            }
        })
        .collect()
}

/// Process-wide immutable dataset: full sheet, demographics, and the
/// filtered + ranked subset the category views show.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub features: Vec<FeatureRecord>,
    pub demo: DemoTable,
    pub thresholds: Thresholds,
    pub caps: TopCaps,
    /// Filtered and ranked, category-major.
    pub ranked: Vec<FeatureRecord>,
}

impl Dataset {
    pub fn load(path: &Path, thresholds: Thresholds, caps: TopCaps) -> workbook::Result<Self> {
        let (features, demo) = workbook::load(path)?;
        Ok(Self::from_parts(features, demo, thresholds, caps))
    }

    pub fn from_parts(
        features: Vec<FeatureRecord>,
        demo: DemoTable,
        thresholds: Thresholds,
        caps: TopCaps,
    ) -> Self {
        let filtered = filter_significant(&features, thresholds);
        let ranked = rank_by_category(filtered, caps.per_category);
        debug!(
            total = features.len(),
            ranked = ranked.len(),
            "dataset filtered and ranked"
        );
        Self {
            features,
            demo,
            thresholds,
            caps,
            ranked,
        }
    }

    /// Ranked rows of one category, at most `caps.per_category`.
    pub fn category_rows(&self, category: Category) -> Vec<&FeatureRecord> {
        self.ranked
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }

    /// Ranked rows for one pair view, at most `caps.per_pair` per category.
    pub fn pair_rows(&self, pair: GroupPair) -> Vec<&FeatureRecord> {
        pair_rows(&self.ranked, pair, self.caps.per_pair)
    }
}
