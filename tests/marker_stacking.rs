use gaitscope::data::record::{Category, FeatureRecord, Group, GroupPair, GroupStat};
use gaitscope::ui::plots::{span, MarkerLayout};

fn record(means: [f64; 4], stds: [f64; 4], pairs: &[GroupPair]) -> FeatureRecord {
    let mut stats = [GroupStat::default(); 4];
    for i in 0..4 {
        stats[i] = GroupStat {
            mean: means[i],
            std: stds[i],
        };
    }
    let mut significant = [false; 6];
    for pair in pairs {
        significant[pair.index()] = true;
    }
    FeatureRecord {
        name: "cadence".to_string(),
        category: Category::SpatioTemporal,
        anova_p: 0.001,
        kruskal_p: 0.001,
        eta_squared: 0.4,
        stats,
        significant,
    }
}

#[test]
fn five_flags_stack_five_markers_above_the_bars() {
    let all_but_hc_rbd = [
        GroupPair::HcMildPd,
        GroupPair::HcModPd,
        GroupPair::MildPdRbd,
        GroupPair::ModPdRbd,
        GroupPair::MildPdModPd,
    ];
    let r = record([10.0, 12.0, 15.0, 20.0], [1.0; 4], &all_but_hc_rbd);

    let pairs = r.significant_pairs();
    assert_eq!(pairs.len(), 5);
    assert!(!pairs.contains(&GroupPair::HcRbd));

    let (y_min, y_max) = span(&r, &Group::ALL);
    assert_eq!((y_min, y_max), (9.0, 21.0));

    let layout = MarkerLayout::from_span(y_min, y_max, pairs.len());
    let range = y_max - y_min;

    // first marker 5% above the span, then 3% per marker, all above the bars
    for (i, _) in pairs.iter().enumerate() {
        let y = layout.line_y(i);
        let expected = y_max + range * 0.05 + i as f64 * range * 0.03;
        assert!((y - expected).abs() < 1e-9);
        assert!(y > y_max);
    }

    // axis keeps 5% of the span per marker above the base line
    assert!(layout.axis_bound() >= y_max + 5.0 * (0.05 * range) - 1e-9);
}

#[test]
fn negative_span_stacks_markers_below_the_bars() {
    let r = record(
        [-4.0, -5.0, -6.0, -7.0],
        [1.0; 4],
        &[GroupPair::HcRbd, GroupPair::HcModPd],
    );
    let (y_min, y_max) = span(&r, &Group::ALL);
    assert_eq!((y_min, y_max), (-8.0, -3.0));

    let layout = MarkerLayout::from_span(y_min, y_max, 2);
    assert!(layout.line_y(0) < y_min);
    assert!(layout.line_y(1) < layout.line_y(0));
    assert!(layout.axis_bound() <= layout.line_y(1));
}

#[test]
fn no_flags_means_no_axis_expansion() {
    let r = record([1.0, 2.0, 3.0, 4.0], [0.5; 4], &[]);
    let (y_min, y_max) = span(&r, &Group::ALL);
    let layout = MarkerLayout::from_span(y_min, y_max, 0);
    assert_eq!(layout.axis_bound(), layout.base);
}
