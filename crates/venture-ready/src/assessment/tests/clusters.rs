use crate::assessment::clusters::{band_for, CLUSTER_BANDS};

#[test]
fn bands_cover_the_full_range_exactly_once() {
    for score in 0..=999u16 {
        let matches = CLUSTER_BANDS
            .iter()
            .filter(|band| score >= band.floor && score <= band.ceiling)
            .count();
        assert_eq!(matches, 1, "score {score} must map to exactly one band");
    }
}

#[test]
fn bands_are_contiguous_and_ordered() {
    assert_eq!(CLUSTER_BANDS[0].floor, 0);
    assert_eq!(CLUSTER_BANDS[4].ceiling, 999);
    for pair in CLUSTER_BANDS.windows(2) {
        assert_eq!(pair[0].ceiling + 1, pair[1].floor);
    }
}

#[test]
fn boundary_scores_map_to_the_documented_bands() {
    let expectations = [
        (349, "Foundation Builders"),
        (350, "Development Stage"),
        (499, "Development Stage"),
        (500, "Growth Candidates"),
        (649, "Growth Candidates"),
        (650, "Scaling Accelerators"),
        (799, "Scaling Accelerators"),
        (800, "Investment Ready Leaders"),
        (999, "Investment Ready Leaders"),
    ];

    for (score, expected) in expectations {
        assert_eq!(band_for(score).name, expected, "score {score}");
    }
}

#[test]
fn band_metadata_is_complete() {
    for band in &CLUSTER_BANDS {
        assert!(!band.description.is_empty());
        assert!(!band.typical_stage.is_empty());
        assert!(!band.success_rate.is_empty());
        assert!(!band.example_sectors.is_empty());
        assert!(band.percentile <= 100);
    }
}
