//! End-to-end tests: smooth a price series, compare a fast and a slow
//! average, and locate the crossings.

mod common;

use approx::assert_relative_eq;
use proptest::prelude::*;

use common::{
    assert_series_eq, generate_constant, generate_linear, generate_random_walk, generate_sine,
};
use stat4trading::prelude::*;

fn assert_alternating(directions: &[CrossDirection]) {
    let crosses: Vec<_> = directions.iter().filter(|d| d.is_cross()).collect();
    for pair in crosses.windows(2) {
        assert_ne!(pair[0], pair[1], "consecutive crossings must alternate");
    }
}

#[test]
fn test_sine_crossings_alternate() {
    let prices = generate_sine(100.0, 5.0, 40, 200);
    let slow = sma(&prices, 10, None).unwrap();
    let fast = sma(&prices, 3, None).unwrap();

    let signals = cross_signals(&slow, &fast).unwrap();
    assert_eq!(signals.len(), slow.len());

    let count = signals.iter().filter(|d| d.is_cross()).count();
    assert!(count >= 8, "expected a crossing every half period, got {count}");
    assert_alternating(&signals);
}

#[test]
fn test_uptrend_never_crosses() {
    let prices = generate_linear(100.0, 0.5, 80);
    let slow = sma(&prices, 20, None).unwrap();
    let fast = sma(&prices, 5, None).unwrap();

    assert!(cross_events(&slow, &fast).unwrap().is_empty());
    assert!(spread(&fast, &slow).unwrap().iter().all(|d| *d > 0.0));
}

#[test]
fn test_constant_series_is_flat_everywhere() {
    let prices = generate_constant(42.0, 30);

    assert_series_eq(&sma(&prices, 7, None).unwrap(), &generate_constant(42.0, 24), 1e-12, "sma");
    assert_series_eq(&wma(&prices, 7, None).unwrap(), &generate_constant(42.0, 24), 1e-12, "wma");
    assert_series_eq(
        &smooth_five_point(&prices, 3, false).unwrap(),
        &prices,
        1e-12,
        "five_point",
    );

    let slow = sma(&prices, 7, None).unwrap();
    let fast = wma(&prices, 3, None).unwrap();
    assert!(cross_events(&slow, &fast).unwrap().is_empty());
}

#[test]
fn test_pipeline_crossings_match_manual_chain() {
    let prices = generate_random_walk(100.0, 1.0, 200, 7);

    let slow = SmoothingPipeline::<f64>::new()
        .add(<Sma as Smoother<f64>>::new(SmaConfig::new(20)))
        .add(<FivePoint as Smoother<f64>>::new(FivePointConfig::new(1)));
    let fast = SmoothingPipeline::<f64>::new()
        .add(<Sma as Smoother<f64>>::new(SmaConfig::new(5)))
        .add(<FivePoint as Smoother<f64>>::new(FivePointConfig::new(1)));

    let slow_manual = smooth_five_point(&sma(&prices, 20, None).unwrap(), 1, false).unwrap();
    let fast_manual = smooth_five_point(&sma(&prices, 5, None).unwrap(), 1, false).unwrap();

    assert_series_eq(&slow.run(&prices).unwrap(), &slow_manual, 1e-12, "slow");
    assert_series_eq(&fast.run(&prices).unwrap(), &fast_manual, 1e-12, "fast");

    let from_pipelines = pipeline_crossings(&prices, &slow, &fast).unwrap();
    let from_manual = cross_signals(&slow_manual, &fast_manual).unwrap();
    assert_eq!(from_pipelines, from_manual);
    assert_eq!(from_pipelines.len(), slow.expected_output_len(prices.len()));
}

#[test]
fn test_every_crossing_has_an_intersection_point() {
    let prices = generate_random_walk(100.0, 1.0, 200, 7);
    let slow = sma(&prices, 20, None).unwrap();
    let fast = sma(&prices, 5, None).unwrap();
    let (slow, fast) = align_tails(&slow, &fast);

    let events = cross_events(slow, fast).unwrap();
    assert!(!events.is_empty());
    assert_alternating(&events.iter().map(|e| e.direction).collect::<Vec<_>>());

    for event in events {
        let i = event.index;
        let (x0, x1) = ((i - 1) as f64, i as f64);
        let slow_seg = Segment::from_coords(x0, slow[i - 1], x1, slow[i]);
        let fast_seg = Segment::from_coords(x0, fast[i - 1], x1, fast[i]);

        let point = segment_intersection(&slow_seg, &fast_seg)
            .unwrap()
            .unwrap_or_else(|| panic!("crossing at {i} has no intersection"));

        assert!(point.x >= x0 && point.x <= x1, "x = {} outside [{x0}, {x1}]", point.x);
        assert_relative_eq!(
            point.y,
            fast_seg.line().unwrap().y_at(point.x),
            max_relative = 1e-9
        );

        let lo = find_min(&[slow[i - 1], slow[i]]).unwrap().value;
        let hi = find_max(&[slow[i - 1], slow[i]]).unwrap().value;
        assert!(point.y >= lo - 1e-9 && point.y <= hi + 1e-9);
    }
}

#[test]
fn test_short_history_surfaces_stage_error() {
    let prices = generate_linear(10.0, 1.0, 6);
    let slow = SmoothingPipeline::<f64>::new().add(<Sma as Smoother<f64>>::new(SmaConfig::new(10)));
    let fast = SmoothingPipeline::<f64>::new().add(<Sma as Smoother<f64>>::new(SmaConfig::new(3)));

    let err = pipeline_crossings(&prices, &slow, &fast).unwrap_err();
    assert_eq!(
        err.stat_error(),
        Some(&StatError::InsufficientData {
            window: 10,
            actual: 6
        })
    );
}

proptest! {
    #[test]
    fn prop_random_walk_crossings_alternate(
        seed in any::<u64>(),
        slow_window in 6usize..25,
        fast_window in 2usize..6,
    ) {
        let prices = generate_random_walk(100.0, 1.0, 150, seed);
        let slow = sma(&prices, slow_window, None).unwrap();
        let fast = sma(&prices, fast_window, None).unwrap();

        let signals = cross_signals(&slow, &fast).unwrap();
        prop_assert_eq!(signals.len(), slow.len());
        prop_assert_eq!(signals[0], CrossDirection::None);

        let crosses: Vec<_> = signals.iter().filter(|d| d.is_cross()).collect();
        for pair in crosses.windows(2) {
            prop_assert_ne!(pair[0], pair[1]);
        }
    }
}
