//! End-to-end runs of the finder on small synthetic candidate tables.

use std::collections::HashSet;
use u_geoselect::geo::{median, pairwise_distances, GeoPoint};
use u_geoselect::locations::{CandidateSet, FinderConfig, Location, OptimalLocationsFinder};
use u_geoselect::Error;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("u_geoselect=debug"))
        .with_test_writer()
        .try_init();
}

/// Ten stations 1° apart along a line of latitude (~111 km between neighbours).
fn latitude_line() -> CandidateSet {
    CandidateSet::from_rows((0..10).map(|i| (45.0, i as f64, format!("station-{i}")))).unwrap()
}

fn median_spread(rows: &[Location]) -> f64 {
    let points: Vec<GeoPoint> = rows.iter().map(Location::point).collect();
    median(&pairwise_distances(&points)).unwrap()
}

#[test]
fn search_beats_contiguous_baseline() {
    init_tracing();
    let candidates = latitude_line();
    let baseline = candidates.select(&[0, 1, 2]).unwrap();

    for seed in [1, 42, 169] {
        let config = FinderConfig::default()
            .with_population_size(500)
            .with_generations(15)
            .with_seed(seed);
        let picked = OptimalLocationsFinder::new(&candidates, 3)
            .with_config(config)
            .find()
            .unwrap();

        assert_eq!(picked.len(), 3);
        assert!(
            median_spread(&picked) > median_spread(&baseline),
            "seed {seed}: {:?} no better than the baseline",
            picked.iter().map(|l| l.index).collect::<Vec<_>>()
        );
    }
}

#[test]
fn search_reaches_line_endpoints() {
    // On a line the best triple always contains both ends.
    let candidates = latitude_line();
    let picked = OptimalLocationsFinder::new(&candidates, 3)
        .with_config(FinderConfig::default().with_seed(7))
        .find()
        .unwrap();
    let indices: HashSet<usize> = picked.iter().map(|l| l.index).collect();
    assert!(indices.contains(&0) && indices.contains(&9), "got {indices:?}");
}

#[test]
fn larger_subsets_spread_over_area() {
    // 6x6 grid, 2° spacing; five picks should cover most of the square.
    let candidates = CandidateSet::from_rows(
        (0..36).map(|i| ((i / 6) as f64 * 2.0, (i % 6) as f64 * 2.0, format!("g{i}"))),
    )
    .unwrap();
    let outcome = OptimalLocationsFinder::new(&candidates, 5)
        .with_config(FinderConfig::default().with_seed(3))
        .find_with_report()
        .unwrap();

    assert_eq!(outcome.locations.len(), 5);
    let distinct: HashSet<usize> = outcome.indices.iter().copied().collect();
    assert_eq!(distinct.len(), 5);

    let clustered = u_geoselect::locations::DispersionFitness::new(&candidates)
        .evaluate(&[0, 1, 6, 7, 2]);
    assert!(outcome.fitness.unwrap() > clustered);
}

#[test]
fn seeded_runs_are_reproducible() {
    let candidates = CandidateSet::from_rows(
        (0..40).map(|i| (((i * 37) % 90) as f64 - 45.0, ((i * 71) % 360) as f64 - 180.0, format!("c{i}"))),
    )
    .unwrap();
    let config = FinderConfig::quick().with_seed(2024);

    let a = OptimalLocationsFinder::new(&candidates, 6)
        .with_config(config.clone())
        .find_with_report()
        .unwrap();
    let b = OptimalLocationsFinder::new(&candidates, 6)
        .with_config(config.with_parallel(false))
        .find_with_report()
        .unwrap();

    assert_eq!(a.indices, b.indices);
    assert_eq!(a.locations, b.locations);
    assert_eq!(a.history, b.history);
}

#[test]
fn small_table_returned_unchanged() {
    let candidates = CandidateSet::from_rows(vec![
        (52.52, 13.40, "Berlin"),
        (48.86, 2.35, "Paris"),
    ])
    .unwrap();
    let picked = OptimalLocationsFinder::new(&candidates, 5).find().unwrap();
    assert_eq!(picked, candidates.as_slice().to_vec());
}

#[test]
fn invalid_arguments_are_rejected() {
    let empty = CandidateSet::from_rows(Vec::<(f64, f64, &str)>::new()).unwrap();
    assert_eq!(
        OptimalLocationsFinder::new(&empty, 2).find(),
        Err(Error::EmptyCandidates)
    );

    let candidates = latitude_line();
    let err = OptimalLocationsFinder::new(&candidates, 0).find().unwrap_err();
    assert_eq!(err.to_string(), "invalid subset size: k=0, must be at least 1");
}
