use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use u_delivery::aco::{AcoConfig, CancellationToken};
use u_delivery::constructive::nearest_neighbor_path;
use u_delivery::distance::DistanceMatrix;
use u_delivery::models::{GeoPoint, Route, Stop};
use u_delivery::{RouteOptimizer, RoutingError};

fn p(lat: f64, lon: f64) -> GeoPoint {
    GeoPoint::new(lat, lon).unwrap()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Start at a corner of a one-degree square; stops on the other corners and
/// in the middle.
fn square() -> (GeoPoint, Vec<Stop<&'static str>>) {
    (
        p(0.0, 0.0),
        vec![
            Stop::new(p(0.0, 1.0), "north-east"),
            Stop::new(p(1.0, 1.0), "far"),
            Stop::new(p(1.0, 0.0), "north-west"),
            Stop::new(p(0.5, 0.5), "center"),
        ],
    )
}

/// Twelve stops scattered around a city center.
fn city() -> (GeoPoint, Vec<Stop<usize>>) {
    let start = p(37.5665, 126.9780);
    let stops = (0..12)
        .map(|k| {
            let angle = k as f64 * 2.399;
            let radius = 0.02 + 0.01 * (k % 5) as f64;
            Stop::new(
                p(37.5665 + radius * angle.sin(), 126.9780 + radius * angle.cos()),
                k,
            )
        })
        .collect();
    (start, stops)
}

fn random_order_mean(distances: &DistanceMatrix, n: usize, samples: usize, seed: u64) -> f64 {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut order: Vec<usize> = (1..=n).collect();
    let mut total = 0.0;
    for _ in 0..samples {
        order.shuffle(&mut rng);
        total += distances.path_distance(&order);
    }
    total / samples as f64
}

#[test]
fn square_beats_random_orderings() {
    init_tracing();
    let (start, stops) = square();
    let optimizer = RouteOptimizer::default();
    let baseline = random_order_mean(&DistanceMatrix::from_stops(&start, &stops), 4, 50, 99);

    let mut at_most_baseline = 0;
    for seed in 0..20 {
        let outcome = optimizer
            .optimize_with_rng(&stops, start, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        assert!(outcome.route.is_permutation());
        if outcome.distance_km <= baseline {
            at_most_baseline += 1;
        }
    }
    assert_eq!(at_most_baseline, 20);
}

#[test]
fn square_converges_to_non_crossing_order() {
    let (start, stops) = square();
    let optimizer = RouteOptimizer::default();
    let distances = DistanceMatrix::from_stops(&start, &stops);

    // Shortest open path over all 24 orders.
    let mut best = f64::INFINITY;
    let mut perm = vec![1, 2, 3, 4];
    permute(&mut perm, 0, &mut |order| {
        best = best.min(distances.path_distance(order));
    });

    let optimal_runs = (0..20)
        .filter(|&seed| {
            let outcome = optimizer
                .optimize_with_rng(&stops, start, &mut StdRng::seed_from_u64(seed))
                .unwrap();
            (outcome.distance_km - best).abs() < 1e-9
        })
        .count();
    assert!(optimal_runs > 10, "only {optimal_runs}/20 runs optimal");
}

fn permute(items: &mut Vec<usize>, k: usize, visit: &mut impl FnMut(&[usize])) {
    if k == items.len() {
        visit(items.as_slice());
        return;
    }
    for i in k..items.len() {
        items.swap(k, i);
        permute(items, k + 1, visit);
        items.swap(k, i);
    }
}

#[test]
fn more_iterations_no_worse_on_average() {
    let (start, stops) = city();
    let short = RouteOptimizer::default()
        .with_aco_config(AcoConfig::default().with_num_iterations(2));
    let long = RouteOptimizer::default()
        .with_aco_config(AcoConfig::default().with_num_iterations(200));

    let runs = 10;
    let mean = |optimizer: &RouteOptimizer, seed_base: u64| {
        (0..runs)
            .map(|k| {
                optimizer
                    .optimize_with_rng(&stops, start, &mut StdRng::seed_from_u64(seed_base + k))
                    .unwrap()
                    .distance_km
            })
            .sum::<f64>()
            / runs as f64
    };

    let short_mean = mean(&short, 1000);
    let long_mean = mean(&long, 2000);
    assert!(
        long_mean <= short_mean + 1e-9,
        "200 iterations averaged {long_mean}, 2 iterations averaged {short_mean}"
    );
}

#[test]
fn colony_competitive_with_nearest_neighbor() {
    let (start, stops) = city();
    let distances = DistanceMatrix::from_stops(&start, &stops);
    let nn = distances.path_distance(&nearest_neighbor_path(&distances));
    let optimizer = RouteOptimizer::default()
        .with_aco_config(AcoConfig::default().with_num_iterations(100).with_two_opt(true));
    let outcome = optimizer
        .optimize_with_rng(&stops, start, &mut StdRng::seed_from_u64(8))
        .unwrap();
    assert!(outcome.distance_km <= nn * 1.10, "aco {} vs nn {nn}", outcome.distance_km);
}

#[test]
fn fallback_skips_colony() {
    let optimizer = RouteOptimizer::default();
    let start = p(10.0, 10.0);

    for n in 0..=2 {
        let stops: Vec<Stop<usize>> = (0..n)
            .map(|k| Stop::new(p(10.0 + k as f64, 10.0), k))
            .collect();
        let outcome = optimizer
            .optimize_with_rng(&stops, start, &mut StdRng::seed_from_u64(0))
            .unwrap();
        assert_eq!(outcome.iterations_run, 0);
        assert_eq!(outcome.route, Route::new((0..n).collect()));
    }
}

#[test]
fn invalid_coordinates_rejected_before_work() {
    let optimizer = RouteOptimizer::default();
    let start = p(0.0, 0.0);

    let bad_lat = vec![Stop::at(GeoPoint::new_unchecked(95.0, 0.0))];
    assert!(matches!(
        optimizer.optimize(&bad_lat, start),
        Err(RoutingError::InvalidInput(_))
    ));

    let bad_lon = vec![
        Stop::at(p(0.0, 1.0)),
        Stop::at(p(0.0, 2.0)),
        Stop::at(GeoPoint::new_unchecked(0.0, -200.0)),
    ];
    assert!(matches!(
        optimizer.optimize(&bad_lon, start),
        Err(RoutingError::InvalidInput(_))
    ));

    assert!(GeoPoint::new(95.0, 0.0).is_err());
    assert!(GeoPoint::new(0.0, -200.0).is_err());
}

#[test]
fn zero_iterations_is_an_error() {
    let (start, stops) = square();
    let optimizer = RouteOptimizer::default()
        .with_aco_config(AcoConfig::default().with_num_iterations(0));
    assert!(matches!(
        optimizer.optimize(&stops, start),
        Err(RoutingError::InvalidInput(_))
    ));
}

#[test]
fn deadline_returns_best_so_far() {
    let (start, stops) = city();
    let optimizer = RouteOptimizer::default()
        .with_aco_config(AcoConfig::default().with_num_iterations(1_000_000));
    let token = CancellationToken::with_deadline(std::time::Duration::from_millis(50));
    let outcome = optimizer
        .optimize_until(&stops, start, &mut StdRng::seed_from_u64(5), &token)
        .unwrap();
    assert!(outcome.cancelled);
    assert!(outcome.iterations_run >= 1);
    assert!(outcome.iterations_run < 1_000_000);
    assert!(outcome.route.is_permutation());
    assert_eq!(outcome.route.len(), stops.len());
}

#[test]
fn concurrent_calls_share_one_optimizer() {
    let (start, stops) = city();
    let optimizer = RouteOptimizer::default();

    let routes: Vec<Route> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| optimizer.optimize(&stops, start).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for route in routes {
        assert_eq!(route.len(), stops.len());
        assert!(route.is_permutation());
    }
}

#[test]
fn plan_estimate_matches_route() {
    let (start, stops) = square();
    let optimizer = RouteOptimizer::default();
    let plan = optimizer.plan(&stops, start).unwrap();
    let distances = DistanceMatrix::from_stops(&start, &stops);
    let expected = distances.path_distance(&plan.route.matrix_indices());
    assert_eq!(plan.estimate.distance_km, expected);
    assert_eq!(plan.estimate.service_minutes, 60);
    assert_eq!(
        plan.estimate.travel_minutes,
        (expected / 30.0 * 60.0).round() as u32
    );
}
