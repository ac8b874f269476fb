use durand_kerner::{
    solver::{self, Config, StrategyKind},
    util::testing::check_roots,
    Error, Poly,
};
use num::complex::Complex64;

const STRATEGIES: [StrategyKind; 3] = [
    StrategyKind::Sequential,
    StrategyKind::DataParallel,
    StrategyKind::ThreadPartitioned,
];

fn init_logger() {
    let _ = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init();
}

fn config(strategy: StrategyKind) -> Config {
    Config {
        strategy,
        max_parallelism: 4,
        ..Config::default()
    }
}

#[test]
fn golden_ratio_quadratic_all_strategies() {
    init_logger();
    let poly = Poly::new(&[-1.0, 1.0, 1.0]).unwrap();
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let expected = [Complex64::new(phi, 0.0), Complex64::new(1.0 - phi, 0.0)];
    for strategy in STRATEGIES {
        let roots = solver::solve(&poly, &config(strategy)).unwrap();
        assert!(
            check_roots(&roots, &expected, 1e-6),
            "{strategy:?}: {roots:?}"
        );
    }
}

#[test]
fn strategies_agree_on_the_same_input() {
    let poly = Poly::new(&[2.0, -3.0, 4.0, 1.0]).unwrap();
    let mut cfg = config(StrategyKind::Sequential);
    cfg.max_iterations = 100;
    let baseline = solver::solve(&poly, &cfg).unwrap();
    for strategy in [StrategyKind::DataParallel, StrategyKind::ThreadPartitioned] {
        let mut cfg = config(strategy);
        cfg.max_iterations = 100;
        let roots = solver::solve(&poly, &cfg).unwrap();
        assert!(check_roots(&roots, &baseline, 1e-8), "{strategy:?}");
    }
}

#[test]
fn rerunning_from_a_converged_vector_stops_immediately() {
    let poly = Poly::new(&[-1.0, 1.0, 1.0]).unwrap();
    let cfg = config(StrategyKind::Sequential);
    let roots = solver::solve(&poly, &cfg).unwrap();

    // undo the presentation sign flip to recover the iteration's fixed point
    let fixed_point: Vec<_> = roots
        .iter()
        .map(|z| Complex64::new(-z.re, z.im))
        .collect();

    let mut tight = cfg.clone();
    tight.max_iterations = 1;
    let again = solver::solve_from(&poly, &fixed_point, &tight).unwrap();
    assert!(check_roots(&again, &roots, 1e-8));
}

#[test]
fn degree_one_is_closed_form() {
    let poly = Poly::new(&[6.0, -2.0]).unwrap();
    for strategy in STRATEGIES {
        let roots = solver::solve(&poly, &config(strategy)).unwrap();
        assert_eq!(roots, vec![Complex64::new(3.0, 0.0)]);
    }
}

#[test]
fn coincident_estimates_surface_as_a_fault() {
    let poly = Poly::new(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    let guesses = vec![Complex64::new(0.5, 0.5); poly.degree()];
    for strategy in STRATEGIES {
        let result = solver::solve_from(&poly, &guesses, &config(strategy));
        assert!(
            matches!(result, Err(Error::CoincidentRoots { .. })),
            "{strategy:?}: {result:?}"
        );
    }
}

#[test]
fn exhausted_budget_reports_attempted_iterations() {
    let poly = Poly::new(&[-1.0, 1.0, 1.0]).unwrap();
    for strategy in STRATEGIES {
        let mut cfg = config(strategy);
        cfg.max_iterations = 0;
        assert!(matches!(
            solver::solve(&poly, &cfg),
            Err(Error::NoConverge { iterations: 0 })
        ));
        cfg.max_iterations = 2;
        assert!(matches!(
            solver::solve(&poly, &cfg),
            Err(Error::NoConverge { iterations: 2 })
        ));
    }
}

/// Seeded sweep over random monic polynomials; every strategy must agree
/// with the sequential baseline whenever the baseline converges.
#[test]
fn random_monic_polynomials_cross_check() {
    init_logger();
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    let mut converged = 0;
    for _ in 0..16 {
        let degree = rng.usize(2..=4);
        let mut coeffs: Vec<f64> = (0..degree).map(|_| rng.f64() * 2.0 - 1.0).collect();
        // monic: the correction term omits the leading coefficient
        coeffs.push(1.0);
        let poly = Poly::new(&coeffs).unwrap();

        let mut cfg = config(StrategyKind::Sequential);
        cfg.max_iterations = 500;
        let Ok(baseline) = solver::solve(&poly, &cfg) else {
            continue;
        };
        converged += 1;

        for strategy in [StrategyKind::DataParallel, StrategyKind::ThreadPartitioned] {
            let mut cfg = config(strategy);
            cfg.max_iterations = 500;
            let roots = solver::solve(&poly, &cfg).unwrap();
            assert!(
                check_roots(&roots, &baseline, 1e-6),
                "{strategy:?}: {coeffs:?}"
            );
        }
    }
    assert!(converged >= 8, "only {converged} of 16 cases converged");
}
