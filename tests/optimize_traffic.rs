//! End-to-end checks on the public API.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use u_signal::ga::{Evolver, TimingProblem, initialize_population};
use u_signal::models::CongestionModel;
use u_signal::{OptimizeError, OptimizerConfig, SignalOptimizer};

#[test]
fn reference_configuration_produces_valid_plan() {
    let config = OptimizerConfig::default().with_seed(2024);
    let plan = SignalOptimizer::new(config.clone())
        .optimize(&[5.0, 5.0, 5.0, 5.0])
        .unwrap();

    let ids: Vec<&str> = plan.phases().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["L1", "L2", "L3", "L4"]);
    for (_, timing) in plan.phases() {
        assert!((10..=45).contains(&timing.green));
    }
    assert!(plan.total_green() <= 120);
}

#[test]
fn plan_serializes_to_phase_object() {
    let plan = SignalOptimizer::new(OptimizerConfig::default().with_seed(1))
        .optimize(&[8.0, 3.0, 15.0, 6.0])
        .unwrap();
    let value: serde_json::Value = serde_json::to_value(&plan).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 4);
    for id in ["L1", "L2", "L3", "L4"] {
        assert!(obj[id]["green"].is_i64());
    }
}

#[test]
fn infeasible_budget_is_rejected_before_sampling() {
    let config = OptimizerConfig::default().with_green_bounds(50, 60);
    let err = SignalOptimizer::new(config)
        .optimize(&[5.0, 5.0, 5.0, 5.0])
        .unwrap_err();
    assert_eq!(
        err,
        OptimizeError::InfeasibleConfiguration {
            green_min: 50,
            num_phases: 4,
            cycle_time: 120
        }
    );
}

#[test]
fn count_vector_must_match_phase_count() {
    let optimizer = SignalOptimizer::new(OptimizerConfig::default().with_seed(3));
    assert!(matches!(
        optimizer.optimize(&[1.0, 2.0, 3.0, 4.0, 5.0]),
        Err(OptimizeError::MalformedInput { expected: 4, actual: 5 })
    ));
}

#[test]
fn evolution_never_regresses() {
    let config = OptimizerConfig::default();
    let congestion = CongestionModel::uniform(&[1.0, 19.0, 7.0, 12.0], config.capacity);
    let problem = TimingProblem::new(&config, congestion);
    let mut rng = SmallRng::seed_from_u64(77);

    let initial = initialize_population(&problem, config.pop_size, config.max_init_attempts, &mut rng).unwrap();
    let report = Evolver::new(&problem, config.pop_size, config.max_iter)
        .run(initial, &mut rng)
        .unwrap();

    assert_eq!(report.population.len(), config.pop_size);
    assert!(report.best_history.windows(2).all(|w| w[1] <= w[0]));
    for m in report.population.members() {
        assert!(m.candidate().fits_cycle(config.cycle_time));
        assert!(m.candidate().within_bounds(config.green_min, config.green_max));
    }
}
