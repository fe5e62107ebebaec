use lineq_ga::{
    breeding::MutationPolicy,
    equation::EquationSpec,
    evolution::{GeneticSearch, LogLevel, RunConfig, Termination},
    report::Summary,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn test_finds_exact_solution() {
    init_tracing();
    let equation = EquationSpec::new(3, 5, 2, 14);
    let config = RunConfig::builder()
        .population_size(100)
        .crossover_rate(0.8)
        .mutation_rate(0.1)
        .max_generations(500)
        .range(-100, 100)
        .seed(42)
        .build()
        .unwrap();

    let result = GeneticSearch::new(equation, config).unwrap().run().unwrap();

    assert!(result.is_exact());
    assert_eq!(result.best_fitness, 0);
    assert_eq!(result.termination, Termination::Converged);
    assert!(equation.verify(&result.best));

    let (x, y, z) = (result.best.x(), result.best.y(), result.best.z());
    assert_eq!(3 * x + 5 * y + 2 * z, 14);
    assert!(result.generations <= 500);
}

#[test]
fn test_same_seed_is_reproducible() {
    let equation = EquationSpec::new(7, 4, 3, 25);
    let config = RunConfig::builder()
        .population_size(60)
        .max_generations(200)
        .seed(2024)
        .build()
        .unwrap();

    let first = GeneticSearch::new(equation, config.clone())
        .unwrap()
        .run()
        .unwrap();
    let second = GeneticSearch::new(equation, config).unwrap().run().unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_single_individual_single_generation() {
    // 2x + 4y + 6z is always even, so it can never equal 7
    let equation = EquationSpec::new(2, 4, 6, 7);
    let config = RunConfig::builder()
        .population_size(1)
        .max_generations(1)
        .seed(3)
        .build()
        .unwrap();

    let result = GeneticSearch::new(equation, config).unwrap().run().unwrap();

    assert_eq!(result.termination, Termination::MaxGenerationsReached);
    assert_eq!(result.generations, 1);
    assert_eq!(result.history.len(), 1);
    assert_eq!(result.best, result.history[0].best_individual);
    assert_eq!(result.best_fitness, result.history[0].best_fitness);
    assert_eq!(result.history[0].mean_fitness, result.best_fitness as f64);
}

#[test]
fn test_single_generation_stops_regardless_of_fitness() {
    let equation = EquationSpec::new(1, 1, 1, 1_000_000);
    let config = RunConfig::builder()
        .population_size(1)
        .max_generations(1)
        .build()
        .unwrap();

    let result = GeneticSearch::new(equation, config).unwrap().run().unwrap();

    assert_eq!(result.termination, Termination::MaxGenerationsReached);
    assert_eq!(result.generations, 1);
    assert!(result.best_fitness > 0);
}

#[test]
fn test_demo_equations() {
    init_tracing();
    let demos = [
        (EquationSpec::new(3, 5, 2, 14), 150, 0.8, 0.1, 500),
        (EquationSpec::new(2, 3, 1, 10), 100, 0.9, 0.05, 300),
        (EquationSpec::new(7, 4, 3, 25), 200, 0.85, 0.15, 600),
    ];

    for (seed, (equation, population, crossover, mutation, generations)) in
        demos.into_iter().enumerate()
    {
        let config = RunConfig::builder()
            .population_size(population)
            .crossover_rate(crossover)
            .mutation_rate(mutation)
            .max_generations(generations)
            .log_level(LogLevel::Minimal)
            .seed(seed as u64)
            .build()
            .unwrap();

        let result = GeneticSearch::new(equation, config).unwrap().run().unwrap();
        let summary = Summary::new(&equation, &result).to_string();

        assert!(result.is_exact(), "no exact solution for {}", equation);
        assert!(summary.contains("exact solution found"));
    }
}

#[test]
fn test_perturbation_mutation_finds_solution() {
    init_tracing();
    let equation = EquationSpec::new(3, 5, 2, 14);
    let config = RunConfig::builder()
        .population_size(150)
        .max_generations(500)
        .mutation_policy(MutationPolicy::Perturb {
            max_step: MutationPolicy::CLASSIC_STEP,
        })
        .elite_count(2)
        .log_level(LogLevel::Verbose)
        .seed(11)
        .build()
        .unwrap();

    let result = GeneticSearch::new(equation, config).unwrap().run().unwrap();

    assert!(result.is_exact());
    assert!(equation.verify(&result.best));
}
