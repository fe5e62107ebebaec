#![cfg(feature = "serde")]

use lineq_ga::{
    equation::EquationSpec,
    evolution::{GeneticSearch, LogLevel, RunConfig, RunResult},
    individual::GeneBounds,
    report::ConvergenceSeries,
};

#[test]
fn test_run_result_round_trips_through_json() {
    let config = RunConfig::builder()
        .population_size(20)
        .max_generations(10)
        .seed(5)
        .build()
        .unwrap();
    let result = GeneticSearch::new(EquationSpec::new(3, 5, 2, 14), config.clone())
        .unwrap()
        .run()
        .unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let restored: RunResult = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.best, result.best);
    assert_eq!(restored.history.len(), result.history.len());

    let config_json = serde_json::to_value(&config).unwrap();
    assert_eq!(config_json["population_size"], 20);
}

#[test]
fn test_convergence_series_serializes_points() {
    let config = RunConfig::builder()
        .population_size(10)
        .max_generations(3)
        .seed(9)
        .build()
        .unwrap();
    let result = GeneticSearch::new(EquationSpec::new(2, 4, 6, 7), config)
        .unwrap()
        .run()
        .unwrap();

    let series = ConvergenceSeries::from_history(&result.history);
    let value = serde_json::to_value(&series).unwrap();

    assert_eq!(value["points"].as_array().unwrap().len(), 3);
    assert_eq!(value["points"][0]["generation"], 0);
}

#[test]
fn test_config_round_trips_through_json() {
    let config = RunConfig::builder()
        .population_size(40)
        .range(-5, 5)
        .log_level(LogLevel::Minimal)
        .seed(3)
        .build()
        .unwrap();

    let json = serde_json::to_string(&config).unwrap();
    let restored: RunConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, config);
}

#[test]
fn test_deserialized_config_is_validated() {
    let valid = RunConfig::builder()
        .log_level(LogLevel::Minimal)
        .build()
        .unwrap();
    let json = serde_json::to_value(&valid).unwrap();

    let invalid = [
        ("bounds", serde_json::json!({ "lo": 10, "hi": -10 })),
        ("population_size", serde_json::json!(0)),
        ("log_interval", serde_json::json!(0)),
        ("mutation_rate", serde_json::json!(1.5)),
        ("elite_count", serde_json::json!(0)),
    ];

    for (field, value) in invalid {
        let mut broken = json.clone();
        broken[field] = value;

        let err = serde_json::from_value::<RunConfig>(broken).unwrap_err();
        assert!(err.to_string().contains("Configuration error"), "{}: {}", field, err);
    }
}

#[test]
fn test_deserialized_bounds_are_validated() {
    let bounds: GeneBounds = serde_json::from_str(r#"{"lo":-3,"hi":3}"#).unwrap();
    assert_eq!(bounds, GeneBounds::new(-3, 3).unwrap());

    assert!(serde_json::from_str::<GeneBounds>(r#"{"lo":3,"hi":3}"#).is_err());
    assert!(serde_json::from_str::<GeneBounds>(r#"{"lo":10,"hi":-10}"#).is_err());
}
