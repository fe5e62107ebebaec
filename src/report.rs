//! # Reporting
//!
//! Read-only views over a finished run for presentation layers.
//!
//! [`Summary`] renders a human-readable description of a run: the equation,
//! the best solution and whether it is exact. [`ConvergenceSeries`] turns the
//! generation history into `(generation, best, mean)` points for plotting and
//! can export them as CSV.
//!
//! ## Example
//!
//! ```rust
//! use lineq_ga::equation::EquationSpec;
//! use lineq_ga::evolution::{GeneticSearch, RunConfig};
//! use lineq_ga::report::{ConvergenceSeries, Summary};
//!
//! let equation = EquationSpec::new(3, 5, 2, 14);
//! let config = RunConfig::builder().seed(1).max_generations(50).build().unwrap();
//! let result = GeneticSearch::new(equation, config).unwrap().run().unwrap();
//!
//! println!("{}", Summary::new(&equation, &result));
//!
//! let series = ConvergenceSeries::from_history(&result.history);
//! assert_eq!(series.len(), result.generations);
//! assert!(series.to_csv().starts_with("generation,best_fitness,mean_fitness\n"));
//! ```

use std::fmt;

use crate::{
    equation::EquationSpec,
    evolution::{Fitness, GenerationStats, RunResult, Termination},
};

/// Human-readable report of a finished run.
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    equation: &'a EquationSpec,
    result: &'a RunResult,
}

impl<'a> Summary<'a> {
    pub fn new(equation: &'a EquationSpec, result: &'a RunResult) -> Self {
        Self { equation, result }
    }

    /// Left-hand side value of the equation at the best solution.
    pub fn achieved_value(&self) -> i128 {
        self.equation.left_hand_side(&self.result.best)
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let best = &self.result.best;
        let (_, _, _, target) = self.equation.coefficients();

        writeln!(f, "Equation: {}", self.equation)?;
        writeln!(f, "Best solution: {}", best)?;
        writeln!(
            f,
            "Achieved value: {} (target {})",
            self.achieved_value(),
            target
        )?;
        writeln!(f, "Fitness (error): {}", self.result.best_fitness)?;
        writeln!(f, "Generations: {}", self.result.generations)?;

        let verdict = match self.result.termination {
            Termination::Converged => "exact solution found",
            Termination::MaxGenerationsReached if self.result.is_exact() => "exact solution found",
            Termination::MaxGenerationsReached => "approximate solution only",
        };
        write!(f, "Status: {}", verdict)
    }
}

/// One point of a convergence curve.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergencePoint {
    pub generation: usize,
    pub best_fitness: Fitness,
    pub mean_fitness: f64,
}

/// Ordered convergence curve of a run, generation 0 first.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvergenceSeries {
    points: Vec<ConvergencePoint>,
}

impl ConvergenceSeries {
    pub fn from_history(history: &[GenerationStats]) -> Self {
        Self {
            points: history
                .iter()
                .map(|stats| ConvergencePoint {
                    generation: stats.generation,
                    best_fitness: stats.best_fitness,
                    mean_fitness: stats.mean_fitness,
                })
                .collect(),
        }
    }

    pub fn points(&self) -> &[ConvergencePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Best fitness per generation.
    pub fn best_curve(&self) -> Vec<Fitness> {
        self.points.iter().map(|p| p.best_fitness).collect()
    }

    /// Mean fitness per generation.
    pub fn mean_curve(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.mean_fitness).collect()
    }

    /// Renders the series as CSV with a header row.
    pub fn to_csv(&self) -> String {
        let mut csv = String::from("generation,best_fitness,mean_fitness\n");
        for point in &self.points {
            csv.push_str(&format!(
                "{},{},{}\n",
                point.generation, point.best_fitness, point.mean_fitness
            ));
        }
        csv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::individual::Individual;

    fn result() -> RunResult {
        let history = vec![
            GenerationStats {
                generation: 0,
                best_fitness: 4,
                mean_fitness: 30.5,
                best_individual: Individual::new(0, 2, 0),
            },
            GenerationStats {
                generation: 1,
                best_fitness: 0,
                mean_fitness: 12.25,
                best_individual: Individual::new(2, 0, 4),
            },
        ];

        RunResult {
            best: Individual::new(2, 0, 4),
            best_fitness: 0,
            termination: Termination::Converged,
            generations: 2,
            history,
        }
    }

    #[test]
    fn test_summary() {
        let equation = EquationSpec::new(3, 5, 2, 14);
        let result = result();
        let summary = Summary::new(&equation, &result);

        assert_eq!(summary.achieved_value(), 14);

        let text = summary.to_string();
        assert!(text.contains("Equation: 3x + 5y + 2z = 14"));
        assert!(text.contains("Best solution: x=2, y=0, z=4"));
        assert!(text.contains("Status: exact solution found"));
    }

    #[test]
    fn test_summary_for_approximation() {
        let equation = EquationSpec::new(2, 4, 6, 7);
        let result = RunResult {
            best: Individual::new(1, 1, 0),
            best_fitness: 1,
            termination: Termination::MaxGenerationsReached,
            generations: 1,
            history: Vec::new(),
        };

        let summary = Summary::new(&equation, &result);
        assert_eq!(summary.achieved_value(), 6);
        assert!(summary.to_string().contains("approximate solution only"));
    }

    #[test]
    fn test_achieved_value_near_the_limits() {
        // The residual saturates here while the left-hand side still fits
        let equation = EquationSpec::new(i64::MIN, i64::MAX, 1, i64::MIN);
        let result = RunResult {
            best: Individual::new(i64::MIN, i64::MAX, i64::MAX),
            best_fitness: Fitness::MAX,
            termination: Termination::MaxGenerationsReached,
            generations: 1,
            history: Vec::new(),
        };

        assert_eq!(equation.residual(&result.best), i128::MAX);
        assert_eq!(
            Summary::new(&equation, &result).achieved_value(),
            i128::MAX - i128::from(i64::MAX)
        );
    }

    #[test]
    fn test_convergence_series() {
        let series = ConvergenceSeries::from_history(&result().history);

        assert_eq!(series.len(), 2);
        assert_eq!(series.best_curve(), vec![4, 0]);
        assert_eq!(series.mean_curve(), vec![30.5, 12.25]);
        assert_eq!(
            series.to_csv(),
            "generation,best_fitness,mean_fitness\n0,4,30.5\n1,0,12.25\n"
        );
    }

    #[test]
    fn test_empty_series() {
        let series = ConvergenceSeries::from_history(&[]);
        assert!(series.is_empty());
        assert_eq!(series.to_csv(), "generation,best_fitness,mean_fitness\n");
    }
}
