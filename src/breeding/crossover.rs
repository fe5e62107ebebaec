use crate::{
    error::{GeneticError, Result},
    individual::{Individual, GENE_COUNT},
    rng::RandomNumberGenerator,
};

/// Uniform crossover.
///
/// A single draw per mating event decides whether crossover happens at all.
/// If it does, each child picks every gene from either parent with equal
/// probability, independently per gene and per child. Otherwise the children
/// are copies of the parents.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformCrossover {
    probability: f64,
}

impl UniformCrossover {
    /// # Errors
    ///
    /// Returns a `Configuration` error if `probability` is outside `[0, 1]`.
    pub fn new(probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GeneticError::Configuration(format!(
                "Crossover probability must be within [0, 1], got {}",
                probability
            )));
        }

        Ok(Self { probability })
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn crossover(
        &self,
        parent_a: &Individual,
        parent_b: &Individual,
        rng: &mut RandomNumberGenerator,
    ) -> (Individual, Individual) {
        if !rng.chance(self.probability) {
            return (*parent_a, *parent_b);
        }

        (
            Self::mix(parent_a, parent_b, rng),
            Self::mix(parent_a, parent_b, rng),
        )
    }

    fn mix(
        parent_a: &Individual,
        parent_b: &Individual,
        rng: &mut RandomNumberGenerator,
    ) -> Individual {
        let mut genes = [0; GENE_COUNT];
        for (position, gene) in genes.iter_mut().enumerate() {
            *gene = if rng.coin_flip() {
                parent_a.genes()[position]
            } else {
                parent_b.genes()[position]
            };
        }
        Individual::from_genes(genes)
    }
}
