use crate::{
    error::{GeneticError, Result},
    individual::{GeneBounds, Individual},
    rng::RandomNumberGenerator,
};

/// How a gene changes when it is picked for mutation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationPolicy {
    /// Replace the gene with a uniform draw from the value range.
    #[default]
    Resample,
    /// Add a uniform delta from `[-max_step, max_step]` and clamp to the range.
    Perturb { max_step: i64 },
}

impl MutationPolicy {
    /// Step used by the classic perturbation variant.
    pub const CLASSIC_STEP: i64 = 10;

    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            MutationPolicy::Resample => Ok(()),
            MutationPolicy::Perturb { max_step } if *max_step > 0 => Ok(()),
            MutationPolicy::Perturb { max_step } => Err(GeneticError::Configuration(format!(
                "Perturbation step must be positive, got {}",
                max_step
            ))),
        }
    }
}

/// Per-gene mutation operator.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mutator {
    probability: f64,
    policy: MutationPolicy,
    bounds: GeneBounds,
}

impl Mutator {
    /// # Errors
    ///
    /// Returns a `Configuration` error if `probability` is outside `[0, 1]`
    /// or the policy is invalid.
    pub fn new(probability: f64, policy: MutationPolicy, bounds: GeneBounds) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GeneticError::Configuration(format!(
                "Mutation probability must be within [0, 1], got {}",
                probability
            )));
        }
        policy.validate()?;

        Ok(Self {
            probability,
            policy,
            bounds,
        })
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn policy(&self) -> MutationPolicy {
        self.policy
    }

    /// Mutates each gene independently with the configured probability.
    pub fn mutate(&self, individual: &mut Individual, rng: &mut RandomNumberGenerator) {
        for gene in individual.genes_mut().iter_mut() {
            if !rng.chance(self.probability) {
                continue;
            }

            *gene = match self.policy {
                MutationPolicy::Resample => self.bounds.random(rng),
                MutationPolicy::Perturb { max_step } => {
                    let delta = rng.gen_gene(-max_step, max_step);
                    self.bounds.clamp(gene.saturating_add(delta))
                }
            };
        }
    }
}
