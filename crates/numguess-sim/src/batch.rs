use crate::domain::Target;
use rand::{Rng, RngCore};
use sha2::{Digest, Sha256};

/// Number of targets in every evaluation batch.
pub const TRIAL_COUNT: usize = 1000;

/// Ordered targets for one evaluation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialBatch {
    targets: Vec<Target>,
}

impl TrialBatch {
    /// Draws `TRIAL_COUNT` targets uniformly from the domain.
    pub fn generate(rng: &mut dyn RngCore) -> Self {
        Self::generate_len(rng, TRIAL_COUNT)
    }

    pub(crate) fn generate_len(rng: &mut dyn RngCore, len: usize) -> Self {
        let targets = (0..len)
            .map(|_| Target::from_domain(rng.gen_range(Target::MIN..=Target::MAX)))
            .collect();
        Self { targets }
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Target> + '_ {
        self.targets.iter().copied()
    }

    /// `sha256:<hex>` over the big-endian targets, in batch order.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for t in &self.targets {
            hasher.update(t.get().to_be_bytes());
        }
        format!("sha256:{}", hex::encode(hasher.finalize()))
    }
}
