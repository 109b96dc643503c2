use std::collections::BTreeMap;

use rpr_model::{DatasetKey, DecisionDataset};

/// The persistence seam. The real store lives outside this core; saving
/// the same key again supersedes the stored dataset (last write wins — the
/// store, not this core, is where any concurrency control would belong).
pub trait DecisionDatasetRepository {
    fn find(&self, key: &DatasetKey) -> Option<DecisionDataset>;
    fn save(&mut self, dataset: DecisionDataset);
}

/// Deterministic in-memory store used by tests and the CLI preview.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatasetRepository {
    datasets: BTreeMap<DatasetKey, DecisionDataset>,
}

impl InMemoryDatasetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    pub fn all(&self) -> impl Iterator<Item = &DecisionDataset> {
        self.datasets.values()
    }
}

impl DecisionDatasetRepository for InMemoryDatasetRepository {
    fn find(&self, key: &DatasetKey) -> Option<DecisionDataset> {
        self.datasets.get(key).cloned()
    }

    fn save(&mut self, dataset: DecisionDataset) {
        self.datasets.insert(dataset.key(), dataset);
    }
}
