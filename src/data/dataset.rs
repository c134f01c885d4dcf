use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

use crate::domain::error::{DatasetError, Result};
use crate::domain::traits::SequenceSource;

/// One encoded record.
/// Sequence format: title [PAD]... [SEP] content [PAD]...
///
/// `target_ids` is reserved for a paired target sequence; the
/// loader never fills it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarySample {
    pub input_ids:  Vec<u32>,
    pub target_ids: Option<Vec<u32>>,
}

impl SummarySample {
    pub fn new(input_ids: Vec<u32>) -> Self {
        Self { input_ids, target_ids: None }
    }
}

/// Samples in file order. Built once, never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct SummaryDataset {
    samples: Vec<SummarySample>,
}

impl SummaryDataset {
    pub fn new(samples: Vec<SummarySample>) -> Self { Self { samples } }

    pub fn samples(&self) -> &[SummarySample] { &self.samples }
}

impl SequenceSource for SummaryDataset {
    type Item = SummarySample;

    fn length(&self) -> usize {
        self.samples.len()
    }

    fn at(&self, index: usize) -> Result<&SummarySample> {
        self.samples.get(index).ok_or(DatasetError::IndexOutOfRange {
            index,
            len: self.samples.len(),
        })
    }
}

impl Dataset<SummarySample> for SummaryDataset {
    fn get(&self, index: usize) -> Option<SummarySample> {
        self.at(index).ok().cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> SummaryDataset {
        SummaryDataset::new(vec![
            SummarySample::new(vec![1, 2]),
            SummarySample::new(vec![3, 4]),
        ])
    }

    #[test]
    fn test_at_returns_in_insertion_order() {
        let ds = dataset();
        assert_eq!(ds.length(), 2);
        assert_eq!(ds.at(1).unwrap().input_ids, vec![3, 4]);
        assert!(ds.at(0).unwrap().target_ids.is_none());
    }

    #[test]
    fn test_at_out_of_range() {
        let err = dataset().at(2).unwrap_err();
        assert!(matches!(err, DatasetError::IndexOutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn test_burn_dataset_view_matches() {
        let ds = dataset();
        assert_eq!(Dataset::len(&ds), 2);
        assert_eq!(ds.get(0), Some(SummarySample::new(vec![1, 2])));
        assert_eq!(ds.get(5), None);
    }

    #[test]
    fn test_empty_dataset() {
        let ds = SummaryDataset::default();
        assert_eq!(ds.length(), 0);
        assert!(ds.at(0).is_err());
    }
}
