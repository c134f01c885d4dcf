// ============================================================
// Layer 4 — Summary Batcher
// ============================================================
// Implements Burn's Batcher trait to stack SummarySamples into
// integer tensors.
//
//   Input:  Vec of N samples, each with a sequence of length S
//   Output: SummaryBatch with input_ids of shape [N, S]
//
// Every sample was padded to the same length by the generator,
// so stacking is a flatten followed by a reshape:
//   [s1_t1, ..., s1_tS, s2_t1, ..., sN_tS] → [N, S]
//
// Reference: Burn Book §4 (Batcher)

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::data::dataset::SummarySample;

/// A batch of encoded records ready for the model.
#[derive(Debug, Clone)]
pub struct SummaryBatch<B: Backend> {
    /// Title + separator + content ids, shape: [batch_size, seq_len]
    pub input_ids: Tensor<B, 2, Int>,

    /// Paired targets, shape: [batch_size, target_len].
    /// Only present when every sample in the batch carries one.
    pub target_ids: Option<Tensor<B, 2, Int>>,
}

/// Holds the device so tensors are created where the model lives.
#[derive(Clone, Debug)]
pub struct SummaryBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> SummaryBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }

    fn stack<'a>(&self, rows: impl Iterator<Item = &'a Vec<u32>>, n: usize) -> Tensor<B, 2, Int> {
        let flat: Vec<i32> = rows.flat_map(|r| r.iter().map(|&x| x as i32)).collect();
        let width = if n == 0 { 0 } else { flat.len() / n };

        Tensor::<B, 1, Int>::from_ints(flat.as_slice(), &self.device).reshape([n, width])
    }
}

impl<B: Backend> Batcher<SummarySample, SummaryBatch<B>> for SummaryBatcher<B> {
    fn batch(&self, items: Vec<SummarySample>) -> SummaryBatch<B> {
        let n = items.len();

        let input_ids = self.stack(items.iter().map(|s| &s.input_ids), n);

        let target_ids = if n > 0 && items.iter().all(|s| s.target_ids.is_some()) {
            Some(self.stack(items.iter().filter_map(|s| s.target_ids.as_ref()), n))
        } else {
            None
        };

        SummaryBatch { input_ids, target_ids }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    fn sample(ids: &[u32]) -> SummarySample {
        SummarySample::new(ids.to_vec())
    }

    #[test]
    fn test_stacks_rows_in_order() {
        let batcher = SummaryBatcher::<TestBackend>::new(Default::default());
        let batch   = batcher.batch(vec![sample(&[1, 2, 3]), sample(&[4, 5, 6])]);

        assert_eq!(batch.input_ids.dims(), [2, 3]);
        let values: Vec<i64> = batch.input_ids.into_data().iter::<i64>().collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
        assert!(batch.target_ids.is_none());
    }

    #[test]
    fn test_targets_stacked_when_all_present() {
        let batcher = SummaryBatcher::<TestBackend>::new(Default::default());
        let mut a   = sample(&[1, 2]);
        let mut b   = sample(&[3, 4]);
        a.target_ids = Some(vec![9]);
        b.target_ids = Some(vec![8]);

        let batch = batcher.batch(vec![a, b]);
        assert_eq!(batch.target_ids.unwrap().dims(), [2, 1]);
    }

    #[test]
    fn test_partial_targets_are_dropped() {
        let batcher = SummaryBatcher::<TestBackend>::new(Default::default());
        let mut a   = sample(&[1, 2]);
        a.target_ids = Some(vec![9]);

        let batch = batcher.batch(vec![a, sample(&[3, 4])]);
        assert!(batch.target_ids.is_none());
    }
}
