use log::debug;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use super::model::Dataset;

#[derive(Debug, Error, PartialEq)]
pub enum SplitError {
    #[error("test size must lie strictly between 0 and 1, got {0}")]
    InvalidFraction(f64),

    #[error("splitting {total} rows with {test} held out leaves an empty partition")]
    EmptyPartition { total: usize, test: usize },
}

/// Train and test partitions of one dataset.
#[derive(Debug, Clone)]
pub struct Split {
    pub train: Dataset,
    pub test: Dataset,
}

/// Decides which row indices are held out for testing.
pub trait Splitter {
    /// Partition `0..len` into `(train, test)` index lists. The lists must be
    /// disjoint and together cover every index exactly once.
    fn partition(&mut self, len: usize, test_size: f64)
        -> Result<(Vec<usize>, Vec<usize>), SplitError>;
}

/// Number of rows held out for `test_size`, rounded up.
pub fn test_count(len: usize, test_size: f64) -> Result<usize, SplitError> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(SplitError::InvalidFraction(test_size));
    }
    let test = (test_size * len as f64).ceil() as usize;
    if test == 0 || test >= len {
        return Err(SplitError::EmptyPartition { total: len, test });
    }
    Ok(test)
}

// ---------------------------------------------------------------------------
// Shuffled split
// ---------------------------------------------------------------------------

/// Uniformly shuffled split. Seeded runs are reproducible.
pub struct RandomSplit {
    rng: ChaCha8Rng,
}

impl RandomSplit {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { rng }
    }
}

impl Splitter for RandomSplit {
    fn partition(
        &mut self,
        len: usize,
        test_size: f64,
    ) -> Result<(Vec<usize>, Vec<usize>), SplitError> {
        let test = test_count(len, test_size)?;
        let mut indices: Vec<usize> = (0..len).collect();
        indices.shuffle(&mut self.rng);
        let train = indices.split_off(test);
        Ok((train, indices))
    }
}

/// Split `dataset` into train and test sets. The input is left untouched.
pub fn split(
    dataset: &Dataset,
    splitter: &mut dyn Splitter,
    test_size: f64,
) -> Result<Split, SplitError> {
    let (train_idx, test_idx) = splitter.partition(dataset.len(), test_size)?;
    debug!(
        "split {} rows: {} train / {} test",
        dataset.len(),
        train_idx.len(),
        test_idx.len()
    );
    Ok(Split {
        train: dataset.select(&train_idx),
        test: dataset.select(&test_idx),
    })
}

/// Holds out a fixed list of rows. Lets tests pin the partition.
#[cfg(test)]
pub(crate) struct FixedSplit {
    pub test: Vec<usize>,
}

#[cfg(test)]
impl Splitter for FixedSplit {
    fn partition(
        &mut self,
        len: usize,
        _test_size: f64,
    ) -> Result<(Vec<usize>, Vec<usize>), SplitError> {
        let train = (0..len).filter(|i| !self.test.contains(i)).collect();
        Ok((train, self.test.clone()))
    }
}
