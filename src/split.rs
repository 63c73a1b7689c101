use rand::seq::SliceRandom;

use crate::{
    error::{Error, Result},
    observation::Observation,
};

/// Randomly partitions a dataset into training and test sets.
///
/// The observations are copied and shuffled with an unbiased Fisher–Yates shuffle;
/// the first `floor(n × test_fraction)` go to the test set and the rest to the
/// training set. Both halves keep the shuffled order.
///
/// Every observation lands in exactly one of the two sets, so their combined
/// length always equals `observations.len()`.
///
/// # Parameters
/// - `observations`: The dataset to split.
/// - `test_fraction`: Share of the data held out for testing, in `[0, 1]`.
/// - `rng`: Source of randomness. Use [`crate::rng`] with a seed for a reproducible split.
///
/// # Returns
/// `(train, test)`
///
/// # Errors
/// `Error::InvalidConfiguration` if `test_fraction` is outside `[0, 1]` or not a number.
///
/// # Example
/// ```rust
/// # use linear_lens::{generate, rng, split, GenerationConfig};
/// let data = generate(&GenerationConfig::new(50, 2.5, 5000.0, 4000.0), &mut rng(None)).unwrap();
/// let (train, test) = split(&data, 0.2, &mut rng(None)).unwrap();
/// assert_eq!(test.len(), 10);
/// assert_eq!(train.len(), 40);
/// ```
pub fn split<R: rand::Rng + ?Sized>(
    observations: &[Observation],
    test_fraction: f64,
    rng: &mut R,
) -> Result<(Vec<Observation>, Vec<Observation>)> {
    if !(0.0..=1.0).contains(&test_fraction) {
        return Err(Error::InvalidConfiguration(format!(
            "test fraction must be between 0 and 1, got {test_fraction}"
        )));
    }

    let mut shuffled = observations.to_vec();
    shuffled.shuffle(rng);

    let test_count = test_count(shuffled.len(), test_fraction);
    let train = shuffled.split_off(test_count);

    log::debug!(
        "split {} observations: {} train / {test_count} test",
        observations.len(),
        train.len()
    );
    Ok((train, shuffled))
}

/// Number of observations [`split`] puts in the test set: `floor(len × test_fraction)`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn test_count(len: usize, test_fraction: f64) -> usize {
    ((len as f64 * test_fraction).floor() as usize).min(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_partition, generate, rng, GenerationConfig};

    fn dataset(n: usize) -> Vec<Observation> {
        generate(&GenerationConfig::new(n, 2.5, 5000.0, 4000.0), &mut rng(Some(11))).unwrap()
    }

    #[test]
    fn split_sizes() {
        let data = dataset(50);
        for (fraction, expected_test) in [(0.0, 0), (0.1, 5), (0.25, 12), (0.5, 25), (1.0, 50)] {
            let (train, test) = split(&data, fraction, &mut rng(Some(1))).unwrap();
            assert_eq!(test.len(), expected_test, "fraction {fraction}");
            assert_eq!(train.len(), 50 - expected_test, "fraction {fraction}");
        }
    }

    #[test]
    fn test_counts() {
        assert_eq!(test_count(15, 0.1), 1);
        assert_eq!(test_count(20, 0.1), 2);
        assert_eq!(test_count(50, 0.2), 10);
        assert_eq!(test_count(7, 1.0), 7);
        assert_eq!(test_count(0, 0.5), 0);
    }

    #[test]
    fn split_is_a_partition() {
        let data = dataset(137);
        let (train, test) = split(&data, 0.3, &mut rng(Some(8))).unwrap();
        assert_partition!(data, train, test);
    }

    #[test]
    fn split_is_reproducible_with_seed() {
        let data = dataset(60);
        let a = split(&data, 0.2, &mut rng(Some(77))).unwrap();
        let b = split(&data, 0.2, &mut rng(Some(77))).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn split_shuffles() {
        let data = dataset(100);
        let (train, test) = split(&data, 0.2, &mut rng(Some(3))).unwrap();

        let order: Vec<_> = test.iter().chain(&train).map(|o| o.id).collect();
        let original: Vec<_> = data.iter().map(|o| o.id).collect();
        assert_ne!(order, original);
    }

    #[test]
    fn split_is_unbiased() {
        // Each of 4 positions should land first in the test set about 1/4 of the time
        let data = dataset(4);
        let mut rng = rng(Some(2));
        let mut counts = [0usize; 4];
        for _ in 0..8000 {
            let (_, test) = split(&data, 0.25, &mut rng).unwrap();
            counts[test[0].id - 1] += 1;
        }

        for count in counts {
            assert!((1700..=2300).contains(&count), "{counts:?}");
        }
    }

    #[test]
    fn split_empty() {
        let (train, test) = split(&[], 0.2, &mut rng(None)).unwrap();
        assert!(train.is_empty());
        assert!(test.is_empty());
    }

    #[test]
    fn split_invalid_fraction() {
        let data = dataset(10);
        for fraction in [-0.1, 1.5, f64::NAN] {
            assert!(matches!(
                split(&data, fraction, &mut rng(None)),
                Err(Error::InvalidConfiguration(_))
            ));
        }
    }
}
