use rand::Rng;

/// Source of every random choice made while caching and dreaming.
///
/// Implemented for any [`rand::Rng`], so a seeded `StdRng` gives a
/// reproducible run.
pub trait RandomSource {
    /// Uniform index in `[0, bound)`. `bound` must be non-zero.
    fn below(&mut self, bound: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn below(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Replays a fixed list of choices, each reduced modulo the requested bound
#[cfg(test)]
pub(crate) struct ScriptedSource {
    values: std::collections::VecDeque<usize>,
}

#[cfg(test)]
impl ScriptedSource {
    pub(crate) fn new(values: impl IntoIterator<Item = usize>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn below(&mut self, bound: usize) -> usize {
        self.values.pop_front().expect("scripted source exhausted") % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rng_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for bound in 1..50 {
            assert!(rng.below(bound) < bound);
        }
        assert_eq!(rng.below(1), 0);
    }

    #[test]
    fn test_scripted_source_replays() {
        let mut source = ScriptedSource::new([3, 12, 0]);
        assert_eq!(source.below(10), 3);
        assert_eq!(source.below(10), 2);
        assert_eq!(source.below(5), 0);
        assert_eq!(source.remaining(), 0);
    }
}
