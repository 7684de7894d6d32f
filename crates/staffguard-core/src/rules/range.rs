use num_traits::Num;
use std::fmt::Debug;
use std::ops::Bound;

/// Numeric interval with independently open, closed or missing ends.
#[derive(Debug, Clone, Copy)]
pub struct Range<N: Num + PartialOrd + Copy + Debug> {
    min: Bound<N>,
    max: Bound<N>,
}

impl<N> Range<N>
where
    N: Num + PartialOrd + Copy + Debug,
{
    pub fn new(min: Bound<N>, max: Bound<N>) -> Self {
        Self { min, max }
    }

    /// `[min, max]`
    pub fn between(min: N, max: N) -> Self {
        Self::new(Bound::Included(min), Bound::Included(max))
    }

    /// `(0, +inf)`
    pub fn positive() -> Self {
        Self::new(Bound::Excluded(N::zero()), Bound::Unbounded)
    }

    /// Incomparable values (NaN) are never contained.
    pub fn contains(&self, value: N) -> bool {
        let above_min = match self.min {
            Bound::Included(min) => value >= min,
            Bound::Excluded(min) => value > min,
            Bound::Unbounded => true,
        };
        let below_max = match self.max {
            Bound::Included(max) => value <= max,
            Bound::Excluded(max) => value < max,
            Bound::Unbounded => true,
        };
        above_min && below_max
    }
}
