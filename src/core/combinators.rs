//! Combinators for building filter inputs and running signals through filters.

use super::{Filter, Signal};

/// Adds two signals together sample by sample.
///
/// Mostly used to put noise on top of a clean waveform.
///
/// # Examples
///
/// ```
/// use smoothie::{ConstantSignal, Signal, SignalExt};
///
/// let mut sum = ConstantSignal(1.0).plus(ConstantSignal(0.25));
/// assert_eq!(sum.next_sample(), 1.25);
/// ```
pub struct Add<A: Signal, B: Signal> {
    a: A,
    b: B,
}

impl<A: Signal, B: Signal> Add<A, B> {
    /// Creates a new Add combinator.
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A: Signal, B: Signal> Signal for Add<A, B> {
    fn next_sample(&mut self) -> f64 {
        self.a.next_sample() + self.b.next_sample()
    }
}

/// Passes every sample of a signal through a filter.
///
/// The filter is owned by the combinator; use [`Filtered::filter_mut`] to
/// reset or resize it mid-stream.
pub struct Filtered<S: Signal, F: Filter> {
    source: S,
    filter: F,
}

impl<S: Signal, F: Filter> Filtered<S, F> {
    /// Creates a new Filtered combinator.
    pub fn new(source: S, filter: F) -> Self {
        Self { source, filter }
    }

    /// Borrows the wrapped filter.
    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Mutably borrows the wrapped filter.
    pub fn filter_mut(&mut self) -> &mut F {
        &mut self.filter
    }

    /// Splits the combinator back into its source and filter.
    pub fn into_parts(self) -> (S, F) {
        (self.source, self.filter)
    }
}

impl<S: Signal, F: Filter> Signal for Filtered<S, F> {
    fn next_sample(&mut self) -> f64 {
        let x = self.source.next_sample();
        self.filter.apply(x)
    }
}

/// Extension trait providing fluent combinator methods for signals.
pub trait SignalExt: Signal + Sized {
    /// Adds this signal to another signal.
    fn plus<S: Signal>(self, other: S) -> Add<Self, S> {
        Add { a: self, b: other }
    }

    /// Runs this signal through `filter`.
    fn filtered<F: Filter>(self, filter: F) -> Filtered<Self, F> {
        Filtered {
            source: self,
            filter,
        }
    }
}

impl<T: Signal + Sized> SignalExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConstantSignal, ExponentialFilter, MovingAverageFilter};

    #[test]
    fn test_add() {
        let mut add = Add::new(ConstantSignal(2.0), ConstantSignal(3.0));
        assert_eq!(add.next_sample(), 5.0);
    }

    #[test]
    fn test_filtered_matches_direct_application() {
        let filter = ExponentialFilter::new(0.25).unwrap();
        let mut direct = filter.duplicate();
        let mut chained = ConstantSignal(4.0).filtered(filter);

        for _ in 0..20 {
            assert_eq!(chained.next_sample(), direct.apply(4.0));
        }
    }

    #[test]
    fn test_filtered_filter_mut_allows_reset() {
        let mut chained = ConstantSignal(1.0).filtered(MovingAverageFilter::new(4).unwrap());
        chained.next_sample();
        chained.next_sample();
        chained.filter_mut().reset();

        assert_eq!(chained.next_sample(), 0.25);
        assert_eq!(chained.filter().window(), 4);
    }

    #[test]
    fn test_into_parts_returns_filter_state() {
        let mut chained = ConstantSignal(2.0).filtered(ExponentialFilter::new(1.0).unwrap());
        chained.next_sample();
        let (_, filter) = chained.into_parts();
        assert_eq!(filter.last_output(), 2.0);
    }
}
