//! Filtering transducers.

use crate::compose::Transducer;
use crate::error::Error;
use crate::step::Step;
use crate::transformer::Transformer;

/// Transducer that forwards only the items its predicate accepts.
#[derive(Debug, Clone)]
pub struct Filter<P> {
    predicate: P,
}

/// Keep only items for which `predicate` returns true.
///
/// Rejected items are dropped silently — no signal is produced and the
/// accumulator passes through unchanged.
pub fn filter<P>(predicate: P) -> Filter<P> {
    Filter { predicate }
}

/// Drop items for which `predicate` returns true.
///
/// Derived from [`filter`] with the negated predicate, not an independent
/// transducer.
pub fn remove<In, P>(predicate: P) -> Filter<impl FnMut(&In) -> bool + Clone>
where
    P: FnMut(&In) -> bool + Clone,
{
    let mut predicate = predicate;
    filter(move |item: &In| !predicate(item))
}

impl<P, Inner> Transducer<Inner> for Filter<P>
where
    P: Clone,
{
    type Output = FilterTransformer<P, Inner>;

    fn apply(&self, inner: Inner) -> Self::Output {
        FilterTransformer {
            predicate: self.predicate.clone(),
            inner,
        }
    }
}

/// Transformer produced by applying [`Filter`].
#[derive(Debug, Clone)]
pub struct FilterTransformer<P, Inner> {
    predicate: P,
    inner: Inner,
}

impl<In, P, Inner> Transformer<In> for FilterTransformer<P, Inner>
where
    P: FnMut(&In) -> bool,
    Inner: Transformer<In>,
{
    type Acc = Inner::Acc;

    fn init(&self) -> Result<Self::Acc, Error> {
        self.inner.init()
    }

    fn step(&mut self, acc: Self::Acc, item: In) -> Step<Self::Acc> {
        if (self.predicate)(&item) {
            self.inner.step(acc, item)
        } else {
            Step::Continue(acc)
        }
    }

    fn result(&mut self, acc: Self::Acc) -> Self::Acc {
        self.inner.result(acc)
    }
}
