//! Dropping transducer.

use crate::compose::Transducer;
use crate::error::Error;
use crate::step::Step;
use crate::transformer::Transformer;

/// Transducer that discards the first `n` items.
#[derive(Debug, Clone)]
pub struct Skip {
    n: usize,
}

/// Discard the first `n` items, then let the rest flow through.
///
/// Discarded items never reach the inner transformer; the accumulator
/// passes through those steps unchanged.
pub fn skip(n: usize) -> Skip {
    Skip { n }
}

impl<Inner> Transducer<Inner> for Skip {
    type Output = SkipTransformer<Inner>;

    fn apply(&self, inner: Inner) -> Self::Output {
        SkipTransformer {
            remaining: self.n,
            inner,
        }
    }
}

/// Transformer produced by applying [`Skip`]; `remaining` is private to one
/// run.
#[derive(Debug, Clone)]
pub struct SkipTransformer<Inner> {
    remaining: usize,
    inner: Inner,
}

impl<In, Inner> Transformer<In> for SkipTransformer<Inner>
where
    Inner: Transformer<In>,
{
    type Acc = Inner::Acc;

    fn init(&self) -> Result<Self::Acc, Error> {
        self.inner.init()
    }

    fn step(&mut self, acc: Self::Acc, item: In) -> Step<Self::Acc> {
        if self.remaining > 0 {
            self.remaining -= 1;
            return Step::Continue(acc);
        }
        self.inner.step(acc, item)
    }

    fn result(&mut self, acc: Self::Acc) -> Self::Acc {
        self.inner.result(acc)
    }
}
