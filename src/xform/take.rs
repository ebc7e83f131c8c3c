//! Truncating transducer.

use crate::compose::Transducer;
use crate::error::Error;
use crate::step::Step;
use crate::transformer::Transformer;

/// Transducer that admits the first `n` items and then signals termination.
#[derive(Debug, Clone)]
pub struct Take {
    n: usize,
}

/// Admit exactly `n` items, then stop the run.
///
/// The nth step forwards its item and wraps the returned accumulator in
/// [`Step::Done`] regardless of what the inner transformer signaled, so the
/// driver stops pulling after exactly `n` items pass through. Infinite
/// sources are fine under `take`.
pub fn take(n: usize) -> Take {
    Take { n }
}

impl<Inner> Transducer<Inner> for Take {
    type Output = TakeTransformer<Inner>;

    fn apply(&self, inner: Inner) -> Self::Output {
        TakeTransformer {
            left: self.n,
            inner,
        }
    }
}

/// Transformer produced by applying [`Take`]; `left` is private to one run.
#[derive(Debug, Clone)]
pub struct TakeTransformer<Inner> {
    left: usize,
    inner: Inner,
}

impl<In, Inner> Transformer<In> for TakeTransformer<Inner>
where
    Inner: Transformer<In>,
{
    type Acc = Inner::Acc;

    fn init(&self) -> Result<Self::Acc, Error> {
        self.inner.init()
    }

    fn step(&mut self, acc: Self::Acc, item: In) -> Step<Self::Acc> {
        // take(0) admits nothing; also guards an illegal step after Done.
        if self.left == 0 {
            return Step::Done(acc);
        }

        let stepped = self.inner.step(acc, item);
        self.left -= 1;

        if self.left == 0 {
            Step::Done(stepped.into_inner())
        } else {
            stepped
        }
    }

    fn result(&mut self, acc: Self::Acc) -> Self::Acc {
        self.inner.result(acc)
    }
}
