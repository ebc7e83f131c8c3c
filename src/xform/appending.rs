//! Appending transducer — injects one extra item at finalization.

use crate::compose::Transducer;
use crate::error::Error;
use crate::step::Step;
use crate::transformer::Transformer;

/// Transducer that passes every item through untouched and steps one extra
/// value into the accumulator when the run finalizes.
#[derive(Debug, Clone)]
pub struct Appending<T> {
    value: T,
}

/// Append `value` after the last item of the run.
///
/// The extra value is injected in `result`, not `step`. If stepping it
/// signals `Done`, the signal is unwrapped before the inner `result` runs.
pub fn appending<T>(value: T) -> Appending<T> {
    Appending { value }
}

impl<T, Inner> Transducer<Inner> for Appending<T>
where
    T: Clone,
{
    type Output = AppendingTransformer<T, Inner>;

    fn apply(&self, inner: Inner) -> Self::Output {
        AppendingTransformer {
            value: Some(self.value.clone()),
            inner,
        }
    }
}

/// Transformer produced by applying [`Appending`].
///
/// `value` is taken on finalization, so the extra item is stepped at most
/// once per run.
#[derive(Debug, Clone)]
pub struct AppendingTransformer<T, Inner> {
    value: Option<T>,
    inner: Inner,
}

impl<In, Inner> Transformer<In> for AppendingTransformer<In, Inner>
where
    Inner: Transformer<In>,
{
    type Acc = Inner::Acc;

    fn init(&self) -> Result<Self::Acc, Error> {
        self.inner.init()
    }

    fn step(&mut self, acc: Self::Acc, item: In) -> Step<Self::Acc> {
        self.inner.step(acc, item)
    }

    fn result(&mut self, acc: Self::Acc) -> Self::Acc {
        let acc = match self.value.take() {
            Some(value) => self.inner.step(acc, value).into_inner(),
            None => acc,
        };
        self.inner.result(acc)
    }
}
