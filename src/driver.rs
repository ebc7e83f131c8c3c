//! Driver — pulls items from a source and runs them through a transformer.

use tracing::trace;

use crate::compose::Transducer;
use crate::step::Step;
use crate::transformer::Transformer;

/// Reduce a source into an accumulator through one transformer.
///
/// Items are pulled one at a time in the source's natural order and fed to
/// `step`. A [`Step::Done`] stops the loop immediately; nothing further is
/// pulled from the source. `result` runs exactly once afterwards, on the
/// unwrapped terminal accumulator.
pub fn reduce<In, S, X>(mut transformer: X, seed: X::Acc, source: S) -> X::Acc
where
    X: Transformer<In>,
    S: IntoIterator<Item = In>,
{
    let mut acc = seed;
    let mut steps = 0usize;
    let mut early = false;

    for item in source {
        steps += 1;
        match transformer.step(acc, item) {
            Step::Continue(next) => acc = next,
            Step::Done(next) => {
                acc = next;
                early = true;
                break;
            }
        }
    }

    trace!(steps, early, "reduction finished");
    transformer.result(acc)
}

/// Apply a transducer to a stepper transformer, then [`reduce`] the source
/// through the combined transformer.
///
/// The stepper is whatever final combining stage the caller supplies —
/// usually a [`wrap`](crate::wrap)ped function, or a custom
/// [`Transformer`] when it needs a natural seed or early termination of
/// its own.
pub fn transduce<In, S, T, X>(
    transducer: T,
    stepper: X,
    seed: <T::Output as Transformer<In>>::Acc,
    source: S,
) -> <T::Output as Transformer<In>>::Acc
where
    T: Transducer<X>,
    T::Output: Transformer<In>,
    S: IntoIterator<Item = In>,
{
    reduce(transducer.apply(stepper), seed, source)
}
