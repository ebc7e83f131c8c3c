//! Mapping transducer.

use crate::compose::Transducer;
use crate::error::Error;
use crate::step::Step;
use crate::transformer::Transformer;

/// Transducer that transforms each item with `f` before it reaches the
/// inner transformer.
#[derive(Debug, Clone)]
pub struct Map<F> {
    f: F,
}

/// Transform every item with `f`.
pub fn map<F>(f: F) -> Map<F> {
    Map { f }
}

impl<F, Inner> Transducer<Inner> for Map<F>
where
    F: Clone,
{
    type Output = MapTransformer<F, Inner>;

    fn apply(&self, inner: Inner) -> Self::Output {
        MapTransformer {
            f: self.f.clone(),
            inner,
        }
    }
}

/// Transformer produced by applying [`Map`].
#[derive(Debug, Clone)]
pub struct MapTransformer<F, Inner> {
    f: F,
    inner: Inner,
}

impl<In, Out, F, Inner> Transformer<In> for MapTransformer<F, Inner>
where
    F: FnMut(In) -> Out,
    Inner: Transformer<Out>,
{
    type Acc = Inner::Acc;

    fn init(&self) -> Result<Self::Acc, Error> {
        self.inner.init()
    }

    fn step(&mut self, acc: Self::Acc, item: In) -> Step<Self::Acc> {
        let mapped = (self.f)(item);
        self.inner.step(acc, mapped)
    }

    fn result(&mut self, acc: Self::Acc) -> Self::Acc {
        self.inner.result(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::transduce;
    use crate::error::Error;
    use crate::transformer::wrap;

    fn append(mut acc: Vec<i64>, item: i64) -> Vec<i64> {
        acc.push(item);
        acc
    }

    #[test]
    fn maps_each_item() {
        let out = transduce(map(|n: i64| n + 2), wrap(append), Vec::new(), vec![2, 3, 4]);
        assert_eq!(out, vec![4, 5, 6]);
    }

    #[test]
    fn identity_map_leaves_input_unchanged() {
        let out = transduce(
            map(std::convert::identity),
            wrap(append),
            Vec::new(),
            vec![1, 2, 3],
        );
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn same_transducer_drives_different_sinks() {
        let plus1 = map(|n: i64| n + 1);
        let collected = transduce(&plus1, wrap(append), Vec::new(), vec![2, 3, 4]);
        let summed = transduce(&plus1, wrap(|acc: i64, n: i64| acc + n), 0, vec![2, 3, 4]);
        assert_eq!(collected, vec![3, 4, 5]);
        assert_eq!(summed, 12);
    }

    #[test]
    fn init_forwards_to_the_inner_transformer() {
        let xf = map(|n: i64| n + 1).apply(wrap(append));
        assert!(matches!(
            Transformer::<i64>::init(&xf),
            Err(Error::InitUnsupported)
        ));
    }
}
