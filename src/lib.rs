//! Composable algorithmic transformations, decoupled from their sources
//! and sinks.
//!
//! # Architecture
//!
//! ```text
//! source ──→ Transducer stack ──→ stepper Transformer ──→ accumulator
//!               (map, filter,        (wrapped fn or
//!                skip, take, …)       custom stage)
//! ```
//!
//! - **[`Transformer`]**: the three-operation lifecycle (`init`, `step`,
//!   `result`) every reduction stage implements.
//! - **[`Step`]**: the step outcome — `Continue` or `Done`, the cooperative
//!   early-termination signal.
//! - **[`reduce`] / [`transduce`]**: the driver — pulls items, watches for
//!   `Done`, finalizes exactly once.
//! - **[`Transducer`]**: adapts an inner transformer into an outer one;
//!   [`compose`] and [`compose!`] chain stacks of them so data flows in the
//!   written order.
//!
//! Transformations never learn what they are iterating or what combines the
//! results: the same composed stack can fill a `Vec`, sum integers, or feed
//! a writer, over any `IntoIterator` — including infinite ones, thanks to
//! `Step::Done`.
//!
//! ```
//! use xduce::{map, take, transduce, wrap};
//!
//! let squares = transduce(
//!     xduce::compose!(map(|n: u64| n * n), take(4)),
//!     wrap(|mut acc: Vec<u64>, n| {
//!         acc.push(n);
//!         acc
//!     }),
//!     Vec::new(),
//!     1..,
//! );
//! assert_eq!(squares, vec![1, 4, 9, 16]);
//! ```

mod compose;
mod driver;
mod error;
mod step;
mod transformer;
mod xform;

pub use compose::{compose, Composed, Transducer};
pub use driver::{reduce, transduce};
pub use error::Error;
pub use step::Step;
pub use transformer::{wrap, FnStep, Transformer};
pub use xform::{
    appending, filter, map, remove, skip, take, Appending, AppendingTransformer, Filter,
    FilterTransformer, Map, MapTransformer, Skip, SkipTransformer, Take, TakeTransformer,
};
