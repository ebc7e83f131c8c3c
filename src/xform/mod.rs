//! The built-in transducers.
//!
//! Stateless: [`map`], [`filter`], [`remove`]. Stateful: [`take`], [`skip`],
//! [`appending`] — their per-run state lives as plain fields of the
//! transformer produced by one `apply` call, so a transducer value can be
//! reused across runs without leakage.

mod appending;
mod filter;
mod map;
mod skip;
mod take;


pub use appending::{appending, Appending, AppendingTransformer};
pub use filter::{filter, remove, Filter, FilterTransformer};
pub use map::{map, Map, MapTransformer};
pub use skip::{skip, Skip, SkipTransformer};
pub use take::{take, Take, TakeTransformer};
