//! Core domain types for the Marquee event-ranking engine.
//!
//! The crate defines the event record consumed by the scorers, the
//! per-request [`RankingContext`], the [`Surface`] identifiers for the three
//! ranked UI surfaces, and the [`Ranker`] trait that scorer implementations
//! plug into. Scoring itself lives in `marquee-scorer`; this crate stays free
//! of I/O so the types can be shared by any caller.

#![forbid(unsafe_code)]

pub mod context;
pub mod event;
pub mod ranker;
pub mod surface;
pub mod time;

pub use context::{CategoryFilter, RankingContext};
pub use event::Event;
pub use ranker::{Ranker, Score};
pub use surface::{ParseSurfaceError, Surface};
