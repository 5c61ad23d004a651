//! Domain types for the metro route planner.
//!
//! This module contains the core domain model types. All types enforce
//! their invariants at construction time, so code that receives these
//! types can trust their validity.

mod error;
mod line;
mod route;
mod station;

pub use error::DomainError;
pub use line::LineId;
pub use route::{Hop, Route};
pub use station::{InvalidStationId, StationId};
