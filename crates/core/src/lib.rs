//! Pure domain logic for statutory lien and bond-claim deadlines.
//!
//! Everything here is synchronous and side-effect-free; the only
//! time-dependent input, "today", is threaded in explicitly so callers and
//! tests get deterministic output.

pub mod calculation;
pub mod dates;
pub mod deadlines;
pub mod error;
pub mod facts;
pub mod jurisdiction;
pub mod remedies;
pub mod roles;
pub mod types;
pub mod validation;

pub use calculation::{calculate, calculate_as_of, CalculationResult};
pub use deadlines::{DeadlineKind, DeadlineResult, DeadlineType};
pub use error::CoreError;
pub use facts::ProjectFacts;
pub use jurisdiction::{ProjectType, UsState};
pub use remedies::RemedyStep;
pub use roles::{ContractParty, Role};
