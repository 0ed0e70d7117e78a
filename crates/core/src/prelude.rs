//! Prelude module - common imports for outcome-based code.
//!
//! Import this module to get the whole surface plus the functional helper
//! traits:
//! ```rust
//! use outcome_core::prelude::*;
//! ```

// Re-export functional utilities
pub use itertools::Itertools;
pub use tap::{Pipe, Tap};

// Re-export the crate surface
pub use crate::boundary::{Boundary, BoundaryError, PanicReport};
pub use crate::combine::{combine, partition};
pub use crate::ext::{IntoOutcome, OptionExt, OutcomeExt};
pub use crate::outcome::Outcome::{self, Failure, Success};
