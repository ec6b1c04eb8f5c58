//! # nird-core - Core Domain Types
//!
//! Foundation crate for the NIRD onboarding wizard. Provides the wizard's
//! domain types, the static campaign content, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Step`] - One of the five fixed onboarding stages (Hero .. Final)
//! - [`Profile`] - The user-declared role (student, teacher, school)
//! - [`ThemeMode`] - Dark or light rendering
//!
//! ### Static Content (`content`)
//! - [`ContentBundle`] - Title + ordered items shown for a profile
//! - [`ResourceDescriptor`] - One inert downloadable resource
//! - [`bundle_for()`] - Exhaustive profile → bundle lookup
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use nird_core::prelude::*;
//! ```

pub mod content;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all NIRD crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use content::{
    bundle_for, ContentBundle, MediaType, ProfileCard, ResourceDescriptor, Rgb, PROFILE_CARDS,
    RESOURCES,
};
pub use error::{Error, Result, ResultExt};
pub use types::{Profile, Step, ThemeMode, STEP_COUNT};
