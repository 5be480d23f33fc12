//! Composition orchestration for the binding scaffolder
//!
//! Ties the pure content layer to the filesystem: a [`Composer`] walks one
//! service's template directory, expands what needs expanding, and
//! registers artifacts into a [`ProjectContext`]. [`run_all`] drives the
//! composer across the selected services, and
//! [`ProjectContext::persist`] writes everything out at the end.

pub mod compose;
pub mod context;
pub mod error;
pub mod run;
pub mod template;

pub use compose::{ComposeOutcome, ComposeReport, Composer};
pub use context::{InstrumentationRef, PersistReport, ProjectContext, ReadMeRef};
pub use error::{Error, Result};
pub use run::run_all;
pub use template::TemplateEngine;
