//! Service binding descriptor catalog
//!
//! Declarative descriptions of cloud service bindings: which key a service's
//! credentials live under in the binding set, which dotted paths feed the
//! local-development configuration, and which instrumentation files each
//! target language receives.

pub mod descriptor;
pub mod error;
pub mod registry;

pub use descriptor::{InstrumentationFile, LanguageTarget, ServiceDescriptor};
pub use error::{Error, Result};
pub use registry::{BUILTIN_COUNT, ServiceRegistry, builtin_descriptors};
