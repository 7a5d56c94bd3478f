// msgbundle - Immutable message bundles for Rust
//
// Resolves string keys through an ordered list of message sources, falling
// back to the key itself. Bundles are immutable; builders derive new ones.

// Re-export core functionality
pub use msgbundle_core::*;

// Logging, for applications that want to configure it at runtime
pub use msgbundle_log as log;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        BundleError, MapSource, MessageBundle, MessageBundleBuilder, MessageSource, Result,
        SharedSource,
    };
}
