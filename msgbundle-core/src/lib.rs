//! Immutable Message Bundles
//!
//! Resolves string keys to messages through an ordered list of pluggable
//! message sources:
//!
//! - **Ordered resolution**: the first source that knows a key wins
//! - **Key fallback**: unknown keys resolve to themselves, never to an error
//! - **Immutable bundles**: derive a builder to make a modified copy
//! - **Shared sources**: one source can back many bundles
//!
//! # Quick Start
//!
//! ```rust
//! use msgbundle_core::{MapSource, MessageBundle};
//! use std::sync::Arc;
//!
//! let defaults = Arc::new(MapSource::builder()
//!     .put("a", "Avocado")
//!     .put("b", "Banana")
//!     .build());
//!
//! let base = MessageBundle::builder()
//!     .append_source(defaults)
//!     .build();
//!
//! // Override one message without touching `base`
//! let custom = base
//!     .derive_builder()
//!     .prepend_source(Arc::new(MapSource::builder().put("a", "Apple").build()))
//!     .build();
//!
//! assert_eq!(base.resolve("a"), "Avocado");
//! assert_eq!(custom.resolve("a"), "Apple");
//! assert_eq!(custom.resolve("b"), "Banana");
//! assert_eq!(custom.resolve("c"), "c");
//! ```

mod bundle;
mod error;
mod map;
mod source;

pub use bundle::{MessageBundle, MessageBundleBuilder};
pub use error::BundleError;
pub use map::{MapSource, MapSourceBuilder};
pub use source::{MessageSource, SharedSource};

/// Result type for bundle operations
pub type Result<T> = std::result::Result<T, BundleError>;
