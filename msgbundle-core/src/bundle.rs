//! Message Bundles
//!
//! A [`MessageBundle`] resolves keys through an ordered list of
//! [`MessageSource`]s. Bundles are immutable; to change one, derive a
//! [`MessageBundleBuilder`] from it, modify the builder and build again.
//! The original bundle is left intact.

use crate::{BundleError, MessageSource, Result, SharedSource};
use msgbundle_log::debug;
use std::fmt;
use std::sync::Arc;

/// An immutable, ordered set of message sources.
///
/// Sources are consulted in order and the first one that knows the key
/// wins. A key no source knows resolves to itself, so [`resolve`] never
/// fails for a missing message.
///
/// Bundles are cheap to clone and safe to share between threads.
///
/// # Example
///
/// ```
/// use msgbundle_core::{MapSource, MessageBundle};
/// use std::sync::Arc;
///
/// let bundle = MessageBundle::builder()
///     .append_source(Arc::new(MapSource::builder().put("a", "Apple").build()))
///     .build();
///
/// assert_eq!(bundle.resolve("a"), "Apple");
/// assert_eq!(bundle.resolve("z"), "z");
/// ```
///
/// [`resolve`]: MessageBundle::resolve
#[derive(Clone)]
pub struct MessageBundle {
    sources: Arc<[SharedSource]>,
}

impl MessageBundle {
    /// Start an empty builder.
    pub fn builder() -> MessageBundleBuilder {
        MessageBundleBuilder::default()
    }

    /// Resolve `key` to a message.
    ///
    /// Returns the first message found scanning the sources in order, or
    /// `key` itself when no source has one.
    pub fn resolve(&self, key: &str) -> String {
        self.sources
            .iter()
            .find_map(|source| source.lookup(key))
            .unwrap_or_else(|| key.to_string())
    }

    /// Resolve a key that may be absent.
    ///
    /// # Errors
    ///
    /// [`BundleError::InvalidArgument`] if `key` is `None`.
    pub fn try_resolve(&self, key: Option<&str>) -> Result<String> {
        let key = key.ok_or(BundleError::InvalidArgument("cannot query null key"))?;
        Ok(self.resolve(key))
    }

    /// A new builder seeded with this bundle's sources.
    ///
    /// Changes made through the builder never affect `self`.
    pub fn derive_builder(&self) -> MessageBundleBuilder {
        debug!("deriving builder from bundle with {} sources", self.sources.len());
        MessageBundleBuilder {
            sources: self.sources.to_vec(),
        }
    }

    /// Number of registered sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl fmt::Debug for MessageBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageBundle")
            .field("sources", &self.sources.len())
            .finish()
    }
}

/// Accumulates message sources for a [`MessageBundle`].
///
/// A builder is meant for a single owner: mutation goes through `&mut self`,
/// so sharing one between threads requires external synchronization such
/// as a `Mutex`. Calling [`build`] does not consume or reset the builder;
/// each call snapshots the current sources into an independent bundle.
///
/// [`build`]: MessageBundleBuilder::build
#[derive(Default)]
pub struct MessageBundleBuilder {
    sources: Vec<SharedSource>,
}

impl MessageBundleBuilder {
    /// Add `source` after every registered source (lowest priority).
    pub fn append_source(&mut self, source: SharedSource) -> &mut Self {
        self.sources.push(source);
        self
    }

    /// Add `source` before every registered source (highest priority).
    pub fn prepend_source(&mut self, source: SharedSource) -> &mut Self {
        self.sources.insert(0, source);
        self
    }

    /// Append a source that may be absent.
    ///
    /// # Errors
    ///
    /// [`BundleError::InvalidArgument`] if `source` is `None`; the builder
    /// is left unchanged.
    pub fn try_append_source(&mut self, source: Option<SharedSource>) -> Result<&mut Self> {
        let source =
            source.ok_or(BundleError::InvalidArgument("cannot append null message source"))?;
        Ok(self.append_source(source))
    }

    /// Prepend a source that may be absent.
    ///
    /// # Errors
    ///
    /// [`BundleError::InvalidArgument`] if `source` is `None`; the builder
    /// is left unchanged.
    pub fn try_prepend_source(&mut self, source: Option<SharedSource>) -> Result<&mut Self> {
        let source =
            source.ok_or(BundleError::InvalidArgument("cannot prepend null message source"))?;
        Ok(self.prepend_source(source))
    }

    /// Snapshot the current sources into a new bundle.
    pub fn build(&self) -> MessageBundle {
        debug!("building bundle with {} sources", self.sources.len());
        MessageBundle {
            sources: self.sources.iter().cloned().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl fmt::Debug for MessageBundleBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageBundleBuilder")
            .field("sources", &self.sources.len())
            .finish()
    }
}
