//! Message Sources
//!
//! A [`MessageSource`] is anything that can answer "what is the message for
//! this key?" with a message or nothing. Bundles hold sources behind
//! [`SharedSource`] so one source can back any number of bundles.

use std::collections::HashMap;
use std::sync::Arc;

/// A provider of messages keyed by string.
///
/// Implementations should be deterministic: bundles assume that asking the
/// same source for the same key twice gives the same answer.
///
/// Closures of the form `Fn(&str) -> Option<String>` implement this trait,
/// as does `HashMap<String, String>`.
///
/// # Example
///
/// ```
/// use msgbundle_core::MessageSource;
///
/// struct Shouting;
///
/// impl MessageSource for Shouting {
///     fn lookup(&self, key: &str) -> Option<String> {
///         key.starts_with("loud.").then(|| key[5..].to_uppercase())
///     }
/// }
///
/// assert_eq!(Shouting.lookup("loud.hello"), Some("HELLO".to_string()));
/// assert_eq!(Shouting.lookup("hello"), None);
/// ```
pub trait MessageSource: Send + Sync {
    /// Return the message for `key`, or `None` if this source has none.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Shared handle to a message source, as stored by builders and bundles.
pub type SharedSource = Arc<dyn MessageSource>;

impl<F> MessageSource for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn lookup(&self, key: &str) -> Option<String> {
        self(key)
    }
}

impl MessageSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_source() {
        let source = |key: &str| (key == "ping").then(|| "pong".to_string());

        assert_eq!(source.lookup("ping"), Some("pong".to_string()));
        assert_eq!(source.lookup("pong"), None);
    }

    #[test]
    fn test_hashmap_source() {
        let mut map = HashMap::new();
        map.insert("a".to_string(), "Apple".to_string());

        assert_eq!(map.lookup("a"), Some("Apple".to_string()));
        assert_eq!(map.lookup("b"), None);
    }

    #[test]
    fn test_shared_source_is_object_safe() {
        let source: SharedSource = Arc::new(|key: &str| Some(key.to_uppercase()));
        let other = Arc::clone(&source);

        assert_eq!(source.lookup("abc"), Some("ABC".to_string()));
        assert_eq!(other.lookup("x"), Some("X".to_string()));
    }
}
