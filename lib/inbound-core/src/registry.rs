//! Configuration registry consulted for keyed endpoint parameters

use inbound_api::Element;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// A registry value together with its content type
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum RegistryEntry {
    /// Plain text resource
    Text(String),
    /// Structured markup resource
    Element(Element),
    /// Opaque binary resource
    Binary(Vec<u8>),
}

impl RegistryEntry {
    /// Text content, `None` for every other content type
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RegistryEntry::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Content type name used in diagnostics
    pub fn content_type(&self) -> &'static str {
        match self {
            RegistryEntry::Text(_) => "text",
            RegistryEntry::Element(_) => "element",
            RegistryEntry::Binary(_) => "binary",
        }
    }
}

/// Key-value store that keyed parameters are resolved against.
///
/// Implementations are shared by concurrent assemblies.
pub trait Registry: Send + Sync {
    /// Look up an entry, `None` when the key is unknown
    fn lookup(&self, key: &str) -> Option<RegistryEntry>;
}

/// InMemoryRegistry holds entries loaded at start-up and counts lookups per key
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    entries: HashMap<String, RegistryEntry>,
    lookups: Mutex<HashMap<String, usize>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace an entry
    pub fn insert(&mut self, key: impl Into<String>, entry: RegistryEntry) {
        let key = key.into();
        debug!("Registered registry entry: {} ({})", key, entry.content_type());
        self.entries.insert(key, entry);
    }

    /// Register a text entry
    pub fn insert_text(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.insert(key, RegistryEntry::Text(text.into()));
    }

    /// Number of lookups made for a key so far
    pub fn lookup_count(&self, key: &str) -> usize {
        self.lookups
            .lock()
            .map(|counts| counts.get(key).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    /// Get count of registered entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<HashMap<String, RegistryEntry>> for InMemoryRegistry {
    fn from(entries: HashMap<String, RegistryEntry>) -> Self {
        Self {
            entries,
            lookups: Mutex::new(HashMap::new()),
        }
    }
}

impl Registry for InMemoryRegistry {
    fn lookup(&self, key: &str) -> Option<RegistryEntry> {
        if let Ok(mut counts) = self.lookups.lock() {
            *counts.entry(key.to_string()).or_insert(0) += 1;
        }
        self.entries.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_and_count() {
        let mut registry = InMemoryRegistry::new();
        registry.insert_text("conf:/endpoint/port", "8290");

        assert_eq!(
            registry.lookup("conf:/endpoint/port"),
            Some(RegistryEntry::Text("8290".to_string()))
        );
        assert_eq!(registry.lookup("conf:/missing"), None);
        assert_eq!(registry.lookup_count("conf:/endpoint/port"), 1);
        assert_eq!(registry.lookup_count("conf:/missing"), 1);
        assert_eq!(registry.lookup_count("never"), 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_entry_content_type() {
        assert_eq!(RegistryEntry::Text("a".to_string()).as_text(), Some("a"));
        assert_eq!(RegistryEntry::Binary(vec![1, 2]).as_text(), None);
        assert_eq!(
            RegistryEntry::Element(Element::new("policy")).content_type(),
            "element"
        );
    }

    #[test]
    fn test_entries_from_yaml() {
        let yaml = r#"
conf:/port:
  type: text
  value: "8290"
conf:/policy:
  type: element
  value:
    name: policy
"#;
        let entries: HashMap<String, RegistryEntry> = serde_yaml::from_str(yaml).unwrap();
        let registry = InMemoryRegistry::from(entries);
        assert_eq!(registry.lookup("conf:/port").unwrap().as_text(), Some("8290"));
        assert_eq!(
            registry.lookup("conf:/policy"),
            Some(RegistryEntry::Element(Element::new("policy")))
        );
    }
}
