//! Reads definitions, registry entries and properties from disk

use anyhow::{ensure, Context, Result};
use inbound_api::names::INBOUND_ENDPOINT;
use inbound_api::Element;
use inbound_core::{InMemoryRegistry, RegistryEntry};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const DEFINITION_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// Load registry entries; an unset file yields an empty registry
pub fn load_registry(path: Option<&Path>) -> Result<InMemoryRegistry> {
    let Some(path) = path else {
        return Ok(InMemoryRegistry::new());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read registry file {}", path.display()))?;
    let entries: HashMap<String, RegistryEntry> = serde_yaml::from_str(&text)
        .with_context(|| format!("failed to parse registry file {}", path.display()))?;

    info!("Loaded {} registry entries from {}", entries.len(), path.display());
    Ok(InMemoryRegistry::from(entries))
}

/// Load the properties backing $FILE: placeholders
pub fn load_properties(path: Option<&Path>) -> Result<HashMap<String, String>> {
    let Some(path) = path else {
        return Ok(HashMap::new());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read properties file {}", path.display()))?;
    let properties: HashMap<String, String> = serde_yaml::from_str(&text)
        .with_context(|| format!("failed to parse properties file {}", path.display()))?;

    info!("Loaded {} properties from {}", properties.len(), path.display());
    Ok(properties)
}

/// Definition files in a directory, sorted by path
pub fn discover_definitions(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read endpoints directory {}", dir.display()))?;

    for entry in entries {
        let path = entry?.path();
        let is_definition = path.is_file()
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| DEFINITION_EXTENSIONS.contains(&ext))
                .unwrap_or(false);
        if is_definition {
            files.push(path);
        } else {
            debug!("Skipping {}", path.display());
        }
    }

    files.sort();
    Ok(files)
}

/// Parse one definition file into an element tree rooted at `inboundEndpoint`
pub fn load_definition(path: &Path) -> Result<Element> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read definition {}", path.display()))?;

    let element: Element = if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse definition {}", path.display()))?
    } else {
        serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse definition {}", path.display()))?
    };
    ensure!(
        element.name == INBOUND_ENDPOINT,
        "definition {} has root element {}, expected {}",
        path.display(),
        element.name,
        INBOUND_ENDPOINT
    );
    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use inbound_api::ConfigElement;
    use inbound_core::Registry;

    #[test]
    fn test_load_registry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.yaml");
        std::fs::write(&path, "conf:/jms/url:\n  type: text\n  value: tcp://mq:61616\n").unwrap();

        let registry = load_registry(Some(&path)).unwrap();
        assert_eq!(
            registry.lookup("conf:/jms/url"),
            Some(RegistryEntry::Text("tcp://mq:61616".to_string()))
        );
        assert!(load_registry(None).unwrap().is_empty());
    }

    #[test]
    fn test_load_properties() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file.properties.yaml");
        std::fs::write(&path, "jms.user: admin\n").unwrap();

        let properties = load_properties(Some(&path)).unwrap();
        assert_eq!(properties.get("jms.user").map(String::as_str), Some("admin"));
    }

    #[test]
    fn test_discover_definitions() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.yaml", "a.json", "c.yml", "notes.txt"] {
            std::fs::write(dir.path().join(name), "name: inboundEndpoint\n").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.yaml")).unwrap();

        let files = discover_definitions(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, vec!["a.json", "b.yaml", "c.yml"]);
    }

    #[test]
    fn test_load_definition_yaml_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = dir.path().join("ep.yaml");
        std::fs::write(&yaml, "name: inboundEndpoint\nattributes:\n  name: ep1\n").unwrap();
        let json = dir.path().join("ep.json");
        std::fs::write(&json, r#"{"name":"inboundEndpoint","attributes":{"name":"ep2"}}"#).unwrap();

        assert_eq!(load_definition(&yaml).unwrap().attribute("name"), Some("ep1"));
        assert_eq!(load_definition(&json).unwrap().attribute("name"), Some("ep2"));
    }

    #[test]
    fn test_load_definition_wrong_root() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proxy.yaml");
        std::fs::write(&path, "name: proxy\nattributes:\n  name: ep1\n").unwrap();
        let err = load_definition(&path).unwrap_err();
        assert!(err
            .to_string()
            .contains("has root element proxy, expected inboundEndpoint"));
    }

    #[test]
    fn test_load_definition_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "attributes: [").unwrap();
        let err = load_definition(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse definition"));
    }
}
