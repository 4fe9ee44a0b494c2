//! Content catalog loading
//!
//! The catalog is a single RON file holding the stack records, project
//! records, and experience entries. It is read once at startup; there is no
//! save path and no mutation after load.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::registry::StackRegistry;
use crate::stack::{map_stack, StackItem};

/// A portfolio project record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub year: u16,
    /// Technology names, matching stack record names where applicable.
    pub tech: Vec<String>,
    pub description: String,
    /// External links (live site, repository).
    #[serde(default)]
    pub links: Vec<String>,
}

/// A work experience entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub summary: String,
}

/// The full content catalog.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub stack: Vec<StackItem>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
}

impl Catalog {
    /// Load and validate a catalog from a RON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog: Catalog = ron::from_str(&text).map_err(|source| CatalogError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        catalog.validate()?;

        log::info!(
            "Loaded catalog '{}': {} stack items, {} projects, {} experience entries",
            path.display(),
            catalog.stack.len(),
            catalog.projects.len(),
            catalog.experience.len()
        );
        Ok(catalog)
    }

    /// Parse a catalog from an in-memory RON string.
    pub fn from_ron(text: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = ron::from_str(text).map_err(|source| CatalogError::Parse {
            path: "<inline>".to_string(),
            source,
        })?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Build the stack registry from this catalog's records.
    pub fn build_registry(&self) -> StackRegistry {
        StackRegistry::new(map_stack(&self.stack))
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.stack.is_empty() {
            return Err(CatalogError::EmptyStack);
        }
        Ok(())
    }
}

/// Failures while loading the content catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// The catalog file could not be read.
    Io { path: String, source: std::io::Error },
    /// The catalog file is not valid RON.
    Parse { path: String, source: ron::error::SpannedError },
    /// The catalog holds no stack records; the orbit would be empty.
    EmptyStack,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io { path, source } => {
                write!(f, "failed to read catalog '{}': {}", path, source)
            }
            CatalogError::Parse { path, source } => {
                write!(f, "failed to parse catalog '{}': {}", path, source)
            }
            CatalogError::EmptyStack => write!(f, "catalog contains no stack records"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io { source, .. } => Some(source),
            CatalogError::Parse { source, .. } => Some(source),
            CatalogError::EmptyStack => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"(
        stack: [
            (name: "React", icon: "logo/react.png", group: "frontend"),
            (name: "Node.js", icon: "logo/node.png", group: "backend", level: Advanced,
             description: "High-throughput backend services and API orchestration."),
            (name: "Docker", icon: "logo/docker.png", group: "tools"),
        ],
        projects: [
            (slug: "mobipay", title: "Mobipay", year: 2024,
             tech: ["React", "Node.js"], description: "Payments platform."),
        ],
        experience: [
            (company: "Acme", role: "Engineer", period: "2022 - 2024", summary: "Shipped things."),
        ],
    )"#;

    #[test]
    fn test_parse_sample_catalog() {
        let catalog = Catalog::from_ron(SAMPLE).unwrap();
        assert_eq!(catalog.stack.len(), 3);
        assert_eq!(catalog.projects.len(), 1);
        assert_eq!(catalog.experience.len(), 1);
        assert_eq!(catalog.projects[0].year, 2024);
    }

    #[test]
    fn test_registry_from_catalog() {
        let catalog = Catalog::from_ron(SAMPLE).unwrap();
        let registry = catalog.build_registry();
        // React + Node.js inner ring, Docker (DevOps name) middle ring.
        assert_eq!(registry.ring_lens(), [2, 1, 0]);
        assert_eq!(
            registry.find_by_id("node-js").unwrap().1.description,
            "High-throughput backend services and API orchestration."
        );
    }

    #[test]
    fn test_empty_stack_rejected() {
        let err = Catalog::from_ron("(stack: [])").unwrap_err();
        assert!(matches!(err, CatalogError::EmptyStack));
    }

    #[test]
    fn test_missing_file() {
        let err = Catalog::load("no/such/catalog.ron").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_malformed_ron() {
        let err = Catalog::from_ron("(stack: [oops").unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }
}
