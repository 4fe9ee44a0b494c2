//! Stack item classification and ring mapping
//!
//! Source records carry only a name, an icon path, and the group they were
//! authored under. Mapping resolves each record to a category, a skill
//! level, a description, and one of the three orbit rings. The partition is
//! total: every item lands on exactly one ring.

use serde::{Deserialize, Serialize};

use folio_orbit::RingId;

/// Category of a stack entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Frontend,
    Backend,
    Database,
    DevOps,
    Tools,
    Design,
}

impl Category {
    /// Display order for category chips.
    pub const ORDER: [Category; 6] = [
        Category::Frontend,
        Category::Backend,
        Category::Database,
        Category::DevOps,
        Category::Tools,
        Category::Design,
    ];

    /// The orbit ring this category belongs to.
    ///
    /// Frontend/Backend form the core ring, Database/DevOps the
    /// infrastructure ring, everything else the outer support ring.
    pub fn ring(self) -> RingId {
        match self {
            Category::Frontend | Category::Backend => RingId::R1,
            Category::Database | Category::DevOps => RingId::R2,
            Category::Tools | Category::Design => RingId::R3,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
            Category::Database => "Database",
            Category::DevOps => "DevOps",
            Category::Tools => "Tools",
            Category::Design => "Design",
        }
    }
}

/// Skill level shown on the inspection panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Advanced,
    Proficient,
    Intermediate,
}

impl Default for Level {
    fn default() -> Self {
        Level::Proficient
    }
}

/// A raw stack record as authored in the catalog.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StackItem {
    pub name: String,
    pub icon: String,
    /// Authoring group, e.g. "frontend", "backend", "database", "tools".
    pub group: String,
    /// Optional explicit level; defaults to Proficient.
    #[serde(default)]
    pub level: Level,
    /// Optional one-line description for the inspection panel.
    #[serde(default)]
    pub description: String,
}

/// A fully resolved stack node, ready for orbit placement.
#[derive(Clone, Debug, PartialEq)]
pub struct StackNode {
    /// Slug id derived from the name, e.g. "node-js".
    pub id: String,
    pub name: String,
    pub icon: String,
    pub category: Category,
    pub ring: RingId,
    pub level: Level,
    pub description: String,
}

/// Names that always classify as DevOps regardless of authoring group.
const DEVOPS_NAMES: &[&str] = &["Docker", "AWS", "Oracle", "DigitalOcean"];

/// Names that always classify as Design regardless of authoring group.
const DESIGN_NAMES: &[&str] = &["Tailwind CSS", "Sass", "Bootstrap", "GSAP", "Framer Motion"];

const FALLBACK_DESCRIPTION: &str = "Production-ready tooling used across shipped products.";

/// Slugify a display name: lowercase, non-alphanumeric runs become `-`,
/// leading/trailing dashes trimmed.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Resolve the category for a record.
///
/// Explicit DevOps/Design name sets win over the authoring group.
pub fn resolve_category(group: &str, name: &str) -> Category {
    if DEVOPS_NAMES.contains(&name) {
        return Category::DevOps;
    }
    if DESIGN_NAMES.contains(&name) {
        return Category::Design;
    }
    match group {
        "frontend" => Category::Frontend,
        "backend" => Category::Backend,
        "database" => Category::Database,
        _ => Category::Tools,
    }
}

/// Map raw stack records to resolved nodes, preserving catalog order.
pub fn map_stack(items: &[StackItem]) -> Vec<StackNode> {
    items
        .iter()
        .map(|item| {
            let category = resolve_category(&item.group, &item.name);
            StackNode {
                id: slugify(&item.name),
                name: item.name.clone(),
                icon: item.icon.clone(),
                category,
                ring: category.ring(),
                level: item.level,
                description: if item.description.is_empty() {
                    FALLBACK_DESCRIPTION.to_string()
                } else {
                    item.description.clone()
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, group: &str) -> StackItem {
        StackItem {
            name: name.to_string(),
            icon: format!("logo/{}.png", slugify(name)),
            group: group.to_string(),
            level: Level::default(),
            description: String::new(),
        }
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Node.js"), "node-js");
        assert_eq!(slugify("Tailwind CSS"), "tailwind-css");
        assert_eq!(slugify("AWS"), "aws");
        assert_eq!(slugify("...Rust!"), "rust");
    }

    #[test]
    fn test_devops_names_override_group() {
        assert_eq!(resolve_category("tools", "Docker"), Category::DevOps);
        assert_eq!(resolve_category("backend", "AWS"), Category::DevOps);
    }

    #[test]
    fn test_design_names_override_group() {
        assert_eq!(resolve_category("frontend", "Tailwind CSS"), Category::Design);
        assert_eq!(resolve_category("frontend", "GSAP"), Category::Design);
    }

    #[test]
    fn test_group_fallback() {
        assert_eq!(resolve_category("frontend", "React"), Category::Frontend);
        assert_eq!(resolve_category("backend", "Node.js"), Category::Backend);
        assert_eq!(resolve_category("database", "PostgreSQL"), Category::Database);
        assert_eq!(resolve_category("misc", "Git"), Category::Tools);
    }

    #[test]
    fn test_category_ring_partition() {
        assert_eq!(Category::Frontend.ring(), RingId::R1);
        assert_eq!(Category::Backend.ring(), RingId::R1);
        assert_eq!(Category::Database.ring(), RingId::R2);
        assert_eq!(Category::DevOps.ring(), RingId::R2);
        assert_eq!(Category::Tools.ring(), RingId::R3);
        assert_eq!(Category::Design.ring(), RingId::R3);
    }

    #[test]
    fn test_map_stack_resolves_everything() {
        let nodes = map_stack(&[
            item("React", "frontend"),
            item("Node.js", "backend"),
            item("Docker", "tools"),
        ]);

        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].ring, RingId::R1);
        assert_eq!(nodes[1].id, "node-js");
        assert_eq!(nodes[2].category, Category::DevOps);
        assert_eq!(nodes[2].ring, RingId::R2);
        // Empty description falls back
        assert_eq!(nodes[0].description, FALLBACK_DESCRIPTION);
    }

    #[test]
    fn test_every_node_lands_on_exactly_one_ring() {
        let nodes = map_stack(&[
            item("React", "frontend"),
            item("PostgreSQL", "database"),
            item("Git", "tools"),
            item("Sass", "frontend"),
        ]);
        for node in &nodes {
            assert_eq!(node.ring, node.category.ring());
        }
    }
}
