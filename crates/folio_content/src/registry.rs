//! Slotmap-backed registry of resolved stack nodes
//!
//! The registry owns every [`StackNode`] and keeps per-ring key lists in
//! catalog order. Ring lists index into the orbit simulation: slot `i` of a
//! ring list corresponds to orbit slot `i` on that ring.

use slotmap::{new_key_type, SlotMap};

use folio_orbit::RingId;

use crate::stack::{Category, StackNode};

new_key_type! {
    /// Generational key to a stack node in the registry.
    pub struct NodeKey;
}

/// Container for all resolved stack nodes.
pub struct StackRegistry {
    nodes: SlotMap<NodeKey, StackNode>,
    rings: [Vec<NodeKey>; 3],
}

impl StackRegistry {
    /// Build the registry from resolved nodes, partitioning by ring.
    pub fn new(nodes: Vec<StackNode>) -> Self {
        let mut map = SlotMap::with_capacity_and_key(nodes.len());
        let mut rings: [Vec<NodeKey>; 3] = Default::default();

        for node in nodes {
            let ring = node.ring;
            let key = map.insert(node);
            rings[ring.index()].push(key);
        }

        Self { nodes: map, rings }
    }

    /// Get a node by key.
    pub fn get(&self, key: NodeKey) -> Option<&StackNode> {
        self.nodes.get(key)
    }

    /// Keys on one ring, in slot order.
    pub fn ring(&self, ring: RingId) -> &[NodeKey] {
        &self.rings[ring.index()]
    }

    /// Node occupying a given orbit slot.
    pub fn node_at(&self, ring: RingId, slot: usize) -> Option<&StackNode> {
        self.rings[ring.index()]
            .get(slot)
            .and_then(|key| self.nodes.get(*key))
    }

    /// Occupancy of each ring, inner to outer.
    pub fn ring_lens(&self) -> [usize; 3] {
        [
            self.rings[0].len(),
            self.rings[1].len(),
            self.rings[2].len(),
        ]
    }

    /// Total number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the registry holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Find a node by its slug id.
    pub fn find_by_id(&self, id: &str) -> Option<(NodeKey, &StackNode)> {
        self.nodes.iter().find(|(_, node)| node.id == id)
    }

    /// Count nodes per category, in display order.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ORDER
            .iter()
            .map(|cat| {
                let count = self.nodes.values().filter(|n| n.category == *cat).count();
                (*cat, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeKey, &StackNode)> {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::{map_stack, Level, StackItem};

    fn registry() -> StackRegistry {
        let items: Vec<StackItem> = [
            ("React", "frontend"),
            ("TypeScript", "frontend"),
            ("Node.js", "backend"),
            ("PostgreSQL", "database"),
            ("Docker", "tools"),
            ("Git", "tools"),
        ]
        .iter()
        .map(|(name, group)| StackItem {
            name: name.to_string(),
            icon: String::new(),
            group: group.to_string(),
            level: Level::default(),
            description: String::new(),
        })
        .collect();
        StackRegistry::new(map_stack(&items))
    }

    #[test]
    fn test_ring_partition() {
        let reg = registry();
        // React, TypeScript, Node.js on ring 1; PostgreSQL + Docker on
        // ring 2; Git on ring 3.
        assert_eq!(reg.ring_lens(), [3, 2, 1]);
        assert_eq!(reg.len(), 6);
    }

    #[test]
    fn test_slot_order_matches_catalog_order() {
        let reg = registry();
        assert_eq!(reg.node_at(RingId::R1, 0).unwrap().name, "React");
        assert_eq!(reg.node_at(RingId::R1, 2).unwrap().name, "Node.js");
        assert_eq!(reg.node_at(RingId::R3, 0).unwrap().name, "Git");
        assert!(reg.node_at(RingId::R3, 1).is_none());
    }

    #[test]
    fn test_find_by_id() {
        let reg = registry();
        let (key, node) = reg.find_by_id("node-js").unwrap();
        assert_eq!(node.name, "Node.js");
        assert_eq!(reg.get(key).unwrap().name, "Node.js");
        assert!(reg.find_by_id("elixir").is_none());
    }

    #[test]
    fn test_category_counts_skip_empty() {
        let reg = registry();
        let counts = reg.category_counts();
        assert!(counts.iter().any(|(c, n)| *c == Category::Frontend && *n == 2));
        assert!(counts.iter().all(|(c, _)| *c != Category::Design));
    }

    #[test]
    fn test_empty_registry() {
        let reg = StackRegistry::new(Vec::new());
        assert!(reg.is_empty());
        assert_eq!(reg.ring_lens(), [0, 0, 0]);
    }
}
