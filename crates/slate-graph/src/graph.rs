//! Dependency tracking between named cells
//!
//! Nodes are opaque strings (case-sensitive, no normalization here).
//! An edge (dependee, dependent) means "dependent's value depends on
//! dependee". Both directions of the relation are indexed so that
//! "who do I feed?" and "who feeds me?" are equally cheap.

use ahash::{AHashMap, AHashSet};

/// Bidirectional dependency graph over string-named cells
///
/// The two indices are exact mirror images: B is in `dependents[A]`
/// exactly when A is in `dependees[B]`. Every mutation updates both.
///
/// Duplicate adds and missing removes are no-ops, not errors. Nodes come
/// into existence lazily on first edge insertion and are never deleted;
/// a node left with an empty set behaves the same as one never seen.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    /// Node → nodes whose values depend on it
    dependents: AHashMap<String, AHashSet<String>>,
    /// Node → nodes its value depends on
    dependees: AHashMap<String, AHashSet<String>>,
    /// Distinct edge count, maintained incrementally
    size: usize,
}

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of distinct edges
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the graph holds no edges
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Add an edge: `dependent` depends on `dependee`
    ///
    /// No-op if the edge is already present.
    pub fn add_dependency(&mut self, dependee: &str, dependent: &str) {
        let inserted = self
            .dependents
            .entry(dependee.to_string())
            .or_default()
            .insert(dependent.to_string());

        if inserted {
            self.dependees
                .entry(dependent.to_string())
                .or_default()
                .insert(dependee.to_string());
            self.size += 1;
        }
    }

    /// Remove the edge from `dependee` to `dependent`
    ///
    /// No-op if the edge is not present. The sets themselves stay in
    /// place even when emptied.
    pub fn remove_dependency(&mut self, dependee: &str, dependent: &str) {
        let removed = self
            .dependents
            .get_mut(dependee)
            .is_some_and(|set| set.remove(dependent));

        if removed {
            if let Some(set) = self.dependees.get_mut(dependent) {
                set.remove(dependee);
            }
            self.size -= 1;
        }
    }

    /// Whether any node depends on `node`
    pub fn has_dependents(&self, node: &str) -> bool {
        self.dependents.get(node).is_some_and(|set| !set.is_empty())
    }

    /// Whether `node` depends on any node
    pub fn has_dependees(&self, node: &str) -> bool {
        self.dependees.get(node).is_some_and(|set| !set.is_empty())
    }

    /// Nodes whose values depend on `node`
    ///
    /// Empty for a node with no dependents (including one never seen).
    pub fn dependents<'a>(&'a self, node: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.dependents
            .get(node)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Nodes that `node`'s value depends on
    pub fn dependees<'a>(&'a self, node: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.dependees
            .get(node)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Replace all of `node`'s dependents with `new_dependents`
    ///
    /// Equivalent to removing every edge (node, d) and then adding
    /// (node, n) for each n in `new_dependents`. The reverse index is
    /// updated edge-by-edge on both the removal and the insertion side.
    pub fn replace_dependents<I, S>(&mut self, node: &str, new_dependents: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let old: Vec<String> = self.dependents(node).map(str::to_string).collect();
        for dependent in &old {
            self.remove_dependency(node, dependent);
        }
        for dependent in new_dependents {
            self.add_dependency(node, dependent.as_ref());
        }
    }

    /// Replace all of `node`'s dependees with `new_dependees`
    ///
    /// Symmetric to [`replace_dependents`](Self::replace_dependents) on
    /// the incoming side: afterwards `node` depends on exactly
    /// `new_dependees`.
    pub fn replace_dependees<I, S>(&mut self, node: &str, new_dependees: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let old: Vec<String> = self.dependees(node).map(str::to_string).collect();
        for dependee in &old {
            self.remove_dependency(dependee, node);
        }
        for dependee in new_dependees {
            self.add_dependency(dependee.as_ref(), node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_dependency() {
        let mut graph = DependencyGraph::new();

        graph.add_dependency("A1", "B1");

        assert!(graph.dependents("A1").any(|n| n == "B1"));
        assert!(graph.dependees("B1").any(|n| n == "A1"));
        assert_eq!(graph.size(), 1);
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let mut graph = DependencyGraph::new();

        graph.add_dependency("A1", "B1");
        graph.add_dependency("A1", "B1");

        assert_eq!(graph.size(), 1);
        assert_eq!(graph.dependents("A1").count(), 1);
        assert_eq!(graph.dependees("B1").count(), 1);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut graph = DependencyGraph::new();

        graph.add_dependency("A1", "B1");
        graph.remove_dependency("A1", "C1");
        graph.remove_dependency("Z9", "B1");

        assert_eq!(graph.size(), 1);
        assert!(graph.has_dependents("A1"));
    }

    #[test]
    fn test_remove_keeps_empty_node() {
        let mut graph = DependencyGraph::new();

        graph.add_dependency("A1", "B1");
        graph.remove_dependency("A1", "B1");

        assert_eq!(graph.size(), 0);
        assert!(!graph.has_dependents("A1"));
        assert!(!graph.has_dependees("B1"));
        assert_eq!(graph.dependents("A1").count(), 0);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut graph = DependencyGraph::new();

        graph.add_dependency("a1", "B1");
        graph.add_dependency("A1", "B1");

        assert_eq!(graph.size(), 2);
        assert_eq!(graph.dependees("B1").count(), 2);
    }

    #[test]
    fn test_unknown_node_queries() {
        let graph = DependencyGraph::new();

        assert!(!graph.has_dependents("A1"));
        assert!(!graph.has_dependees("A1"));
        assert_eq!(graph.dependents("A1").count(), 0);
        assert_eq!(graph.dependees("A1").count(), 0);
        assert!(graph.is_empty());
    }

    #[test]
    fn test_replace_dependents_updates_reverse_index() {
        let mut graph = DependencyGraph::new();

        graph.add_dependency("A1", "B1");
        graph.add_dependency("A1", "C1");

        graph.replace_dependents("A1", ["C1", "D1"]);

        let mut now: Vec<&str> = graph.dependents("A1").collect();
        now.sort_unstable();
        assert_eq!(now, vec!["C1", "D1"]);

        // B1 must no longer see A1 upstream; D1 must.
        assert!(!graph.has_dependees("B1"));
        assert!(graph.dependees("D1").any(|n| n == "A1"));
        assert_eq!(graph.size(), 2);
    }

    #[test]
    fn test_replace_dependees_updates_forward_index() {
        let mut graph = DependencyGraph::new();

        graph.add_dependency("A1", "B1");
        graph.add_dependency("A2", "B1");

        graph.replace_dependees("B1", ["A2", "A3"]);

        let mut now: Vec<&str> = graph.dependees("B1").collect();
        now.sort_unstable();
        assert_eq!(now, vec!["A2", "A3"]);

        assert!(!graph.has_dependents("A1"));
        assert!(graph.dependents("A3").any(|n| n == "B1"));
        assert_eq!(graph.size(), 2);
    }

    #[test]
    fn test_replace_with_empty_set_clears_edges() {
        let mut graph = DependencyGraph::new();

        graph.add_dependency("A1", "B1");
        graph.add_dependency("A1", "C1");

        graph.replace_dependents("A1", Vec::<String>::new());

        assert!(!graph.has_dependents("A1"));
        assert_eq!(graph.size(), 0);
    }
}
