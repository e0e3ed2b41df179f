//! # slate-graph
//!
//! Cell dependency tracking for the slate spreadsheet library.
//!
//! A [`DependencyGraph`] records which cells' formulas reference which other
//! cells, as a mutable many-to-many relation between string names. The
//! recalculation engine feeds each formula's variables in as edges and asks
//! the graph which cells are affected when a value changes.
//!
//! ## Example
//!
//! ```rust
//! use slate_graph::DependencyGraph;
//!
//! let mut graph = DependencyGraph::new();
//!
//! // B1 = A1 + A2: B1 depends on A1 and A2
//! graph.add_dependency("A1", "B1");
//! graph.add_dependency("A2", "B1");
//!
//! assert!(graph.has_dependents("A1"));
//! assert_eq!(graph.size(), 2);
//!
//! let affected: Vec<&str> = graph.dependents("A1").collect();
//! assert_eq!(affected, vec!["B1"]);
//! ```

pub mod graph;

pub use graph::DependencyGraph;
