//! Dependency graph for component templates
//!
//! Templates may declare other templates they depend on. The graph keeps
//! those edges acyclic (edges that would close a cycle are rejected and
//! recorded) and resolves a request into its transitive closure.
//! Uses petgraph for graph operations.

use petgraph::algo::has_path_connecting;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

use super::component::ComponentName;

#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("Adding dependency would create a cycle: {0} -> {1}")]
    CycleDetected(ComponentName, ComponentName),

    #[error("Component not found: {0}")]
    ComponentNotFound(ComponentName),

    #[error("Self-dependency not allowed: {0}")]
    SelfDependency(ComponentName),
}

/// A declared dependency edge that could not be added to the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEdge {
    /// The component declaring the dependency
    pub component: ComponentName,
    /// The dependency it declares
    pub dependency: ComponentName,
}

/// Result of resolving a set of requested components
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Components to install, dependencies before dependents
    pub order: Vec<ComponentName>,
    /// Requested names that are not in the graph
    pub unknown: Vec<ComponentName>,
    /// Declared dependencies that point at components not in the graph
    pub missing: Vec<RejectedEdge>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

/// A dependency graph over component templates
#[derive(Debug, Default)]
pub struct DependencyGraph {
    /// Edges run from a dependency to its dependent
    graph: DiGraph<ComponentName, ()>,

    /// Map from component name to node index
    node_map: HashMap<ComponentName, NodeIndex>,

    /// Dependencies in declaration order, as written in the catalog
    declared: HashMap<ComponentName, Vec<ComponentName>>,

    /// Edges naming components that do not exist
    unresolved: Vec<RejectedEdge>,

    /// Edges rejected because they would close a cycle
    cycles: Vec<RejectedEdge>,
}

impl DependencyGraph {
    /// Creates an empty dependency graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `(component, declared dependencies)` pairs
    ///
    /// Never fails: unknown targets and cycle-closing edges are recorded
    /// and available through [`unresolved`](Self::unresolved) and
    /// [`cycles`](Self::cycles).
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a ComponentName, &'a [ComponentName])>,
    {
        let mut graph = Self::new();

        // First pass: add all nodes
        let entries: Vec<_> = entries.into_iter().collect();
        for (name, deps) in &entries {
            graph.add_component((*name).clone());
            graph.declared.insert((*name).clone(), deps.to_vec());
        }

        // Second pass: add all edges
        for (name, deps) in &entries {
            for dep in deps.iter() {
                match graph.add_dependency(name, dep) {
                    Ok(()) => {}
                    Err(GraphError::ComponentNotFound(_)) => graph.unresolved.push(RejectedEdge {
                        component: (*name).clone(),
                        dependency: dep.clone(),
                    }),
                    Err(GraphError::CycleDetected(_, _)) | Err(GraphError::SelfDependency(_)) => {
                        graph.cycles.push(RejectedEdge {
                            component: (*name).clone(),
                            dependency: dep.clone(),
                        })
                    }
                }
            }
        }

        graph
    }

    /// Adds a component to the graph
    pub fn add_component(&mut self, name: ComponentName) {
        if !self.node_map.contains_key(&name) {
            let idx = self.graph.add_node(name.clone());
            self.node_map.insert(name, idx);
        }
    }

    /// Adds a dependency edge: `component` depends on `depends_on`
    pub fn add_dependency(
        &mut self,
        component: &ComponentName,
        depends_on: &ComponentName,
    ) -> Result<(), GraphError> {
        if component == depends_on {
            return Err(GraphError::SelfDependency(component.clone()));
        }

        let component_idx = *self
            .node_map
            .get(component)
            .ok_or_else(|| GraphError::ComponentNotFound(component.clone()))?;

        let dep_idx = *self
            .node_map
            .get(depends_on)
            .ok_or_else(|| GraphError::ComponentNotFound(depends_on.clone()))?;

        if self.graph.find_edge(dep_idx, component_idx).is_some() {
            return Ok(());
        }

        // depends_on -> component closes a cycle if component already reaches depends_on
        if has_path_connecting(&self.graph, component_idx, dep_idx, None) {
            return Err(GraphError::CycleDetected(
                component.clone(),
                depends_on.clone(),
            ));
        }

        self.graph.add_edge(dep_idx, component_idx, ());
        Ok(())
    }

    /// Returns the direct dependencies of a component that exist in the graph
    pub fn dependencies(&self, name: &ComponentName) -> Vec<ComponentName> {
        self.declared
            .get(name)
            .map(|deps| deps.iter().filter(|d| self.contains(d)).cloned().collect())
            .unwrap_or_default()
    }

    /// Returns the direct dependents of a component (components that depend on it)
    pub fn dependents(&self, name: &ComponentName) -> Vec<ComponentName> {
        let idx = match self.node_map.get(name) {
            Some(idx) => *idx,
            None => return vec![],
        };

        let mut dependents: Vec<_> = self
            .graph
            .neighbors_directed(idx, petgraph::Direction::Outgoing)
            .filter_map(|idx| self.graph.node_weight(idx).cloned())
            .collect();
        dependents.sort();
        dependents
    }

    /// Resolves requested components into their transitive closure
    ///
    /// Each component appears once, after all of its dependencies. Walks
    /// the declared dependency lists with in-progress tracking, so cyclic
    /// declarations terminate. Dependencies that are not in the graph are
    /// skipped and reported in [`Resolution::missing`].
    pub fn resolve(&self, requested: &[ComponentName]) -> Resolution {
        let mut resolution = Resolution::default();
        let mut state: HashMap<ComponentName, Visit> = HashMap::new();
        let mut seen_unknown = HashSet::new();

        for name in requested {
            if !self.contains(name) {
                if seen_unknown.insert(name.clone()) {
                    resolution.unknown.push(name.clone());
                }
                continue;
            }
            self.visit(name, &mut state, &mut resolution);
        }

        resolution
    }

    fn visit(
        &self,
        name: &ComponentName,
        state: &mut HashMap<ComponentName, Visit>,
        resolution: &mut Resolution,
    ) {
        if state.contains_key(name) {
            return;
        }
        state.insert(name.clone(), Visit::InProgress);

        for dep in self.declared.get(name).into_iter().flatten() {
            if !self.contains(dep) {
                let edge = RejectedEdge {
                    component: name.clone(),
                    dependency: dep.clone(),
                };
                if !resolution.missing.contains(&edge) {
                    resolution.missing.push(edge);
                }
                continue;
            }
            self.visit(dep, state, resolution);
        }

        state.insert(name.clone(), Visit::Done);
        resolution.order.push(name.clone());
    }

    /// Returns true if the graph contains the component
    pub fn contains(&self, name: &ComponentName) -> bool {
        self.node_map.contains_key(name)
    }

    /// Returns the number of components in the graph
    pub fn len(&self) -> usize {
        self.node_map.len()
    }

    /// Returns true if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.node_map.is_empty()
    }

    /// Declared edges whose target is not a known component
    pub fn unresolved(&self) -> &[RejectedEdge] {
        &self.unresolved
    }

    /// Declared edges that were rejected because they close a cycle
    pub fn cycles(&self) -> &[RejectedEdge] {
        &self.cycles
    }
}
