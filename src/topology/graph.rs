// src/topology/graph.rs

use super::Topology;
use crate::core::{NodeId, WalkError};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;
use std::fmt;

/// A directed graph with an explicit node set and, per node, its out-edges.
///
/// Node order is first-insertion order and is the order every state and
/// distribution over this graph follows. Repeated edges collapse into one.
/// Backed by a `petgraph` `DiGraph` whose node weights are the `NodeId`s.
#[derive(Debug, Clone)]
pub struct DirectedGraph {
    graph: DiGraph<NodeId, ()>,
    /// Maps node IDs to their dense index (0..N-1), which equals the petgraph index.
    indices: HashMap<NodeId, NodeIndex>,
    /// Node IDs in insertion order.
    nodes: Vec<NodeId>,
    /// Successor indices per node, in edge insertion order.
    successors: Vec<Vec<usize>>,
}

impl DirectedGraph {
    /// Builds a graph from an edge list. Nodes appear in the order they are first mentioned.
    ///
    /// # Returns
    /// * `Err(WalkError::InvalidTopology)` if the edge list is empty.
    pub fn from_edges<I, N>(edges: I) -> Result<Self, WalkError>
    where
        I: IntoIterator<Item = (N, N)>,
        N: Into<NodeId>,
    {
        GraphBuilder::new().add_edges(edges).build()
    }

    /// Node IDs in canonical order.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        self.indices.contains_key(&node)
    }

    /// Dense index of `node` within [`node_ids`](Self::node_ids).
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.indices.get(&node).map(|ix| ix.index())
    }

    /// Successors of `node`, in the order their edges were added.
    pub fn successors(&self, node: NodeId) -> Result<Vec<NodeId>, WalkError> {
        let index = self.index_of(node).ok_or_else(|| WalkError::KeyNotFound {
            key: node.to_string(),
        })?;
        Ok(self.successors[index].iter().map(|&s| self.nodes[s]).collect())
    }

    /// Number of out-edges of `node`.
    pub fn out_degree(&self, node: NodeId) -> Result<usize, WalkError> {
        let index = self.index_of(node).ok_or_else(|| WalkError::KeyNotFound {
            key: node.to_string(),
        })?;
        Ok(self.successors[index].len())
    }

    /// Successor indices of the node at dense index `index`.
    pub(crate) fn successor_indices(&self, index: usize) -> &[usize] {
        &self.successors[index]
    }

    /// Nodes without out-edges.
    pub fn dangling_nodes(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .zip(self.successors.iter())
            .filter(|(_, succ)| succ.is_empty())
            .map(|(node, _)| *node)
            .collect()
    }

    /// The underlying petgraph graph, for callers who want its algorithms.
    pub fn as_petgraph(&self) -> &DiGraph<NodeId, ()> {
        &self.graph
    }
}

impl Topology for DirectedGraph {
    type Node = NodeId;

    fn nodes(&self) -> Vec<NodeId> {
        self.nodes.clone()
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl fmt::Display for DirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DirectedGraph[{} nodes, {} edges]", self.nodes.len(), self.edge_count())?;
        for (node, succ) in self.nodes.iter().zip(self.successors.iter()) {
            write!(f, "  {} ->", node)?;
            for s in succ {
                write!(f, " {}", self.nodes[*s])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Incrementally assembles a [`DirectedGraph`].
///
/// ```
/// # use quantum_walk::{GraphBuilder, NodeId, WalkError};
/// let graph = GraphBuilder::new()
///     .add_edge(0u64, 1)
///     .add_edge(1u64, 2)
///     .add_node(7u64) // isolated node
///     .build()?;
/// assert_eq!(graph.node_ids(), &[NodeId(0), NodeId(1), NodeId(2), NodeId(7)]);
/// # Ok::<(), WalkError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    nodes: Vec<NodeId>,
    edges: Vec<(NodeId, NodeId)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node. Adding a node twice keeps its first position.
    pub fn add_node<N: Into<NodeId>>(mut self, node: N) -> Self {
        self.nodes.push(node.into());
        self
    }

    /// Adds the edge `from -> to`, registering both endpoints.
    pub fn add_edge<N: Into<NodeId>>(mut self, from: N, to: N) -> Self {
        let (from, to) = (from.into(), to.into());
        self.nodes.push(from);
        self.nodes.push(to);
        self.edges.push((from, to));
        self
    }

    /// Adds every edge of an iterator.
    pub fn add_edges<I, N>(self, edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
        N: Into<NodeId>,
    {
        edges.into_iter().fold(self, |builder, (from, to)| builder.add_edge(from, to))
    }

    /// Finalizes the graph.
    ///
    /// # Returns
    /// * `Err(WalkError::InvalidTopology)` if no node was added.
    pub fn build(self) -> Result<DirectedGraph, WalkError> {
        let mut graph = DiGraph::new();
        let mut indices = HashMap::new();
        let mut nodes = Vec::new();
        for node in self.nodes {
            if !indices.contains_key(&node) {
                indices.insert(node, graph.add_node(node));
                nodes.push(node);
            }
        }
        if nodes.is_empty() {
            return Err(WalkError::InvalidTopology {
                message: "A directed graph needs at least one node".to_string(),
            });
        }

        for (from, to) in self.edges {
            // Both endpoints were registered by add_edge.
            let (a, b) = (indices[&from], indices[&to]);
            graph.update_edge(a, b, ());
        }

        let successors: Vec<Vec<usize>> = graph
            .node_indices()
            .map(|ix| {
                let mut out: Vec<_> = graph.edges(ix).map(|e| (e.id(), e.target().index())).collect();
                out.sort_by_key(|(id, _)| *id);
                out.into_iter().map(|(_, target)| target).collect()
            })
            .collect();

        log::debug!("built directed graph: {} nodes, {} edges", nodes.len(), graph.edge_count());
        Ok(DirectedGraph { graph, indices, nodes, successors })
    }
}
