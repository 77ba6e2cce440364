//! Node and edge recording for graph enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Identifier of a visited node.
///
/// Ids are allocated from one counter per recorder, starting at 0, in
/// visitation order. Two nodes with identical states still get distinct
/// ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a node stands for in the search tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// A choice taken from its parent state.
    Choice,
    /// A goal state leaf.
    Goal,
    /// An infeasible state leaf.
    Infeasible,
    /// A non-terminal state with no choices left.
    DeadEnd,
}

impl NodeKind {
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Self::Choice)
    }
}

/// A node allocated during graph enumeration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisitedNode {
    pub id: NodeId,
    pub label: String,
    pub kind: NodeKind,
    /// Children in the order their edges were recorded.
    pub children: Vec<NodeId>,
}

/// One entry of the ordered declaration stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphEvent {
    Node(NodeId),
    Edge { parent: NodeId, child: NodeId },
}

/// Records visited nodes and parent-to-child edges of one enumeration.
///
/// A recorder lives exactly as long as one top-level graph enumeration;
/// the enumerator creates a fresh one per call, so numbering always
/// starts at 0 and never resets between sibling branches.
///
/// # Example
///
/// ```rust
/// use exhaust::graph::{GraphRecorder, NodeKind};
///
/// let mut graph = GraphRecorder::new();
/// let root = graph.record_node("take 5".to_string(), NodeKind::Choice);
/// let leaf = graph.record_node("0 remaining".to_string(), NodeKind::Goal);
/// graph.record_edge(root, leaf);
///
/// assert_eq!(root.0, 0);
/// assert_eq!(leaf.0, 1);
/// assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(root, leaf)]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GraphRecorder {
    nodes: Vec<VisitedNode>,
    events: Vec<GraphEvent>,
}

impl GraphRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id for a node with the given label.
    pub fn record_node(&mut self, label: String, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        trace!(event = "graph_node", id = id.0, kind = ?kind, label = %label);
        self.nodes.push(VisitedNode {
            id,
            label,
            kind,
            children: Vec::new(),
        });
        self.events.push(GraphEvent::Node(id));
        id
    }

    /// Record an edge from `parent` to `child`.
    ///
    /// Every call is recorded, so a child reporting several paths gets one
    /// edge per path. Edges from an id that was never allocated are ignored.
    pub fn record_edge(&mut self, parent: NodeId, child: NodeId) {
        let Some(node) = self.nodes.get_mut(parent.0) else {
            return;
        };
        trace!(event = "graph_edge", parent = parent.0, child = child.0);
        node.children.push(child);
        self.events.push(GraphEvent::Edge { parent, child });
    }

    /// Nodes in id order.
    pub fn nodes(&self) -> &[VisitedNode] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&VisitedNode> {
        self.nodes.get(id.0)
    }

    /// Edges in the order they were recorded.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.events.iter().filter_map(|event| match event {
            GraphEvent::Edge { parent, child } => Some((*parent, *child)),
            GraphEvent::Node(_) => None,
        })
    }

    /// Node declarations and edges interleaved in recording order.
    pub fn events(&self) -> &[GraphEvent] {
        &self.events
    }

    /// Kind of the last node on `path`.
    pub fn leaf_kind(&self, path: &[NodeId]) -> Option<NodeKind> {
        path.last().and_then(|id| self.node(*id)).map(|node| node.kind)
    }

    /// Number of nodes allocated.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Result of a graph enumeration: the paths and the graph they index.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GraphEnumeration {
    /// Root-to-leaf node id paths in depth-first order.
    pub paths: Vec<Vec<NodeId>>,
    pub graph: GraphRecorder,
}

impl GraphEnumeration {
    /// Paths whose leaf is a goal state.
    pub fn goal_paths(&self) -> impl Iterator<Item = &Vec<NodeId>> + '_ {
        self.paths
            .iter()
            .filter(|path| self.graph.leaf_kind(path) == Some(NodeKind::Goal))
    }

    /// Labels along `path`, in order.
    pub fn labels<'s, 'p>(&'s self, path: &'p [NodeId]) -> impl Iterator<Item = &'s str> + 'p
    where
        's: 'p,
    {
        path.iter()
            .filter_map(|id| self.graph.node(*id))
            .map(|node| node.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_allocated_in_order() {
        let mut graph = GraphRecorder::new();
        let a = graph.record_node("a".into(), NodeKind::Choice);
        let b = graph.record_node("b".into(), NodeKind::Choice);
        let c = graph.record_node("c".into(), NodeKind::Goal);

        assert_eq!((a, b, c), (NodeId(0), NodeId(1), NodeId(2)));
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn identical_labels_get_distinct_ids() {
        let mut graph = GraphRecorder::new();
        let first = graph.record_node("0 remaining -".into(), NodeKind::Goal);
        let second = graph.record_node("0 remaining -".into(), NodeKind::Goal);

        assert_ne!(first, second);
    }

    #[test]
    fn edges_attach_children() {
        let mut graph = GraphRecorder::new();
        let parent = graph.record_node("p".into(), NodeKind::Choice);
        let left = graph.record_node("l".into(), NodeKind::Goal);
        let right = graph.record_node("r".into(), NodeKind::DeadEnd);
        graph.record_edge(parent, left);
        graph.record_edge(parent, right);

        assert_eq!(graph.node(parent).unwrap().children, vec![left, right]);
        assert_eq!(
            graph.edges().collect::<Vec<_>>(),
            vec![(parent, left), (parent, right)]
        );
    }

    #[test]
    fn repeated_edge_is_recorded_each_time() {
        let mut graph = GraphRecorder::new();
        let parent = graph.record_node("p".into(), NodeKind::Choice);
        let child = graph.record_node("c".into(), NodeKind::Choice);
        graph.record_edge(parent, child);
        graph.record_edge(parent, child);

        assert_eq!(graph.edges().count(), 2);
        assert_eq!(graph.node(parent).unwrap().children, vec![child, child]);
    }

    #[test]
    fn labels_outlive_a_temporary_path() {
        let mut graph = GraphRecorder::new();
        let a = graph.record_node("a".into(), NodeKind::Choice);
        let b = graph.record_node("b".into(), NodeKind::Goal);
        let run = GraphEnumeration {
            paths: vec![vec![a, b]],
            graph,
        };

        let labels: Vec<&str> = run.labels(&[NodeId(0), NodeId(1)]).collect();
        assert_eq!(labels, vec!["a", "b"]);
        assert_eq!(run.labels(&run.paths[0]).count(), 2);
    }

    #[test]
    fn edge_from_unknown_parent_is_ignored() {
        let mut graph = GraphRecorder::new();
        let child = graph.record_node("c".into(), NodeKind::Goal);
        graph.record_edge(NodeId(42), child);

        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn events_interleave_nodes_and_edges() {
        let mut graph = GraphRecorder::new();
        let parent = graph.record_node("p".into(), NodeKind::Choice);
        let child = graph.record_node("c".into(), NodeKind::Goal);
        graph.record_edge(parent, child);

        assert_eq!(
            graph.events(),
            &[
                GraphEvent::Node(parent),
                GraphEvent::Node(child),
                GraphEvent::Edge { parent, child },
            ]
        );
    }

    #[test]
    fn leaf_kind_reads_last_node() {
        let mut graph = GraphRecorder::new();
        let a = graph.record_node("a".into(), NodeKind::Choice);
        let b = graph.record_node("b".into(), NodeKind::Infeasible);

        assert_eq!(graph.leaf_kind(&[a, b]), Some(NodeKind::Infeasible));
        assert_eq!(graph.leaf_kind(&[]), None);
        assert!(NodeKind::Infeasible.is_leaf());
        assert!(!NodeKind::Choice.is_leaf());
    }

    #[test]
    fn node_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&NodeId(7)).unwrap(), "7");
    }
}
