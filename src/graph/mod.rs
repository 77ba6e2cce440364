//! Search-tree recording for visualisation.
//!
//! Graph enumeration numbers every node the enumerator visits from a
//! single counter and records parent-to-child edges once each child has
//! been explored. The result can be rendered as a dot document.

mod recorder;
mod render;

pub use recorder::{GraphEnumeration, GraphEvent, GraphRecorder, NodeId, NodeKind, VisitedNode};
