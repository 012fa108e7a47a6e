//! Axia DOM - Document tree provider
//!
//! Arena-based element tree consumed by the accessibility layer.
//!
//! Features:
//! - Element nodes with attributes, classes, and native widget flags
//! - Layout geometry (layout box, client rects)
//! - Document-wide id lookup and text extraction
//! - Generic element constructor with class/dataset/text options

mod builder;
mod geometry;
mod node;
mod tree;

pub use builder::ElementInit;
pub use geometry::Rect;
pub use node::{Attribute, ElementData, Node, NodeData};
pub use tree::DomTree;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Document root node ID
    pub const ROOT: NodeId = NodeId(0);
}
