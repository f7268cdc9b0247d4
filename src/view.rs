//! Read-only traversal of an [`RTree`]'s node structure.
//!
//! Renderers draw each node's bounding box per level and the stored
//! rectangles in the leaves; none of these views can mutate the tree.

use std::slice;

use crate::node::{Children, NodeId};
use crate::{Envelope, RTree, Rectangle};

/// A borrowed view of one node.
#[derive(Copy, Clone, Debug)]
pub struct NodeRef<'a> {
    tree: &'a RTree,
    id: NodeId,
}

/// The entries of a node: stored rectangles in a leaf, child nodes otherwise.
#[derive(Clone, Debug)]
pub enum NodeChildren<'a> {
    Rectangles(&'a [Rectangle]),
    Nodes(ChildNodes<'a>),
}

/// Iterator over the child nodes of an internal node.
#[derive(Clone, Debug)]
pub struct ChildNodes<'a> {
    tree: &'a RTree,
    ids: slice::Iter<'a, NodeId>,
}

impl<'a> Iterator for ChildNodes<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.ids.next().map(|&id| NodeRef { tree, id })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl ExactSizeIterator for ChildNodes<'_> {}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn is_leaf(&self) -> bool {
        self.tree.node(self.id).is_leaf()
    }

    pub fn level(&self) -> usize {
        self.tree.node(self.id).level
    }

    /// `None` only for the root of an empty tree.
    pub fn bounding_box(&self) -> Option<Rectangle> {
        self.envelope().map(|bbox| bbox.to_rectangle())
    }

    /// The bounding box in min/max form, exactly as the tree stores it.
    pub fn envelope(&self) -> Option<Envelope> {
        self.tree.node(self.id).bbox
    }

    pub fn len(&self) -> usize {
        self.tree.node(self.id).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn children(&self) -> NodeChildren<'a> {
        let tree = self.tree;
        match &tree.node(self.id).children {
            Children::Leaf(rects) => NodeChildren::Rectangles(rects),
            Children::Internal(ids) => NodeChildren::Nodes(ChildNodes {
                tree,
                ids: ids.iter(),
            }),
        }
    }
}

/// Node and entry counts of a tree.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub rectangles: usize,
    pub height: usize,
    pub nodes: usize,
    pub leaves: usize,
}

impl RTree {
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            tree: self,
            id: self.root_id(),
        }
    }

    /// `(level, bounding box)` of every non-empty node, in pre-order.
    pub fn outline(&self) -> Vec<(usize, Rectangle)> {
        let mut boxes = Vec::new();
        let mut stack = vec![self.root()];
        while let Some(node) = stack.pop() {
            if let Some(bbox) = node.bounding_box() {
                boxes.push((node.level(), bbox));
            }
            if let NodeChildren::Nodes(children) = node.children() {
                let children: Vec<NodeRef<'_>> = children.collect();
                stack.extend(children.into_iter().rev());
            }
        }
        boxes
    }

    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            height: self.height(),
            ..TreeStats::default()
        };
        let mut stack = vec![self.root()];
        while let Some(node) = stack.pop() {
            stats.nodes += 1;
            match node.children() {
                NodeChildren::Rectangles(rects) => {
                    stats.leaves += 1;
                    stats.rectangles += rects.len();
                }
                NodeChildren::Nodes(children) => stack.extend(children),
            }
        }
        stats
    }
}
