use crate::{Envelope, HasEnvelope, Rectangle};

/// Position of a node in the tree's arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const fn new(index: usize) -> Self {
        NodeId(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Children {
    Leaf(Vec<Rectangle>),
    Internal(Vec<NodeId>),
}

impl Children {
    pub(crate) fn len(&self) -> usize {
        match self {
            Children::Leaf(rects) => rects.len(),
            Children::Internal(ids) => ids.len(),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    // Leaves are level 1.
    pub(crate) level: usize,
    pub(crate) children: Children,
    // None only while `children` is empty.
    pub(crate) bbox: Option<Envelope>,
}

impl Node {
    pub(crate) fn new_leaf() -> Self {
        Node {
            level: 1,
            children: Children::Leaf(Vec::new()),
            bbox: None,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self.children, Children::Leaf(_))
    }

    pub(crate) fn len(&self) -> usize {
        self.children.len()
    }

    pub(crate) fn expand<T: HasEnvelope>(&mut self, item: T) {
        self.bbox = Some(match self.bbox {
            None => item.envelope(),
            Some(bbox) => bbox.merge(item),
        });
    }
}
