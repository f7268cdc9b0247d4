/**
 * A dynamic R-tree built one rectangle at a time.
 *
 * Nodes live in an arena and are addressed by `NodeId`. Overfull nodes are
 * split on the way back up from an insertion; when the root itself splits, a
 * new root is placed above the two halves and the tree grows by one level.
 */
use std::borrow::Borrow;

use crate::node::{Children, Node, NodeId};
use crate::split::{partition, pick};
use crate::{Envelope, HasEnvelope, RTreeError, RTreeOptions, RTreeResult, Rectangle};

#[derive(Clone, Debug)]
pub struct RTree {
    options: RTreeOptions,
    root: NodeId,
    arena: Vec<Node>,
    // Stored rectangles in insertion order; removal replays it.
    items: Vec<Rectangle>,
}

impl Default for RTree {
    fn default() -> Self {
        Self::new()
    }
}

impl RTree {
    /// An empty tree with the default options.
    pub fn new() -> Self {
        RTree {
            options: RTreeOptions::default(),
            root: NodeId::new(0),
            arena: vec![Node::new_leaf()],
            items: Vec::new(),
        }
    }

    pub fn with_options(options: RTreeOptions) -> RTreeResult<Self> {
        options.validate()?;
        Ok(RTree {
            options,
            ..Self::new()
        })
    }

    pub fn with_max_entries(max_entries: usize) -> RTreeResult<Self> {
        Self::with_options(RTreeOptions::default().with_max_entries(max_entries))
    }

    pub fn options(&self) -> RTreeOptions {
        self.options
    }

    pub fn max_entries(&self) -> usize {
        self.options.max_entries
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of levels; an empty tree is a single leaf of height 1.
    pub fn height(&self) -> usize {
        self.node(self.root).level
    }

    /// Bounding box of everything stored, `None` when empty.
    pub fn envelope(&self) -> Option<Rectangle> {
        self.node(self.root).bbox.map(|bbox| bbox.to_rectangle())
    }

    /// Stored rectangles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Rectangle> + '_ {
        self.items.iter()
    }

    pub(crate) fn root_id(&self) -> NodeId {
        self.root
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.arena[id.index()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.arena[id.index()]
    }

    fn push_node(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.arena.len());
        self.arena.push(node);
        id
    }

    pub fn insert(&mut self, rect: Rectangle) -> RTreeResult<()> {
        if !rect.is_valid() {
            return Err(RTreeError::InvalidRectangle(rect));
        }
        self.insert_unchecked(rect);
        Ok(())
    }

    /// Insert every rectangle, or none of them if any is invalid.
    pub fn insert_all<I>(&mut self, rects: I) -> RTreeResult<()>
    where
        I: IntoIterator,
        I::Item: Borrow<Rectangle>,
    {
        let rects: Vec<Rectangle> = rects.into_iter().map(|r| *r.borrow()).collect();
        if let Some(bad) = rects.iter().find(|r| !r.is_valid()) {
            return Err(RTreeError::InvalidRectangle(*bad));
        }
        for rect in rects {
            self.insert_unchecked(rect);
        }
        Ok(())
    }

    fn insert_unchecked(&mut self, rect: Rectangle) {
        self.items.push(rect);
        let root = self.root;
        if let Some(sibling) = self.insert_into(root, rect) {
            self.grow_root(sibling);
        }
    }

    fn grow_root(&mut self, sibling: NodeId) {
        let old_root = self.root;
        let bbox = Envelope::of_iter(
            [old_root, sibling]
                .iter()
                .filter_map(|&id| self.node(id).bbox),
        );
        let level = self.node(old_root).level + 1;
        self.root = self.push_node(Node {
            level,
            children: Children::Internal(vec![old_root, sibling]),
            bbox,
        });
        log::debug!("root split, tree height is now {}", level);
    }

    /// Insert below `id`, returning the new sibling if `id` had to split.
    fn insert_into(&mut self, id: NodeId, rect: Rectangle) -> Option<NodeId> {
        let target = match &self.node(id).children {
            Children::Leaf(_) => None,
            Children::Internal(children) => Some(self.choose_subtree(children, rect)),
        };

        match target {
            None => {
                let node = self.node_mut(id);
                if let Children::Leaf(rects) = &mut node.children {
                    rects.push(rect);
                }
                node.expand(rect);
            }
            Some(child) => {
                let split_node = self.insert_into(child, rect);
                let sibling_box = split_node.and_then(|s| self.node(s).bbox);
                let node = self.node_mut(id);
                if let (Some(sibling), Children::Internal(children)) =
                    (split_node, &mut node.children)
                {
                    children.push(sibling);
                }
                if let Some(sibling_box) = sibling_box {
                    node.expand(sibling_box);
                }
                // The rectangle may have stayed with the chosen child.
                node.expand(rect);
            }
        }

        if self.node(id).len() > self.options.max_entries {
            Some(self.split(id))
        } else {
            None
        }
    }

    /// The child needing the least area enlargement to cover `rect`, then the
    /// one with the least area. Remaining ties keep the earliest child.
    fn choose_subtree(&self, children: &[NodeId], rect: Rectangle) -> NodeId {
        let mut best = children[0];
        let mut best_enlargement = f64::INFINITY;
        let mut best_area = f64::INFINITY;

        for &child in children {
            let bbox = match self.node(child).bbox {
                Some(bbox) => bbox,
                None => continue,
            };
            let enlargement = bbox.enlargement(rect);
            let area = bbox.area();
            if enlargement < best_enlargement
                || (enlargement == best_enlargement && area < best_area)
            {
                best_enlargement = enlargement;
                best_area = area;
                best = child;
            }
        }
        best
    }

    /// Move part of `id`'s entries into a new node of the same level and kind.
    fn split(&mut self, id: NodeId) -> NodeId {
        let boxes = self.entry_boxes(id);
        let groups = partition(&boxes);
        let first_box = Envelope::of_iter(groups.first.iter().map(|&i| boxes[i]));
        let second_box = Envelope::of_iter(groups.second.iter().map(|&i| boxes[i]));

        let node = self.node_mut(id);
        let level = node.level;
        let (kept, moved) = match &node.children {
            Children::Leaf(rects) => (
                Children::Leaf(pick(rects, &groups.first)),
                Children::Leaf(pick(rects, &groups.second)),
            ),
            Children::Internal(ids) => (
                Children::Internal(pick(ids, &groups.first)),
                Children::Internal(pick(ids, &groups.second)),
            ),
        };
        node.children = kept;
        node.bbox = first_box;

        log::trace!(
            "split level {} node into {} + {} entries",
            level,
            groups.first.len(),
            groups.second.len()
        );
        self.push_node(Node {
            level,
            children: moved,
            bbox: second_box,
        })
    }

    fn entry_boxes(&self, id: NodeId) -> Vec<Envelope> {
        match &self.node(id).children {
            Children::Leaf(rects) => rects.iter().map(|r| r.envelope()).collect(),
            Children::Internal(ids) => ids
                .iter()
                .filter_map(|&child| self.node(child).bbox)
                .collect(),
        }
    }

    /// Stored rectangles intersecting `query`, in depth-first order.
    pub fn search(&self, query: &Rectangle) -> RTreeResult<Vec<Rectangle>> {
        let mut results = Vec::new();
        self.search_into(query, &mut results)?;
        Ok(results)
    }

    /// Like [`search`](Self::search), appending to `results`.
    pub fn search_into(&self, query: &Rectangle, results: &mut Vec<Rectangle>) -> RTreeResult<()> {
        if !query.is_valid() {
            return Err(RTreeError::InvalidQuery(*query));
        }
        self.search_node(self.root, query, results);
        Ok(())
    }

    fn search_node(&self, id: NodeId, query: &Rectangle, results: &mut Vec<Rectangle>) {
        let node = self.node(id);
        match node.bbox {
            Some(bbox) if bbox.intersects(query) => {}
            _ => return,
        }
        match &node.children {
            Children::Leaf(rects) => {
                results.extend(rects.iter().copied().filter(|r| r.intersects(query)));
            }
            Children::Internal(children) => {
                for &child in children {
                    self.search_node(child, query, results);
                }
            }
        }
    }

    /**
     * Remove the first stored rectangle equal to `rect`.
     *
     * The tree is rebuilt from the remaining rectangles in their original
     * insertion order, so each removal costs O(n) inserts.
     */
    pub fn remove(&mut self, rect: &Rectangle) -> bool {
        let position = match self.items.iter().position(|r| r == rect) {
            Some(position) => position,
            None => return false,
        };
        let mut survivors = std::mem::take(&mut self.items);
        survivors.remove(position);
        self.clear();
        log::debug!("rebuilding tree with {} rectangles", survivors.len());
        for r in survivors {
            self.insert_unchecked(r);
        }
        true
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.arena.push(Node::new_leaf());
        self.root = NodeId::new(0);
        self.items.clear();
    }

    /// Walk every node reachable from the root and report the first broken
    /// structural invariant.
    pub fn check_integrity(&self) -> RTreeResult<()> {
        let mut stored = Vec::with_capacity(self.items.len());
        self.check_node(self.root, &mut stored)?;

        let mut expected = self.items.clone();
        if stored.len() != expected.len() {
            return Err(RTreeError::Integrity(format!(
                "tree holds {} rectangles, {} were inserted",
                stored.len(),
                expected.len()
            )));
        }
        let order = |a: &Rectangle, b: &Rectangle| {
            a.x.total_cmp(&b.x)
                .then(a.y.total_cmp(&b.y))
                .then(a.width.total_cmp(&b.width))
                .then(a.height.total_cmp(&b.height))
        };
        stored.sort_unstable_by(order);
        expected.sort_unstable_by(order);
        if stored != expected {
            return Err(RTreeError::Integrity(
                "stored rectangles differ from inserted rectangles".to_string(),
            ));
        }
        Ok(())
    }

    fn check_node(&self, id: NodeId, stored: &mut Vec<Rectangle>) -> RTreeResult<()> {
        let node = self.node(id);
        if node.len() > self.options.max_entries {
            return Err(RTreeError::Integrity(format!(
                "node {:?} has {} entries, capacity is {}",
                id,
                node.len(),
                self.options.max_entries
            )));
        }
        if id != self.root && node.len() == 0 {
            return Err(RTreeError::Integrity(format!("node {:?} is empty", id)));
        }
        let child_boxes = match &node.children {
            Children::Leaf(rects) => {
                if node.level != 1 {
                    return Err(RTreeError::Integrity(format!(
                        "leaf {:?} is at level {}",
                        id, node.level
                    )));
                }
                stored.extend_from_slice(rects);
                Envelope::of(rects)
            }
            Children::Internal(children) => {
                for &child in children {
                    let child_level = self.node(child).level;
                    if child_level + 1 != node.level {
                        return Err(RTreeError::Integrity(format!(
                            "node {:?} at level {} has child {:?} at level {}",
                            id, node.level, child, child_level
                        )));
                    }
                    self.check_node(child, stored)?;
                }
                Envelope::of_iter(children.iter().filter_map(|&c| self.node(c).bbox))
            }
        };
        if node.bbox != child_boxes {
            return Err(RTreeError::Integrity(format!(
                "node {:?} box {:?} differs from union of children {:?}",
                id, node.bbox, child_boxes
            )));
        }
        Ok(())
    }
}
