//! A dynamic R-tree over axis-aligned rectangles.
//!
//! Rectangles are inserted one at a time; nodes that overflow are split and
//! the tree grows upward from the root, so all leaves stay at the same depth.
//! Queries return every stored rectangle overlapping a query rectangle.
//!
//! ```
//! use dynamic_rtree::{RTree, Rectangle};
//!
//! let mut tree = RTree::new();
//! tree.insert(Rectangle::new(0., 0., 10., 10.)).unwrap();
//! tree.insert(Rectangle::new(20., 20., 10., 10.)).unwrap();
//!
//! let hits = tree.search(&Rectangle::new(5., 5., 10., 10.)).unwrap();
//! assert_eq!(hits, vec![Rectangle::new(0., 0., 10., 10.)]);
//! ```

mod coordinate;
mod envelope;
mod error;
pub mod from_wkt;
mod linear_scan;
mod node;
mod options;
mod rectangle;
mod rtree;
mod spatial_index;
mod split;
pub mod utils;
mod view;

pub use coordinate::Coordinate;
pub use envelope::{Envelope, HasEnvelope};
pub use error::{RTreeError, RTreeResult};
pub use linear_scan::LinearScan;
pub use node::NodeId;
pub use options::{RTreeOptions, DEFAULT_MAX_ENTRIES};
pub use rectangle::Rectangle;
pub use rtree::RTree;
pub use spatial_index::SpatialIndex;
pub use view::{ChildNodes, NodeChildren, NodeRef, TreeStats};
