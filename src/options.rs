use crate::{RTreeError, RTreeResult};

/// Default node capacity.
pub const DEFAULT_MAX_ENTRIES: usize = 4;

/// Construction-time configuration of an [`RTree`](crate::RTree).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RTreeOptions {
    /// Entries a node holds before it splits. Affects fan-out, never results.
    pub max_entries: usize,
}

impl Default for RTreeOptions {
    fn default() -> Self {
        RTreeOptions {
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

impl RTreeOptions {
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// A split needs two seeds, so nodes must hold at least two entries.
    pub fn validate(&self) -> RTreeResult<()> {
        if self.max_entries < 2 {
            return Err(RTreeError::UnderfullSplit {
                max_entries: self.max_entries,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_four() {
        assert_eq!(RTreeOptions::default().max_entries, 4);
        assert!(RTreeOptions::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_underfull() {
        for max_entries in 0..2 {
            let options = RTreeOptions::default().with_max_entries(max_entries);
            assert_eq!(
                options.validate(),
                Err(RTreeError::UnderfullSplit { max_entries })
            );
        }
        assert!(RTreeOptions::default().with_max_entries(2).validate().is_ok());
    }
}
