use std::fmt::Debug;
use num_traits::{Float, ToPrimitive, Zero};

use crate::graph::network::{Link, Node};
use crate::{Error, Result};

/// Trait representing an immutable, weighted directed graph addressed by
/// dense internal ids
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of links in the graph
    fn link_count(&self) -> usize;

    /// Gets a node by internal id
    fn node(&self, id: usize) -> Result<&Node>;

    /// Gets a link by internal id
    fn link(&self, id: usize) -> Result<&Link<W>>;

    /// Returns an iterator over the ids of the links leaving a node.
    /// Every call starts a fresh iteration.
    fn outgoing_links(&self, node: usize) -> Box<dyn Iterator<Item = usize> + '_>;

    /// Returns an iterator over `(destination, length)` of the links leaving a node
    fn outgoing_edges(&self, node: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: usize) -> bool {
        node < self.node_count()
    }

    /// Checks that every link length is a finite, non-negative number.
    ///
    /// `NaN` fails the check too: a relaxation against it never succeeds, so
    /// the link would silently drop out of every shortest path.
    fn validate_non_negative(&self) -> Result<()> {
        for id in 0..self.link_count() {
            let length = self.link(id)?.length;
            if !(length >= W::zero() && length.is_finite()) {
                return Err(Error::NegativeLength {
                    link: id,
                    length: length.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(())
    }
}
