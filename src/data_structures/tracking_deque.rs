use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::data_structures::ScanEligibleList;
use crate::{Error, Result};

/// `next` value of a node that never entered the deque
const UNREACHED: usize = usize::MAX;
/// `next` value of a node that entered and left the deque
const SCANNED: usize = usize::MAX - 1;
/// `next` value of the last queued node, and an empty `head`/`tail`
const END: usize = usize::MAX - 2;

/// Dr. Pape deque that needs no status array.
///
/// The link array doubles as the status: a queued node points at its
/// successor or [`END`], and the two reserved values above tell a node that
/// was never queued from one that has been scanned.
#[derive(Debug, Clone)]
pub struct TrackingDeque {
    next: Vec<usize>,
    head: usize,
    tail: usize,
    len: usize,
}

impl TrackingDeque {
    /// Creates a deque for node ids in `0..node_count`
    pub fn new(node_count: usize) -> Self {
        TrackingDeque {
            next: vec![UNREACHED; node_count],
            head: END,
            tail: END,
            len: 0,
        }
    }

    /// True if the node has never been queued in this run
    pub fn is_new(&self, node: usize) -> bool {
        self.next[node] == UNREACHED
    }

    /// True if the node was queued and has been popped since
    pub fn is_past(&self, node: usize) -> bool {
        self.next[node] == SCANNED
    }

    /// True if the node is waiting in the deque
    pub fn contains(&self, node: usize) -> bool {
        !self.is_new(node) && !self.is_past(node)
    }

    fn push_front(&mut self, node: usize) {
        if self.head == END {
            self.tail = node;
        }
        self.next[node] = self.head;
        self.head = node;
        self.len += 1;
    }

    fn push_back(&mut self, node: usize) {
        if self.head == END {
            self.head = node;
        } else {
            self.next[self.tail] = node;
        }
        self.next[node] = END;
        self.tail = node;
        self.len += 1;
    }
}

impl<W> ScanEligibleList<W> for TrackingDeque
where
    W: Float + Zero + Debug + Copy,
{
    fn push(&mut self, node: usize, _label: W) {
        if self.is_past(node) {
            self.push_front(node);
        } else if self.is_new(node) {
            self.push_back(node);
        }
    }

    fn pop(&mut self, labels: &[W]) -> Result<(usize, W)> {
        if self.head == END {
            return Err(Error::EmptyList);
        }

        let node = self.head;
        self.head = self.next[node];
        self.next[node] = SCANNED;
        if self.head == END {
            self.tail = END;
        }
        self.len -= 1;
        Ok((node, labels[node]))
    }

    fn is_empty(&self) -> bool {
        self.head == END
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.next.fill(UNREACHED);
        self.head = END;
        self.tail = END;
        self.len = 0;
    }
}
