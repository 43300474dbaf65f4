use std::collections::VecDeque;

/// Double-ended queue of node ids as needed by the Dr. Pape discipline
pub trait Deque {
    /// Inserts a node before all others
    fn push_front(&mut self, node: usize);

    /// Inserts a node after all others
    fn push_back(&mut self, node: usize);

    /// Removes the first node, if any
    fn pop_front(&mut self) -> Option<usize>;

    /// Returns true if the deque holds no node
    fn is_empty(&self) -> bool;

    /// Number of nodes in the deque
    fn len(&self) -> usize;

    /// Removes every node
    fn clear(&mut self);
}

/// Deque on a plain vector: front insertion shifts every element, O(n)
#[derive(Debug, Default, Clone)]
pub struct NaiveDeque {
    nodes: Vec<usize>,
}

impl NaiveDeque {
    pub fn new() -> Self {
        NaiveDeque { nodes: Vec::new() }
    }
}

impl Deque for NaiveDeque {
    fn push_front(&mut self, node: usize) {
        self.nodes.insert(0, node);
    }

    fn push_back(&mut self, node: usize) {
        self.nodes.push(node);
    }

    fn pop_front(&mut self) -> Option<usize> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(self.nodes.remove(0))
        }
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl Deque for VecDeque<usize> {
    fn push_front(&mut self, node: usize) {
        VecDeque::push_front(self, node);
    }

    fn push_back(&mut self, node: usize) {
        VecDeque::push_back(self, node);
    }

    fn pop_front(&mut self) -> Option<usize> {
        VecDeque::pop_front(self)
    }

    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn clear(&mut self) {
        VecDeque::clear(self);
    }
}

/// Marks the end of the list in `next`, and an empty `head`/`tail`
const NIL: usize = usize::MAX;

/// Fixed-capacity deque of node ids stored as an intrusive singly linked list.
///
/// `next[v]` is the node that follows `v`, or [`NIL`] when `v` is last. Every
/// operation is O(1) and nothing is allocated after construction. A node id
/// may occupy at most one position at a time; pushing an id that is already
/// in the deque corrupts the list, so callers track membership themselves.
#[derive(Debug, Clone)]
pub struct SimpleDeque {
    next: Vec<usize>,
    head: usize,
    tail: usize,
    len: usize,
}

impl SimpleDeque {
    /// Creates a deque for node ids in `0..capacity`
    pub fn new(capacity: usize) -> Self {
        SimpleDeque {
            next: vec![NIL; capacity],
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    /// Largest number of nodes the deque can hold; also the id bound
    pub fn capacity(&self) -> usize {
        self.next.len()
    }

    /// First node without removing it
    pub fn front(&self) -> Option<usize> {
        (self.head != NIL).then_some(self.head)
    }

    /// Iterates the nodes from front to back
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        let mut current = self.head;
        std::iter::from_fn(move || {
            if current == NIL {
                return None;
            }
            let node = current;
            current = self.next[node];
            Some(node)
        })
    }
}

impl Deque for SimpleDeque {
    fn push_front(&mut self, node: usize) {
        debug_assert!(node < self.capacity(), "node {} out of capacity", node);
        if self.head == NIL {
            self.tail = node;
        }
        self.next[node] = self.head;
        self.head = node;
        self.len += 1;
    }

    fn push_back(&mut self, node: usize) {
        debug_assert!(node < self.capacity(), "node {} out of capacity", node);
        if self.head == NIL {
            self.head = node;
        } else {
            self.next[self.tail] = node;
        }
        self.next[node] = NIL;
        self.tail = node;
        self.len += 1;
    }

    fn pop_front(&mut self) -> Option<usize> {
        if self.head == NIL {
            return None;
        }

        let left = self.head;
        self.head = self.next[left];
        self.next[left] = NIL;
        if self.head == NIL {
            self.tail = NIL;
        }
        self.len -= 1;
        Some(left)
    }

    fn is_empty(&self) -> bool {
        self.head == NIL
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        // Unlink the remaining nodes so the array can be reused
        while self.pop_front().is_some() {}
    }
}
