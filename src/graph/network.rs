use std::collections::HashMap;
use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::traits::Graph;
use crate::{Error, Result};

/// A node of the network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Internal node id used for the shortest path calculation
    pub id: usize,

    /// User-defined node id, kept for display only
    pub uid: String,

    /// Links leaving this node, in registration order
    outgoing: Vec<usize>,
}

impl Node {
    /// Ids of the links whose origin is this node
    pub fn outgoing_links(&self) -> &[usize] {
        &self.outgoing
    }
}

/// A directed link of the network
#[derive(Debug, Clone, PartialEq)]
pub struct Link<W> {
    /// Internal link id
    pub id: usize,

    /// User-defined link id
    pub uid: String,

    /// Internal id of the origin node
    pub origin: usize,

    /// Internal id of the destination node
    pub destination: usize,

    /// Non-negative link length
    pub length: W,
}

/// Immutable network of nodes and links.
///
/// Built through [`NetworkBuilder`], which guarantees that internal ids are
/// contiguous from zero and every link references existing nodes.
#[derive(Debug, Clone)]
pub struct Network<W>
where
    W: Float + Zero + Debug + Copy,
{
    nodes: Vec<Node>,
    links: Vec<Link<W>>,
    /// User-defined node id -> internal node id
    node_ids: HashMap<String, usize>,
}

impl<W> Network<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Builds a network with nodes `0..node_count` (user ids are the decimal
    /// indices) and one link per `(origin, destination, length)` triple
    pub fn from_edges(node_count: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        let mut builder = NetworkBuilder::with_capacity(node_count, edges.len());
        for v in 0..node_count {
            builder.register_node(v.to_string())?;
        }
        for (idx, &(from, to, length)) in edges.iter().enumerate() {
            builder.register_link(idx.to_string(), &from.to_string(), &to.to_string(), length)?;
        }
        Ok(builder.build())
    }

    /// Gets the internal node id for a user-defined node id
    pub fn node_id(&self, uid: &str) -> Result<usize> {
        self.node_ids.get(uid).copied().ok_or_else(|| {
            Error::Inconsistency(format!("node {} does not exist in the network", uid))
        })
    }

    /// All nodes, indexed by internal id
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All links, indexed by internal id
    pub fn links(&self) -> &[Link<W>] {
        &self.links
    }
}

impl<W> Graph<W> for Network<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn link_count(&self) -> usize {
        self.links.len()
    }

    fn node(&self, id: usize) -> Result<&Node> {
        self.nodes.get(id).ok_or(Error::NodeNotFound(id))
    }

    fn link(&self, id: usize) -> Result<&Link<W>> {
        self.links.get(id).ok_or(Error::LinkNotFound(id))
    }

    fn outgoing_links(&self, node: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        match self.nodes.get(node) {
            Some(n) => Box::new(n.outgoing.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn outgoing_edges(&self, node: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.nodes.get(node) {
            Some(n) => Box::new(n.outgoing.iter().map(move |&id| {
                let link = &self.links[id];
                (link.destination, link.length)
            })),
            None => Box::new(std::iter::empty()),
        }
    }
}

/// Registers nodes and links by user-defined id and assigns the internal ids
#[derive(Debug, Default)]
pub struct NetworkBuilder<W> {
    nodes: Vec<Node>,
    links: Vec<Link<W>>,
    node_ids: HashMap<String, usize>,
}

impl<W> NetworkBuilder<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates an empty builder
    pub fn new() -> Self {
        NetworkBuilder {
            nodes: Vec::new(),
            links: Vec::new(),
            node_ids: HashMap::new(),
        }
    }

    /// Creates an empty builder with room for the given number of nodes and links
    pub fn with_capacity(nodes: usize, links: usize) -> Self {
        NetworkBuilder {
            nodes: Vec::with_capacity(nodes),
            links: Vec::with_capacity(links),
            node_ids: HashMap::with_capacity(nodes),
        }
    }

    /// Registers a node and returns its internal id. Ids are handed out
    /// sequentially from zero.
    pub fn register_node(&mut self, uid: impl Into<String>) -> Result<usize> {
        let uid = uid.into();
        if self.node_ids.contains_key(&uid) {
            return Err(Error::DuplicateId(uid));
        }

        let id = self.nodes.len();
        self.node_ids.insert(uid.clone(), id);
        self.nodes.push(Node {
            id,
            uid,
            outgoing: Vec::new(),
        });
        Ok(id)
    }

    /// Registers a link between two already registered nodes and returns its
    /// internal id
    pub fn register_link(
        &mut self,
        uid: impl Into<String>,
        origin_uid: &str,
        destination_uid: &str,
        length: W,
    ) -> Result<usize> {
        let origin = self.resolve(origin_uid)?;
        let destination = self.resolve(destination_uid)?;

        let id = self.links.len();
        self.links.push(Link {
            id,
            uid: uid.into(),
            origin,
            destination,
            length,
        });
        self.nodes[origin].outgoing.push(id);
        Ok(id)
    }

    /// Number of nodes registered so far
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Freezes the registered nodes and links into an immutable network
    pub fn build(self) -> Network<W> {
        Network {
            nodes: self.nodes,
            links: self.links,
            node_ids: self.node_ids,
        }
    }

    fn resolve(&self, uid: &str) -> Result<usize> {
        self.node_ids.get(uid).copied().ok_or_else(|| {
            Error::Inconsistency(format!(
                "link references node {} which was never registered",
                uid
            ))
        })
    }
}
