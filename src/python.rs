use crate::algorithm::apsp::{AllPairsShortestPaths, ApspConfig};
use crate::algorithm::discipline::{Discipline, Mlc};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{Deque, SimpleDeque};
use crate::graph::network::{Network, NetworkBuilder};
use crate::graph::{load_network, Graph};
use pyo3::exceptions::{PyIndexError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

fn to_py_err(e: crate::Error) -> PyErr {
    match e {
        crate::Error::Config(_) | crate::Error::DuplicateId(_) | crate::Error::Inconsistency(_) => {
            PyValueError::new_err(e.to_string())
        }
        crate::Error::NodeNotFound(_) | crate::Error::LinkNotFound(_) => PyIndexError::new_err(e.to_string()),
        _ => PyRuntimeError::new_err(e.to_string()),
    }
}

#[pyclass]
pub struct PyNetworkBuilder {
    builder: NetworkBuilder<f64>,
}

#[pymethods]
impl PyNetworkBuilder {
    #[new]
    fn new() -> Self {
        PyNetworkBuilder {
            builder: NetworkBuilder::new(),
        }
    }

    fn register_node(&mut self, uid: String) -> PyResult<usize> {
        self.builder.register_node(uid).map_err(to_py_err)
    }

    fn register_link(&mut self, uid: String, origin: &str, destination: &str, length: f64) -> PyResult<usize> {
        self.builder
            .register_link(uid, origin, destination, length)
            .map_err(to_py_err)
    }

    /// Freezes the registered nodes and links; the builder is empty afterwards
    fn build(&mut self) -> PyNetwork {
        PyNetwork {
            network: std::mem::take(&mut self.builder).build(),
        }
    }
}

#[pyclass]
pub struct PyNetwork {
    network: Network<f64>,
}

#[pymethods]
impl PyNetwork {
    #[staticmethod]
    #[pyo3(signature = (node_file, link_file, delimiter = ","))]
    fn load(node_file: &str, link_file: &str, delimiter: &str) -> PyResult<Self> {
        let delimiter = match delimiter.as_bytes() {
            [byte] => *byte,
            _ => return Err(PyValueError::new_err("delimiter must be a single byte")),
        };
        let network = load_network(node_file, link_file, delimiter).map_err(to_py_err)?;
        Ok(PyNetwork { network })
    }

    fn node_count(&self) -> usize {
        self.network.node_count()
    }

    #[pyo3(signature = (source, discipline = "deque"))]
    fn shortest_paths(
        &self,
        source: usize,
        discipline: &str,
    ) -> PyResult<(Vec<Option<f64>>, Vec<Option<usize>>)> {
        let discipline: Discipline = discipline.parse().map_err(to_py_err)?;
        let result: ShortestPathResult<f64> = Mlc::new(discipline)
            .compute_shortest_paths(&self.network, source)
            .map_err(to_py_err)?;
        let distances: Vec<Option<f64>> = (0..result.distances.len()).map(|v| result.distance(v)).collect();
        Ok((distances, result.predecessors))
    }

    #[pyo3(signature = (method = "deq", parallel = false))]
    fn compute_all_pairs(
        &self,
        method: &str,
        parallel: bool,
    ) -> PyResult<(Vec<Vec<Option<f64>>>, Vec<Vec<Option<usize>>>)> {
        let config = ApspConfig::from_method_name(method)
            .map_err(to_py_err)?
            .with_parallel(parallel);
        let result = AllPairsShortestPaths::new(config)
            .run(&self.network)
            .map_err(to_py_err)?;

        let distances: Vec<Vec<Option<f64>>> = result
            .rows()
            .map(|(dist, _)| dist.iter().map(|d| d.is_finite().then_some(*d)).collect())
            .collect();
        let predecessors: Vec<Vec<Option<usize>>> = result.rows().map(|(_, pred)| pred.to_vec()).collect();
        Ok((distances, predecessors))
    }
}

/// The fixed-capacity deque, with the method names of `collections.deque`
#[pyclass]
pub struct PySimpleDeque {
    inner: SimpleDeque,
}

#[pymethods]
impl PySimpleDeque {
    #[new]
    fn new(capacity: usize) -> Self {
        PySimpleDeque {
            inner: SimpleDeque::new(capacity),
        }
    }

    fn append(&mut self, node: usize) -> PyResult<()> {
        self.check(node)?;
        self.inner.push_back(node);
        Ok(())
    }

    fn appendleft(&mut self, node: usize) -> PyResult<()> {
        self.check(node)?;
        self.inner.push_front(node);
        Ok(())
    }

    fn popleft(&mut self) -> PyResult<usize> {
        self.inner
            .pop_front()
            .ok_or_else(|| PyIndexError::new_err("pop from an empty deque"))
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __bool__(&self) -> bool {
        !self.inner.is_empty()
    }
}

impl PySimpleDeque {
    fn check(&self, node: usize) -> PyResult<()> {
        if node >= self.inner.capacity() {
            return Err(PyIndexError::new_err(format!("node {} out of capacity", node)));
        }
        if self.inner.iter().any(|queued| queued == node) {
            return Err(PyValueError::new_err(format!("node {} is already queued", node)));
        }
        Ok(())
    }
}

#[pymodule]
fn mlc_sssp_py(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyNetworkBuilder>()?;
    m.add_class::<PyNetwork>()?;
    m.add_class::<PySimpleDeque>()?;
    Ok(())
}
