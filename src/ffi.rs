use crate::algorithm::apsp::compute_all_pairs;
use crate::graph::network::{Network, NetworkBuilder};
use crate::graph::Graph;
use crate::Error;
use libc::c_char;
use std::ffi::CStr;

/// Status codes returned by the C API
pub const MLC_OK: i32 = 0;
pub const MLC_ERR_ARGUMENT: i32 = 1;
pub const MLC_ERR_CONFIG: i32 = 2;
pub const MLC_ERR_NOT_IMPLEMENTED: i32 = 3;
pub const MLC_ERR_BUFFER: i32 = 4;
pub const MLC_ERR_NEGATIVE_LENGTH: i32 = 5;
pub const MLC_ERR_INTERNAL: i32 = 6;

pub struct FfiBuilder {
    builder: NetworkBuilder<f64>,
}

pub struct FfiNetwork {
    network: Network<f64>,
}

fn c_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

#[no_mangle]
pub extern "C" fn mlc_builder_new() -> *mut FfiBuilder {
    Box::into_raw(Box::new(FfiBuilder {
        builder: NetworkBuilder::new(),
    }))
}

/// Registers a node and returns its internal id, or -1 on a null/invalid id
/// or a duplicate
#[no_mangle]
pub extern "C" fn mlc_builder_register_node(b: *mut FfiBuilder, uid: *const c_char) -> i64 {
    if b.is_null() {
        return -1;
    }
    match c_str(uid) {
        Some(uid) => match unsafe { &mut *b }.builder.register_node(uid) {
            Ok(id) => id as i64,
            Err(_) => -1,
        },
        None => -1,
    }
}

/// Registers a link between two registered nodes and returns its internal
/// id, or -1 if an endpoint is unknown
#[no_mangle]
pub extern "C" fn mlc_builder_register_link(
    b: *mut FfiBuilder,
    uid: *const c_char,
    origin: *const c_char,
    destination: *const c_char,
    length: f64,
) -> i64 {
    if b.is_null() {
        return -1;
    }
    match (c_str(uid), c_str(origin), c_str(destination)) {
        (Some(uid), Some(origin), Some(destination)) => {
            match unsafe { &mut *b }
                .builder
                .register_link(uid, origin, destination, length)
            {
                Ok(id) => id as i64,
                Err(_) => -1,
            }
        }
        _ => -1,
    }
}

/// Consumes the builder and returns the finished network
#[no_mangle]
pub extern "C" fn mlc_builder_build(b: *mut FfiBuilder) -> *mut FfiNetwork {
    if b.is_null() {
        return std::ptr::null_mut();
    }
    let builder = unsafe { Box::from_raw(b) }.builder;
    Box::into_raw(Box::new(FfiNetwork {
        network: builder.build(),
    }))
}

#[no_mangle]
pub extern "C" fn mlc_builder_free(b: *mut FfiBuilder) {
    if !b.is_null() {
        unsafe {
            drop(Box::from_raw(b));
        }
    }
}

#[no_mangle]
pub extern "C" fn mlc_network_node_count(g: *const FfiNetwork) -> usize {
    if g.is_null() {
        return 0;
    }
    unsafe { &(*g).network }.node_count()
}

#[no_mangle]
pub extern "C" fn mlc_network_free(g: *mut FfiNetwork) {
    if !g.is_null() {
        unsafe {
            drop(Box::from_raw(g));
        }
    }
}

/// Computes all-pairs shortest paths into caller-owned row-major buffers of
/// `len == node_count * node_count` entries. Unreachable pairs get an
/// infinite distance and predecessor -1.
#[no_mangle]
pub extern "C" fn mlc_compute_all_pairs(
    g: *const FfiNetwork,
    method: *const c_char,
    distances: *mut f64,
    predecessors: *mut i64,
    len: usize,
) -> i32 {
    if g.is_null() || distances.is_null() || predecessors.is_null() {
        return MLC_ERR_ARGUMENT;
    }
    let Some(method) = c_str(method) else {
        return MLC_ERR_ARGUMENT;
    };

    let network = unsafe { &(*g).network };
    let n = network.node_count();
    if len != n * n {
        return MLC_ERR_BUFFER;
    }

    let result = match compute_all_pairs(network, method) {
        Ok(result) => result,
        Err(Error::Config(_)) => return MLC_ERR_CONFIG,
        Err(Error::NotImplemented(_)) => return MLC_ERR_NOT_IMPLEMENTED,
        Err(Error::NegativeLength { .. }) => return MLC_ERR_NEGATIVE_LENGTH,
        Err(_) => return MLC_ERR_INTERNAL,
    };

    let dist_out = unsafe { std::slice::from_raw_parts_mut(distances, len) };
    let pred_out = unsafe { std::slice::from_raw_parts_mut(predecessors, len) };
    for (source, (dist, pred)) in result.rows().enumerate() {
        let row = source * n;
        dist_out[row..row + n].copy_from_slice(dist);
        for (slot, p) in pred_out[row..row + n].iter_mut().zip(pred) {
            *slot = p.map_or(-1, |id| id as i64);
        }
    }

    MLC_OK
}
