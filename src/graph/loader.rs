//! Reading networks from delimited text.
//!
//! The node file carries the user-defined node id in its first column. The
//! link file carries `link id, origin node id, destination node id, length`
//! in its first four columns. Both files start with a header row, which is
//! skipped. Further columns are ignored. Lengths must be finite and
//! non-negative.

use std::fmt::Debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use num_traits::{Float, NumCast, Zero};

use crate::graph::network::{Network, NetworkBuilder};
use crate::{Error, Result};

/// Loads a network from a node file and a link file
pub fn load_network<W, P, Q>(node_file: P, link_file: Q, delimiter: u8) -> Result<Network<W>>
where
    W: Float + Zero + Debug + Copy,
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let mut builder = NetworkBuilder::new();

    let nodes = read_nodes(File::open(node_file.as_ref())?, delimiter, &mut builder)?;
    info!("read {} nodes from {}", nodes, node_file.as_ref().display());

    let links = read_links(File::open(link_file.as_ref())?, delimiter, &mut builder)?;
    info!("read {} links from {}", links, link_file.as_ref().display());

    Ok(builder.build())
}

/// Registers every node record of `reader` and returns how many were read
pub fn read_nodes<W, R>(reader: R, delimiter: u8, builder: &mut NetworkBuilder<W>) -> Result<usize>
where
    W: Float + Zero + Debug + Copy,
    R: Read,
{
    let mut count = 0;
    for record in csv_reader(reader, delimiter).records() {
        let record = record?;
        let uid = field(&record, 0, "node id")?;
        builder.register_node(uid)?;
        count += 1;
    }
    debug!("registered {} nodes", count);
    Ok(count)
}

/// Registers every link record of `reader` and returns how many were read.
/// Both endpoints must have been registered already.
pub fn read_links<W, R>(reader: R, delimiter: u8, builder: &mut NetworkBuilder<W>) -> Result<usize>
where
    W: Float + Zero + Debug + Copy,
    R: Read,
{
    let mut count = 0;
    for record in csv_reader(reader, delimiter).records() {
        let record = record?;
        let uid = field(&record, 0, "link id")?;
        let origin = field(&record, 1, "from node id")?;
        let destination = field(&record, 2, "to node id")?;
        let raw_length = field(&record, 3, "length")?;

        let length = raw_length
            .parse::<f64>()
            .ok()
            .filter(|len| len.is_finite() && *len >= 0.0)
            .and_then(|len| <W as NumCast>::from(len))
            .ok_or_else(|| Error::Parse {
                line: line_of(&record),
                message: format!("invalid link length '{}'", raw_length),
            })?;

        builder.register_link(uid, origin, destination, length)?;
        count += 1;
    }
    debug!("registered {} links", count);
    Ok(count)
}

fn csv_reader<R: Read>(reader: R, delimiter: u8) -> csv::Reader<R> {
    ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader)
}

fn field<'r>(record: &'r StringRecord, index: usize, name: &str) -> Result<&'r str> {
    match record.get(index) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::Parse {
            line: line_of(record),
            message: format!("missing {}", name),
        }),
    }
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|pos| pos.line()).unwrap_or(0)
}
