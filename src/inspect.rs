use std::fs;
use std::path::Path;

use hdf5::types::{TypeDescriptor, VarLenUnicode};
use hdf5::File;
use log::debug;

use crate::error::Result;

/// Contents of a generated fixture file, as read back through the HDF5 library.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureSummary {
    /// Names of all members of the root group.
    pub members: Vec<String>,
    /// Names of all attributes attached to the root group or the dataset.
    pub attributes: Vec<String>,
    pub shape: Vec<usize>,
    pub descriptor: TypeDescriptor,
    pub records: Vec<String>,
    /// Size of the file on disk in bytes.
    pub file_size: u64,
}

impl FixtureSummary {
    pub fn is_variable_length_string(&self) -> bool {
        matches!(self.descriptor, TypeDescriptor::VarLenUnicode | TypeDescriptor::VarLenAscii)
    }

    pub fn record_lengths(&self) -> Vec<usize> {
        self.records.iter().map(String::len).collect()
    }

    /// Returns true if all records are byte-identical.
    pub fn records_identical(&self) -> bool {
        self.records.windows(2).all(|w| w[0] == w[1])
    }

    pub fn is_lowercase_ascii(&self) -> bool {
        self.records.iter().all(|r| r.bytes().all(|c| c.is_ascii_lowercase()))
    }
}

/// Opens a fixture read-only and reads back its structure and records.
pub fn inspect<P: AsRef<Path>>(path: P, dataset: &str) -> Result<FixtureSummary> {
    let path = path.as_ref();
    let file_size = fs::metadata(path)?.len();
    let file = File::open(path)?;
    let ds = file.dataset(dataset)?;
    let mut attributes = file.attr_names()?;
    attributes.extend(ds.attr_names()?);
    let records = ds.read_1d::<VarLenUnicode>()?.iter().map(|r| r.as_str().to_owned()).collect();
    let summary = FixtureSummary {
        members: file.member_names()?,
        attributes,
        shape: ds.shape(),
        descriptor: ds.dtype()?.to_descriptor()?,
        records,
        file_size,
    };
    debug!(
        "Read {} records with shape {:?} from {}",
        summary.records.len(),
        summary.shape,
        path.display()
    );
    Ok(summary)
}
