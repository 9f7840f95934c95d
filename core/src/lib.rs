#![deny(trivial_casts, trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core data-model library for DICOM Part 5
//! (Data Structures and Encoding), containing the concepts and data
//! structures of the in-memory representation of DICOM content:
//! data elements, data sets, sequences, decoded frames and the basic
//! offset table.
//!
//! Elements are validated against an attribute dictionary
//! (see the [`dictionary`] module for the contract and the
//! `dcmdata-dictionary` crate for the standard implementation),
//! data sets and sequences carry the one-way locks that make a fully
//! assembled object tree safe to share with readers, and every
//! container owns its contents, so dropping a tree tears it down
//! recursively.

pub mod dataset;
pub mod dictionary;
pub mod dump;
pub mod element;
pub mod error;
pub mod header;
pub mod pixeldata;
pub mod sequence;
pub mod value;

pub use dataset::DataSet;
pub use dictionary::DataDictionary;
pub use element::DataElement;
pub use error::{Error, Result};
pub use header::{Tag, VrClass, VR};
pub use pixeldata::{is_encapsulated_transfer_syntax, BasicOffsetTable, Frame, FrameInfo};
pub use sequence::Sequence;
pub use value::{ElementValue, NumericValue, C};

#[cfg(test)]
pub(crate) mod testdata;
