//! Error types shared by the data model.
//!
//! Every contract violation in this crate is reported through the [`Error`]
//! enum; fallible operations return the crate-wide [`Result`] alias.
//! Operations never retry and never partially succeed: on error, the
//! affected object is left as it was, except where the documentation of an
//! operation states that it consumes its input.

use snafu::Snafu;

use crate::header::{Tag, VR};

/// The main error type for contract violations in the data model.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The attribute dictionary knows nothing about the tag,
    /// so no value representation can be assigned.
    #[snafu(display("no dictionary entry for tag {}", tag))]
    UnknownTag {
        /// the tag looked up
        tag: Tag,
    },

    /// A data element can only be assigned a value once.
    #[snafu(display("data element {} was already assigned a value", tag))]
    AlreadyAssigned {
        /// the affected element's tag
        tag: Tag,
    },

    /// The data element has not been assigned a value yet.
    #[snafu(display("data element {} has not been assigned a value", tag))]
    NotAssigned {
        /// the affected element's tag
        tag: Tag,
    },

    /// The element's value representation does not admit
    /// the requested kind of value.
    #[snafu(display(
        "data element {} with VR {} does not hold a {} value",
        tag,
        vr,
        requested
    ))]
    IncompatibleVr {
        /// the affected element's tag
        tag: Tag,
        /// the element's actual value representation
        vr: VR,
        /// the kind of value requested by the caller
        requested: &'static str,
    },

    /// The scalar type of a numeric value array does not match
    /// the element's value representation.
    #[snafu(display(
        "numeric value array of {} does not match VR {} of data element {}",
        got,
        vr,
        tag
    ))]
    NumericTypeMismatch {
        /// the affected element's tag
        tag: Tag,
        /// the element's value representation
        vr: VR,
        /// the scalar type of the provided array
        got: &'static str,
    },

    /// A value setter was invoked with no values at all.
    #[snafu(display("no values provided for data element {}", tag))]
    NoValues {
        /// the affected element's tag
        tag: Tag,
    },

    /// The element's byte length disagrees with its value multiplicity
    /// and scalar size.
    #[snafu(display(
        "bad length {} for numeric data element {} with VR {} and multiplicity {}",
        length,
        tag,
        vr,
        multiplicity
    ))]
    BadNumericLength {
        /// the affected element's tag
        tag: Tag,
        /// the element's value representation
        vr: VR,
        /// the recorded byte length
        length: u32,
        /// the number of values
        multiplicity: u32,
    },

    /// A string value exceeds the maximum length of the
    /// value representation.
    #[snafu(display(
        "value of data element {} exceeds the maximum length of VR {} ({} bytes)",
        tag,
        vr,
        capacity
    ))]
    CapacityExceeded {
        /// the affected element's tag
        tag: Tag,
        /// the element's value representation
        vr: VR,
        /// the maximum byte length per value
        capacity: u32,
    },

    /// A value index beyond the element's multiplicity.
    #[snafu(display(
        "index {} out of range for data element {} with multiplicity {}",
        index,
        tag,
        multiplicity
    ))]
    IndexOutOfRange {
        /// the affected element's tag
        tag: Tag,
        /// the requested value index
        index: u32,
        /// the number of values
        multiplicity: u32,
    },

    /// The requested integer conversion would not preserve the value.
    #[snafu(display(
        "value #{} of data element {} does not fit the requested type",
        index,
        tag
    ))]
    NarrowConvert {
        /// the affected element's tag
        tag: Tag,
        /// the requested value index
        index: u32,
    },

    /// The data set is locked and rejects every mutation.
    #[snafu(display("data set is locked, cannot insert or remove {}", tag))]
    DataSetLocked {
        /// the tag of the element being inserted or removed
        tag: Tag,
    },

    /// A data element with the same tag is already in the data set.
    #[snafu(display("data element {} already exists in data set", tag))]
    TagExists {
        /// the duplicate tag
        tag: Tag,
    },

    /// No data element with the given tag is in the data set.
    #[snafu(display("no data element {} in data set", tag))]
    NoSuchTag {
        /// the missing tag
        tag: Tag,
    },

    /// The sequence is locked and rejects every mutation.
    #[snafu(display("sequence is locked and cannot be modified"))]
    SequenceLocked,

    /// An item index beyond the sequence's length.
    #[snafu(display("item index {} out of range (sequence has {} items)", index, len))]
    ItemOutOfRange {
        /// the requested item index
        index: u32,
        /// the number of items in the sequence
        len: u32,
    },

    /// Frame pixel data must not be empty.
    #[snafu(display("frame pixel data cannot be empty"))]
    EmptyPixelData,

    /// Bits allocated must be 1 or a multiple of 8.
    #[snafu(display("wrong number of bits allocated ({})", bits_allocated))]
    BadBitsAllocated {
        /// the rejected value
        bits_allocated: u16,
    },

    /// Bits stored must be 1 or a multiple of 8.
    #[snafu(display("wrong number of bits stored ({})", bits_stored))]
    BadBitsStored {
        /// the rejected value
        bits_stored: u16,
    },

    /// Pixel representation must be 0 or 1.
    #[snafu(display("wrong pixel representation ({})", value))]
    BadPixelRepresentation {
        /// the rejected value
        value: u16,
    },

    /// Planar configuration must be 0 or 1.
    #[snafu(display("wrong planar configuration ({})", value))]
    BadPlanarConfiguration {
        /// the rejected value
        value: u16,
    },

    /// A basic offset table needs at least one frame offset.
    #[snafu(display("no frame offsets provided for basic offset table"))]
    EmptyOffsetTable,

    /// Frame numbers are 1-based and bounded by the number of frames.
    #[snafu(display(
        "frame number {} out of range (table covers {} frames)",
        number,
        num_frames
    ))]
    FrameNumberOutOfRange {
        /// the requested frame number
        number: u32,
        /// the number of frames in the table
        num_frames: u32,
    },
}

/// Type alias for a result from this library.
pub type Result<T, E = Error> = std::result::Result<T, E>;
