//! Pixel data value objects: the decoded [`Frame`] descriptor and the
//! [`BasicOffsetTable`] indexing frames inside encapsulated pixel data.

use std::fmt;

use itertools::Itertools;
use snafu::ensure;

use crate::error::{
    BadBitsAllocatedSnafu, BadBitsStoredSnafu, BadPixelRepresentationSnafu,
    BadPlanarConfigurationSnafu, EmptyOffsetTableSnafu, EmptyPixelDataSnafu,
    FrameNumberOutOfRangeSnafu, Result,
};

/// Implicit VR Little Endian: Default Transfer Syntax for DICOM.
pub const IMPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2";
/// Explicit VR Little Endian.
pub const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";
/// Deflated Explicit VR Little Endian.
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1.99";
/// Explicit VR Big Endian (retired).
pub const EXPLICIT_VR_BIG_ENDIAN: &str = "1.2.840.10008.1.2.2";

/// Whether the transfer syntax with the given UID stores pixel data in
/// encapsulated (fragmented) form. Every transfer syntax except the four
/// native-endianness ones does.
pub fn is_encapsulated_transfer_syntax(uid: &str) -> bool {
    uid != IMPLICIT_VR_LITTLE_ENDIAN
        && uid != EXPLICIT_VR_LITTLE_ENDIAN
        && uid != DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN
        && uid != EXPLICIT_VR_BIG_ENDIAN
}

/// The image pixel description of a frame, gathered from the
/// Image Pixel module attributes of the enclosing data set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameInfo {
    /// Number of rows in the frame.
    pub rows: u16,
    /// Number of columns in the frame.
    pub columns: u16,
    /// Number of samples (color channels) per pixel.
    pub samples_per_pixel: u16,
    /// Number of bits allocated per sample.
    pub bits_allocated: u16,
    /// Number of bits actually used per sample.
    pub bits_stored: u16,
    /// 0 for unsigned, 1 for two's complement sample values.
    pub pixel_representation: u16,
    /// 0 for interleaved, 1 for separate color planes.
    pub planar_configuration: u16,
    /// Photometric interpretation term, e.g. `MONOCHROME2` or `RGB`.
    pub photometric_interpretation: String,
    /// UID of the transfer syntax the pixel data was encoded with.
    pub transfer_syntax_uid: String,
}

/// One decoded image plane of a (possibly multi-frame) image.
///
/// A frame is created fully populated and validated, and is immutable
/// thereafter; it owns its pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    number: u32,
    data: Vec<u8>,
    info: FrameInfo,
    high_bit: u16,
}

impl Frame {
    /// Create a frame descriptor from its pixel data and image
    /// pixel description.
    ///
    /// `number` is the 1-based frame number within the enclosing image.
    /// Fails when the pixel data is empty, when bits allocated or bits
    /// stored is neither 1 nor a multiple of 8, or when pixel
    /// representation or planar configuration is not 0 or 1.
    pub fn new(number: u32, data: Vec<u8>, info: FrameInfo) -> Result<Self> {
        ensure!(!data.is_empty(), EmptyPixelDataSnafu);
        ensure!(
            info.bits_allocated == 1 || info.bits_allocated % 8 == 0,
            BadBitsAllocatedSnafu {
                bits_allocated: info.bits_allocated,
            }
        );
        ensure!(
            info.bits_stored == 1 || info.bits_stored % 8 == 0,
            BadBitsStoredSnafu {
                bits_stored: info.bits_stored,
            }
        );
        ensure!(
            info.pixel_representation <= 1,
            BadPixelRepresentationSnafu {
                value: info.pixel_representation,
            }
        );
        ensure!(
            info.planar_configuration <= 1,
            BadPlanarConfigurationSnafu {
                value: info.planar_configuration,
            }
        );
        let high_bit = info.bits_stored.saturating_sub(1);
        Ok(Frame {
            number,
            data,
            info,
            high_bit,
        })
    }

    /// The 1-based frame number.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// The frame's pixel data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The byte length of the pixel data.
    pub fn len(&self) -> u32 {
        self.data.len() as u32
    }

    /// Whether the pixel data is empty. Never true for a
    /// successfully constructed frame.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of rows in the frame.
    pub fn rows(&self) -> u16 {
        self.info.rows
    }

    /// Number of columns in the frame.
    pub fn columns(&self) -> u16 {
        self.info.columns
    }

    /// Number of samples (color channels) per pixel.
    pub fn samples_per_pixel(&self) -> u16 {
        self.info.samples_per_pixel
    }

    /// Number of bits allocated per sample.
    pub fn bits_allocated(&self) -> u16 {
        self.info.bits_allocated
    }

    /// Number of bits actually used per sample.
    pub fn bits_stored(&self) -> u16 {
        self.info.bits_stored
    }

    /// The most significant bit position of a sample,
    /// derived as bits stored − 1.
    pub fn high_bit(&self) -> u16 {
        self.high_bit
    }

    /// 0 for unsigned, 1 for two's complement sample values.
    pub fn pixel_representation(&self) -> u16 {
        self.info.pixel_representation
    }

    /// 0 for interleaved, 1 for separate color planes.
    pub fn planar_configuration(&self) -> u16 {
        self.info.planar_configuration
    }

    /// Photometric interpretation term.
    pub fn photometric_interpretation(&self) -> &str {
        &self.info.photometric_interpretation
    }

    /// UID of the transfer syntax the pixel data was encoded with.
    pub fn transfer_syntax_uid(&self) -> &str {
        &self.info.transfer_syntax_uid
    }
}

/// The Basic Offset Table: one byte offset per frame of an encapsulated
/// pixel data element, relative to a common reference point.
///
/// Stored offsets are adjusted by a constant first-frame offset
/// on every lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicOffsetTable {
    offsets: Vec<i64>,
    first_frame_offset: i64,
}

impl BasicOffsetTable {
    /// Create an offset table from per-frame offsets and the constant
    /// offset of the first frame. Fails when no offsets are provided.
    pub fn new(offsets: Vec<i64>, first_frame_offset: i64) -> Result<Self> {
        ensure!(!offsets.is_empty(), EmptyOffsetTableSnafu);
        Ok(BasicOffsetTable {
            offsets,
            first_frame_offset,
        })
    }

    /// The number of frames covered by the table.
    pub fn num_frames(&self) -> u32 {
        self.offsets.len() as u32
    }

    /// The constant offset added to every stored frame offset.
    pub fn first_frame_offset(&self) -> i64 {
        self.first_frame_offset
    }

    /// The adjusted byte offset of the frame with the given
    /// 1-based number.
    pub fn frame_offset(&self, number: u32) -> Result<i64> {
        ensure!(
            number >= 1 && number <= self.num_frames(),
            FrameNumberOutOfRangeSnafu {
                number,
                num_frames: self.num_frames(),
            }
        );
        Ok(self.offsets[number as usize - 1] + self.first_frame_offset)
    }
}

/// Renders the adjusted offsets as a bracketed comma-separated list.
impl fmt::Display for BasicOffsetTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{}]",
            self.offsets
                .iter()
                .map(|offset| offset + self.first_frame_offset)
                .format(",")
        )
    }
}
