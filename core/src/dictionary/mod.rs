//! The concept of a DICOM data dictionary, as consumed by the data model.
//!
//! The core does not ship attribute data: element creation consults an
//! implementation of [`DataDictionary`] to fix the value representation of
//! a tag, and dumping consults it for human-readable keywords. A standard
//! dictionary implementation is provided by a separate crate.

use crate::header::{Tag, VR};

/// Type trait for a dictionary of DICOM attributes.
///
/// Attribute dictionaries provide the means to map a tag to its canonical
/// value representation and keyword, and vice versa. The methods herein
/// have no generic parameters, so as to enable being used as a trait
/// object.
pub trait DataDictionary {
    /// The type of the dictionary entry.
    type Entry: DictionaryEntry;

    /// Fetch an entry by its tag.
    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry>;

    /// Fetch an entry by its usual keyword
    /// (e.g. "PatientName" or "SOPInstanceUID").
    /// Keywords are case sensitive and not separated by spaces.
    fn by_name(&self, name: &str) -> Option<&Self::Entry>;
}

/// The dictionary entry data type, representing a DICOM attribute.
pub trait DictionaryEntry {
    /// The attribute tag.
    fn tag(&self) -> Tag;
    /// The keyword of the attribute, with no spaces, usually in UpperCamelCase.
    fn keyword(&self) -> &str;
    /// The canonical value representation of the attribute.
    fn vr(&self) -> VR;
}

/// A data type for a dictionary entry with a string slice for its keyword.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DictionaryEntryRef<'a> {
    /// The attribute tag
    pub tag: Tag,
    /// The keyword of the attribute
    pub keyword: &'a str,
    /// The canonical value representation of the attribute
    pub vr: VR,
}

impl DictionaryEntry for DictionaryEntryRef<'_> {
    fn tag(&self) -> Tag {
        self.tag
    }
    fn keyword(&self) -> &str {
        self.keyword
    }
    fn vr(&self) -> VR {
        self.vr
    }
}

/// A data type for a dictionary entry with full ownership.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DictionaryEntryBuf {
    /// The attribute tag
    pub tag: Tag,
    /// The keyword of the attribute
    pub keyword: String,
    /// The canonical value representation of the attribute
    pub vr: VR,
}

impl DictionaryEntry for DictionaryEntryBuf {
    fn tag(&self) -> Tag {
        self.tag
    }
    fn keyword(&self) -> &str {
        self.keyword.as_str()
    }
    fn vr(&self) -> VR {
        self.vr
    }
}
