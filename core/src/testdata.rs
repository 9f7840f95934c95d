//! A small attribute dictionary for the crate's unit tests,
//! covering every VR class and numeric scalar type.

use crate::dictionary::{DataDictionary, DictionaryEntryRef};
use crate::header::{Tag, VR};

static ENTRIES: &[DictionaryEntryRef<'static>] = &[
    DictionaryEntryRef {
        tag: Tag(0x0008, 0x2218),
        keyword: "AnatomicRegionSequence",
        vr: VR::SQ,
    },
    DictionaryEntryRef {
        tag: Tag(0x0010, 0x0010),
        keyword: "PatientName",
        vr: VR::PN,
    },
    DictionaryEntryRef {
        tag: Tag(0x0010, 0x1010),
        keyword: "PatientAge",
        vr: VR::AS,
    },
    DictionaryEntryRef {
        tag: Tag(0x0010, 0x4000),
        keyword: "PatientComments",
        vr: VR::LT,
    },
    DictionaryEntryRef {
        tag: Tag(0x0020, 0x000D),
        keyword: "StudyInstanceUID",
        vr: VR::UI,
    },
    DictionaryEntryRef {
        tag: Tag(0x0028, 0x0010),
        keyword: "Rows",
        vr: VR::US,
    },
    DictionaryEntryRef {
        tag: Tag(0x0028, 0x0011),
        keyword: "Columns",
        vr: VR::US,
    },
    DictionaryEntryRef {
        tag: Tag(0x0028, 0x0030),
        keyword: "PixelSpacing",
        vr: VR::DS,
    },
    DictionaryEntryRef {
        tag: Tag(0x7FE0, 0x0010),
        keyword: "PixelData",
        vr: VR::OB,
    },
    // a private vendor group exercising the remaining scalar types
    DictionaryEntryRef {
        tag: Tag(0x0019, 0x0100),
        keyword: "VendorSignedShort",
        vr: VR::SS,
    },
    DictionaryEntryRef {
        tag: Tag(0x0019, 0x0101),
        keyword: "VendorSignedLong",
        vr: VR::SL,
    },
    DictionaryEntryRef {
        tag: Tag(0x0019, 0x0102),
        keyword: "VendorSignedVeryLong",
        vr: VR::SV,
    },
    DictionaryEntryRef {
        tag: Tag(0x0019, 0x0103),
        keyword: "VendorUnsignedLong",
        vr: VR::UL,
    },
    DictionaryEntryRef {
        tag: Tag(0x0019, 0x0104),
        keyword: "VendorUnsignedVeryLong",
        vr: VR::UV,
    },
    DictionaryEntryRef {
        tag: Tag(0x0019, 0x0105),
        keyword: "VendorFloat",
        vr: VR::FL,
    },
    DictionaryEntryRef {
        tag: Tag(0x0019, 0x0106),
        keyword: "VendorDouble",
        vr: VR::FD,
    },
];

/// A fixed-table dictionary for tests.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct TestDictionary;

impl DataDictionary for TestDictionary {
    type Entry = DictionaryEntryRef<'static>;

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        ENTRIES.iter().find(|e| e.tag == tag)
    }

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        ENTRIES.iter().find(|e| e.keyword == name)
    }
}
