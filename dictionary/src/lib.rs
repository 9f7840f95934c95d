//! This crate implements a standard DICOM attribute dictionary
//! for the `dcmdata` data model.
//!
//! ## Run-time dictionary
//!
//! [`StandardDataDictionary`] implements the
//! [`DataDictionary`](dcmdata_core::dictionary::DataDictionary)
//! contract of the core crate over a registry of standard attributes,
//! indexed both by tag and by keyword. The registry is loaded lazily
//! upon first use and is provided as a singleton behind a unit type
//! for efficiency and ease of use.
//!
//! The attribute records cover the common file meta, identification,
//! patient, acquisition, relationship, image pixel, whole-slide
//! microscopy and pixel data attributes; the registry design does not
//! depend on the number of records.
//!
//! ## Constants
//!
//! The [`tags`] module declares `const` tags for frequently used
//! attributes, performing the keyword-to-tag mapping at compile time.

pub mod data_element;
pub mod entries;
pub mod tags;

pub use data_element::{StandardDataDictionary, StandardDictionaryRegistry};

#[cfg(test)]
mod tests {
    use dcmdata_core::dictionary::{DataDictionary, DictionaryEntry};
    use dcmdata_core::{Tag, VR};

    use crate::StandardDataDictionary;

    /// tests for just a few attributes to make sure that the
    /// registry was installed correctly
    #[test]
    fn tag_constants_available() {
        use crate::tags::*;
        assert_eq!(PATIENT_NAME, Tag(0x0010, 0x0010));
        assert_eq!(MODALITY, Tag(0x0008, 0x0060));
        assert_eq!(PIXEL_DATA, Tag(0x7FE0, 0x0010));
        assert_eq!(ROWS, Tag(0x0028, 0x0010));
    }

    #[test]
    fn lookup_by_tag() {
        let dict = StandardDataDictionary;
        let entry = dict.by_tag(Tag(0x0010, 0x0010)).unwrap();
        assert_eq!(entry.keyword(), "PatientName");
        assert_eq!(entry.vr(), VR::PN);

        let entry = dict.by_tag(Tag(0x0028, 0x0030)).unwrap();
        assert_eq!(entry.keyword(), "PixelSpacing");
        assert_eq!(entry.vr(), VR::DS);

        assert!(dict.by_tag(Tag(0x4321, 0x1234)).is_none());
    }

    #[test]
    fn lookup_by_keyword() {
        let dict = StandardDataDictionary;
        let entry = dict.by_name("TransferSyntaxUID").unwrap();
        assert_eq!(entry.tag(), Tag(0x0002, 0x0010));
        assert_eq!(entry.vr(), VR::UI);

        assert!(dict.by_name("NoSuchAttribute").is_none());
        // keywords are case sensitive
        assert!(dict.by_name("patientname").is_none());
    }

    /// every record is reachable by its own keyword and tag
    #[test]
    fn registry_is_consistent() {
        let dict = StandardDataDictionary;
        for entry in crate::entries::ENTRIES {
            let by_tag = dict.by_tag(entry.tag).unwrap();
            assert_eq!(by_tag.keyword(), entry.keyword);
            assert_eq!(by_tag.vr(), entry.vr);
            let by_name = dict.by_name(entry.keyword).unwrap();
            assert_eq!(by_name.tag(), entry.tag);
        }
    }

    /// tag constants agree with the registry records
    #[test]
    fn tag_constants_agree_with_entries() {
        let dict = StandardDataDictionary;
        for &(tag, keyword) in &[
            (crate::tags::PATIENT_NAME, "PatientName"),
            (crate::tags::PIXEL_SPACING, "PixelSpacing"),
            (crate::tags::ANATOMIC_REGION_SEQUENCE, "AnatomicRegionSequence"),
            (crate::tags::NUMBER_OF_FRAMES, "NumberOfFrames"),
            (crate::tags::EXTENDED_OFFSET_TABLE, "ExtendedOffsetTable"),
        ] {
            assert_eq!(dict.by_tag(tag).unwrap().keyword(), keyword);
        }
    }
}
