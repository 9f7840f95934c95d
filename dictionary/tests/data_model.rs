//! End-to-end scenarios for building and inspecting data sets
//! with the standard dictionary.

use dcmdata_core::{DataElement, DataSet, Error, Sequence};
use dcmdata_dictionary::tags;
use dcmdata_dictionary::StandardDataDictionary;

const DICT: StandardDataDictionary = StandardDataDictionary;

#[test]
fn patient_name_splits_into_components() {
    let mut e = DataElement::new(&DICT, tags::PATIENT_NAME, 0).unwrap();
    e.set_string("Doe^John\\Smith^Jane").unwrap();

    assert_eq!(e.multiplicity(), 2);
    assert_eq!(e.string(0).unwrap(), "Doe^John");
    assert_eq!(e.string(1).unwrap(), "Smith^Jane");
    // 8 + 1 + 10 bytes, rounded up to even
    assert_eq!(e.length(), 20);
}

#[test]
fn rows_holds_a_single_unsigned_short() {
    let mut e = DataElement::new(&DICT, tags::ROWS, 0).unwrap();
    e.set_integer(512).unwrap();

    assert_eq!(e.multiplicity(), 1);
    assert_eq!(e.length(), 2);
    assert_eq!(e.integer(0).unwrap(), 512);
}

#[test]
fn pixel_spacing_is_a_decimal_string_pair() {
    let mut e = DataElement::new(&DICT, tags::PIXEL_SPACING, 0).unwrap();
    e.set_string("0.5\\0.5").unwrap();

    assert_eq!(e.multiplicity(), 2);
    assert_eq!(e.string(0).unwrap(), "0.5");
    assert_eq!(e.string(1).unwrap(), "0.5");
    // 3 + 1 + 3 bytes, rounded up to even
    assert_eq!(e.length(), 8);
}

fn item_with_rows(value: i64) -> DataSet {
    let mut item = DataSet::new();
    let mut e = DataElement::new(&DICT, tags::ROWS, 0).unwrap();
    e.set_integer(value).unwrap();
    item.insert(e).unwrap();
    item
}

#[test]
fn sequence_element_length_sums_children_and_clones_deeply() {
    let mut seq = Sequence::new();
    seq.append(item_with_rows(256)).unwrap();
    seq.append(item_with_rows(512)).unwrap();

    let mut outer = DataElement::new(&DICT, tags::ANATOMIC_REGION_SEQUENCE, 0).unwrap();
    outer.set_sequence(seq).unwrap();
    // two items, each holding one 2-byte element
    assert_eq!(outer.length(), 4);

    let copy = outer.clone();
    assert_eq!(copy, outer);
    drop(outer);

    let seq = copy.sequence().unwrap();
    assert_eq!(seq.len(), 2);
    let item = seq.get(1).unwrap();
    assert!(item.is_locked());
    assert_eq!(item.element(tags::ROWS).unwrap().integer(0).unwrap(), 512);
}

#[test]
fn locked_data_set_rejects_further_inserts() {
    let mut ds = DataSet::new();
    let mut name = DataElement::new(&DICT, tags::PATIENT_NAME, 0).unwrap();
    name.set_string("Doe^John").unwrap();
    ds.insert(name).unwrap();
    ds.lock();

    let mut modality = DataElement::new(&DICT, tags::MODALITY, 0).unwrap();
    modality.set_string("SM").unwrap();
    assert!(matches!(
        ds.insert(modality),
        Err(Error::DataSetLocked { .. })
    ));
    assert_eq!(ds.len(), 1);
}

#[test]
fn insert_contains_and_count_properties() {
    let mut ds = DataSet::new();
    let mut e = DataElement::new(&DICT, tags::MODALITY, 0).unwrap();
    e.set_string("SM").unwrap();
    ds.insert(e).unwrap();
    assert_eq!(ds.len(), 1);
    assert!(ds.get(tags::MODALITY).is_some());

    // duplicate insertion fails and the original survives
    let mut e = DataElement::new(&DICT, tags::MODALITY, 0).unwrap();
    e.set_string("CT").unwrap();
    assert!(matches!(ds.insert(e), Err(Error::TagExists { .. })));
    assert_eq!(ds.len(), 1);
    assert_eq!(
        ds.element(tags::MODALITY).unwrap().string(0).unwrap(),
        "SM"
    );

    // removing the tag restores the previous count
    ds.remove(tags::MODALITY).unwrap();
    assert!(ds.is_empty());
    assert!(ds.get(tags::MODALITY).is_none());
}

#[test]
fn sorted_tags_are_strictly_ascending() {
    let mut ds = DataSet::new();
    for tag in [tags::PIXEL_DATA, tags::PATIENT_NAME, tags::MODALITY, tags::ROWS] {
        // unassigned elements are fine for ordering purposes
        ds.insert(DataElement::new(&DICT, tag, 0).unwrap()).unwrap();
    }
    let sorted = ds.sorted_tags();
    assert!(sorted.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(
        sorted,
        vec![tags::MODALITY, tags::PATIENT_NAME, tags::ROWS, tags::PIXEL_DATA]
    );
}

#[test]
fn get_clone_yields_an_independent_element() {
    let mut ds = DataSet::new();
    let mut e = DataElement::new(&DICT, tags::PATIENT_ID, 0).unwrap();
    e.set_string("1234").unwrap();
    ds.insert(e).unwrap();

    let copy = ds.get_clone(tags::PATIENT_ID).unwrap();
    drop(ds);
    assert_eq!(copy.string(0).unwrap(), "1234");
}

#[test]
fn very_long_integers_round_trip() {
    let mut e = DataElement::new(&DICT, tags::SELECTOR_SV_VALUE, 0).unwrap();
    e.set_integer(-(1 << 40)).unwrap();
    assert_eq!(e.length(), 8);
    assert_eq!(e.integer(0).unwrap(), -(1 << 40));

    let mut e = DataElement::new(&DICT, tags::SELECTOR_UV_VALUE, 0).unwrap();
    e.set_numeric_multi(vec![1u64 << 40, 7]).unwrap();
    assert_eq!(e.length(), 16);
    assert_eq!(e.integer(0).unwrap(), 1 << 40);
    assert_eq!(e.to_int::<u64>(1).unwrap(), 7);
}

#[test]
fn real_world_value_coefficients_are_doubles() {
    let mut e = DataElement::new(&DICT, tags::REAL_WORLD_VALUE_SLOPE, 0).unwrap();
    e.set_double(0.001953125).unwrap();
    assert_eq!(e.length(), 8);
    assert_eq!(e.double(0).unwrap(), 0.001953125);
    assert!(matches!(e.integer(0), Err(Error::IncompatibleVr { .. })));
}

#[test]
fn unknown_tags_cannot_become_elements() {
    assert!(matches!(
        DataElement::new(&DICT, dcmdata_core::Tag(0x0051, 0x0099), 0),
        Err(Error::UnknownTag { .. })
    ));
}

#[test]
fn dumping_a_small_object_mentions_keywords_and_values() {
    let mut ds = DataSet::new();
    let mut name = DataElement::new(&DICT, tags::PATIENT_NAME, 0).unwrap();
    name.set_string("Doe^John").unwrap();
    ds.insert(name).unwrap();

    let mut item = DataSet::new();
    let mut cols = DataElement::new(&DICT, tags::COLUMNS, 0).unwrap();
    cols.set_integer(1024).unwrap();
    item.insert(cols).unwrap();
    let mut seq = Sequence::new();
    seq.append(item).unwrap();
    let mut region = DataElement::new(&DICT, tags::ANATOMIC_REGION_SEQUENCE, 0).unwrap();
    region.set_sequence(seq).unwrap();
    ds.insert(region).unwrap();

    let mut out = Vec::new();
    dcmdata_core::dump::dump_dataset(&mut out, &DICT, &ds, 0).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("(0008,2218) AnatomicRegionSequence | SQ"));
    assert!(out.contains("---Item #1---"));
    assert!(out.contains("Columns | US | 2 | 1024"));
    assert!(out.contains("(0010,0010) PatientName | PN | 8 | Doe^John"));
}
