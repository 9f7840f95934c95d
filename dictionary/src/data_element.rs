//! Data element dictionary implementation

use std::collections::HashMap;

use dcmdata_core::dictionary::{DataDictionary, DictionaryEntryRef};
use dcmdata_core::Tag;
use once_cell::sync::Lazy;

use crate::entries::ENTRIES;

static DICT: Lazy<StandardDictionaryRegistry> = Lazy::new(init_dictionary);

/// Retrieve a singleton instance of the standard dictionary registry.
///
/// Note that one does not generally have to call this unless
/// retrieving the underlying registry is important.
/// The unit type [`StandardDataDictionary`] already provides a lazily
/// loaded singleton implementing the necessary traits.
#[inline]
pub fn registry() -> &'static StandardDictionaryRegistry {
    &DICT
}

/// The data struct actually containing the standard dictionary.
///
/// This structure is made opaque via the unit type
/// [`StandardDataDictionary`], which provides a lazily loaded singleton.
#[derive(Debug)]
pub struct StandardDictionaryRegistry {
    /// mapping: tag → entry
    by_tag: HashMap<Tag, &'static DictionaryEntryRef<'static>>,
    /// mapping: keyword → entry
    by_keyword: HashMap<&'static str, &'static DictionaryEntryRef<'static>>,
}

impl StandardDictionaryRegistry {
    fn new() -> StandardDictionaryRegistry {
        StandardDictionaryRegistry {
            by_tag: HashMap::with_capacity(ENTRIES.len()),
            by_keyword: HashMap::with_capacity(ENTRIES.len()),
        }
    }

    /// record the given dictionary entry reference
    fn index(&mut self, entry: &'static DictionaryEntryRef<'static>) -> &mut Self {
        self.by_tag.insert(entry.tag, entry);
        self.by_keyword.insert(entry.keyword, entry);
        self
    }
}

fn init_dictionary() -> StandardDictionaryRegistry {
    let mut d = StandardDictionaryRegistry::new();
    for entry in ENTRIES {
        d.index(entry);
    }
    d
}

/// A data element dictionary which consults
/// the library's standard DICOM attribute registry.
///
/// This is the type which would generally be used whenever a data
/// element dictionary is needed, such as when creating data elements.
///
/// The dictionary index is automatically initialized upon the first use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardDataDictionary;

impl DataDictionary for StandardDataDictionary {
    type Entry = DictionaryEntryRef<'static>;

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        registry().by_tag.get(&tag).copied()
    }

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        registry().by_keyword.get(name).copied()
    }
}
