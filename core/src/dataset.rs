//! The DICOM data set: an insertion-ordered collection of data elements
//! with unique tags and a one-way lock.

use std::cell::Cell;

use indexmap::IndexMap;
use snafu::{ensure, OptionExt};
use tracing::debug;

use crate::element::DataElement;
use crate::error::{DataSetLockedSnafu, NoSuchTagSnafu, Result, TagExistsSnafu};
use crate::header::Tag;

/// A collection of data elements, unique by tag.
///
/// Elements are enumerated in insertion order;
/// a tag-sorted view is available through [`sorted_tags`][1].
///
/// A data set starts out mutable and can be locked exactly once,
/// after which every mutating operation fails. Locking happens
/// explicitly through [`lock`][2], or implicitly when the data set
/// is appended to a [`Sequence`][3] or retrieved from one.
///
/// [1]: DataSet::sorted_tags
/// [2]: DataSet::lock
/// [3]: crate::sequence::Sequence
#[derive(Debug, Default)]
pub struct DataSet {
    elements: IndexMap<Tag, DataElement>,
    is_locked: Cell<bool>,
}

impl DataSet {
    /// Create a new empty, unlocked data set.
    pub fn new() -> Self {
        DataSet::default()
    }

    /// Insert a data element into the set.
    ///
    /// The element is consumed in every case:
    /// if the set is locked or an element with the same tag is already
    /// present, the operation fails and the provided element is dropped.
    pub fn insert(&mut self, element: DataElement) -> Result<()> {
        let tag = element.tag();
        debug!("insert data element {} into data set", tag);
        ensure!(!self.is_locked.get(), DataSetLockedSnafu { tag });
        ensure!(!self.elements.contains_key(&tag), TagExistsSnafu { tag });
        self.elements.insert(tag, element);
        Ok(())
    }

    /// Remove and drop the element with the given tag.
    ///
    /// Fails if the set is locked or the tag is absent.
    /// The insertion order of the remaining elements is preserved.
    pub fn remove(&mut self, tag: Tag) -> Result<()> {
        debug!("remove data element {} from data set", tag);
        ensure!(!self.is_locked.get(), DataSetLockedSnafu { tag });
        self.elements
            .shift_remove(&tag)
            .context(NoSuchTagSnafu { tag })?;
        Ok(())
    }

    /// Borrow the element with the given tag,
    /// failing when it is absent.
    pub fn element(&self, tag: Tag) -> Result<&DataElement> {
        self.elements.get(&tag).context(NoSuchTagSnafu { tag })
    }

    /// Borrow the element with the given tag, or `None` when absent.
    /// This is the non-failing probe counterpart of [`element`](DataSet::element).
    pub fn get(&self, tag: Tag) -> Option<&DataElement> {
        self.elements.get(&tag)
    }

    /// Obtain an independent deep copy of the element with the given tag.
    pub fn get_clone(&self, tag: Tag) -> Result<DataElement> {
        debug!("copy data element {} from data set", tag);
        self.element(tag).cloned()
    }

    /// The number of elements in the set.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the elements in insertion order.
    pub fn iter(&self) -> indexmap::map::Values<'_, Tag, DataElement> {
        self.elements.values()
    }

    /// The tags of all contained elements, in ascending order.
    pub fn sorted_tags(&self) -> Vec<Tag> {
        let mut tags: Vec<Tag> = self.elements.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    /// Lock the data set, making it read-only. Locking is irreversible.
    pub fn lock(&self) {
        self.is_locked.set(true);
    }

    /// Whether the data set has been locked.
    pub fn is_locked(&self) -> bool {
        self.is_locked.get()
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a DataElement;
    type IntoIter = indexmap::map::Values<'a, Tag, DataElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cloning a data set deep-copies every element.
/// The copy is independent and starts out unlocked,
/// regardless of the lock state of the original.
impl Clone for DataSet {
    fn clone(&self) -> Self {
        debug!("clone data set");
        DataSet {
            elements: self.elements.clone(),
            is_locked: Cell::new(false),
        }
    }
}

/// Equality compares the contained elements only;
/// the lock state does not participate.
impl PartialEq for DataSet {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}
