//! The DICOM sequence: an ordered list of nested data sets.

use std::cell::Cell;

use snafu::ensure;
use tracing::debug;

use crate::dataset::DataSet;
use crate::error::{ItemOutOfRangeSnafu, Result, SequenceLockedSnafu};

/// An ordered collection of data sets, the value of an `SQ` data element.
///
/// The sequence owns its items. An item is locked the moment it enters
/// the sequence, so that a data set shared through the read accessors can
/// never mutate under a reader. The sequence itself carries its own
/// one-way lock, set when the owning element hands the sequence out.
#[derive(Debug, Default)]
pub struct Sequence {
    items: Vec<DataSet>,
    is_locked: Cell<bool>,
}

impl Sequence {
    /// Create a new empty, unlocked sequence.
    pub fn new() -> Self {
        Sequence::default()
    }

    /// Append a data set to the end of the sequence,
    /// transferring ownership. The item is locked immediately.
    ///
    /// When the sequence is locked the operation fails
    /// and the provided item is dropped.
    pub fn append(&mut self, item: DataSet) -> Result<()> {
        debug!("append item to sequence");
        ensure!(!self.is_locked.get(), SequenceLockedSnafu);
        item.lock();
        self.items.push(item);
        Ok(())
    }

    /// Borrow the item at the given position, locking it.
    pub fn get(&self, index: u32) -> Result<&DataSet> {
        ensure!(
            (index as usize) < self.items.len(),
            ItemOutOfRangeSnafu {
                index,
                len: self.items.len() as u32,
            }
        );
        let item = &self.items[index as usize];
        item.lock();
        Ok(item)
    }

    /// Remove and drop the item at the given position,
    /// shifting subsequent items one position to the left.
    ///
    /// Fails if the sequence is locked or the index is out of range.
    pub fn remove(&mut self, index: u32) -> Result<()> {
        debug!("remove item #{} from sequence", index);
        ensure!(!self.is_locked.get(), SequenceLockedSnafu);
        ensure!(
            (index as usize) < self.items.len(),
            ItemOutOfRangeSnafu {
                index,
                len: self.items.len() as u32,
            }
        );
        self.items.remove(index as usize);
        Ok(())
    }

    /// The number of items in the sequence.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the sequence holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items in order, locking each visited item.
    pub fn iter(&self) -> impl Iterator<Item = &DataSet> {
        self.items.iter().map(|item| {
            item.lock();
            item
        })
    }

    /// Lock the sequence, making it read-only. Locking is irreversible.
    pub fn lock(&self) {
        self.is_locked.set(true);
    }

    /// Whether the sequence has been locked.
    pub fn is_locked(&self) -> bool {
        self.is_locked.get()
    }
}

/// Cloning a sequence deep-copies every item.
/// The copy starts out unlocked; its items are locked,
/// as they would be after appending them one by one.
impl Clone for Sequence {
    fn clone(&self) -> Self {
        let items: Vec<DataSet> = self
            .items
            .iter()
            .map(|item| {
                let item = item.clone();
                item.lock();
                item
            })
            .collect();
        Sequence {
            items,
            is_locked: Cell::new(false),
        }
    }
}

/// Equality compares the items only; the lock state does not participate.
impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}
