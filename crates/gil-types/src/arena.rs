use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::id::SequentialId;

/// Growable indexed store whose id space doubles as the allocator.
///
/// Records live in insertion order and the id of a record is its position
/// plus one: the first `insert` returns id 1, the next id 2, and so on.
/// Records are never removed, which keeps every id space gap-free and makes
/// the arena the single owner of all records it holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Arena<I, T> {
    records: Vec<T>,
    #[serde(skip)]
    _id: PhantomData<I>,
}

impl<I: SequentialId, T> Arena<I, T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            _id: PhantomData,
        }
    }

    /// Allocate the next id in this space and store `record` under it.
    pub fn insert(&mut self, record: T) -> I {
        self.records.push(record);
        I::from_raw(self.records.len() as u64)
    }

    /// The id the next call to [`Self::insert`] will return.
    pub fn next_id(&self) -> I {
        I::from_raw(self.records.len() as u64 + 1)
    }

    pub fn get(&self, id: I) -> Option<&T> {
        self.records.get(Self::index(id)?)
    }

    pub fn get_mut(&mut self, id: I) -> Option<&mut T> {
        let index = Self::index(id)?;
        self.records.get_mut(index)
    }

    pub fn contains(&self, id: I) -> bool {
        self.get(id).is_some()
    }

    /// Number of records ever inserted (equals the highest allocated id).
    pub fn len(&self) -> u64 {
        self.records.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records with their ids, in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| (I::from_raw(index as u64 + 1), record))
    }

    fn index(id: I) -> Option<usize> {
        // Id 0 is never allocated.
        id.as_u64().checked_sub(1).map(|raw| raw as usize)
    }
}

impl<I: SequentialId, T> Default for Arena<I, T> {
    fn default() -> Self {
        Self::new()
    }
}
