//! Dense, append-only record arenas.

use proledger_types::{
    CertificateId, EndorsementId, ExperienceId, MemberId, OrganizationId, SkillId,
};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// A typed id usable as an arena key.
pub trait ArenaId: Copy {
    fn from_index(index: usize) -> Self;
    fn index(&self) -> usize;
}

macro_rules! impl_arena_id {
    ($($id:ty),* $(,)?) => {
        $(
            impl ArenaId for $id {
                fn from_index(index: usize) -> Self {
                    <$id>::from_index(index)
                }

                fn index(&self) -> usize {
                    <$id>::index(self)
                }
            }
        )*
    };
}

impl_arena_id!(MemberId, OrganizationId, ExperienceId, SkillId, CertificateId, EndorsementId);

/// Records are never deleted, so an id, once handed out, stays valid for the
/// lifetime of the arena. Ids start at 1.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct Arena<I, T> {
    records: Vec<T>,
    #[serde(skip)]
    _id: PhantomData<I>,
}

impl<I: ArenaId, T> Arena<I, T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            _id: PhantomData,
        }
    }

    /// The id the next [`Arena::insert`] will return.
    pub fn next_id(&self) -> I {
        I::from_index(self.records.len())
    }

    /// Append a record and return its id.
    pub fn insert(&mut self, record: T) -> I {
        let id = self.next_id();
        self.records.push(record);
        id
    }

    pub fn get(&self, id: I) -> Option<&T> {
        self.records.get(id.index())
    }

    pub fn get_mut(&mut self, id: I) -> Option<&mut T> {
        self.records.get_mut(id.index())
    }

    pub fn contains(&self, id: I) -> bool {
        id.index() < self.records.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in id order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| (I::from_index(i), r))
    }
}

impl<I: ArenaId, T> Default for Arena<I, T> {
    fn default() -> Self {
        Self::new()
    }
}
