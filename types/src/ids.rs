//! Typed dense record ids.
//!
//! Every arena hands out ids from 1 upward. Zero is unrepresentable, so
//! "no id" is always spelled `Option<Id>` and can never collide with a real
//! record.

use crate::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(NonZeroU64);

        impl $name {
            /// The first id handed out by an empty arena.
            pub const FIRST: Self = Self(NonZeroU64::MIN);

            /// Returns `None` for zero.
            pub fn new(raw: u64) -> Option<Self> {
                NonZeroU64::new(raw).map(Self)
            }

            pub fn get(&self) -> u64 {
                self.0.get()
            }

            /// Zero-based position of this id inside its arena.
            pub fn index(&self) -> usize {
                (self.0.get() - 1) as usize
            }

            /// The id stored at zero-based arena position `index`.
            pub fn from_index(index: usize) -> Self {
                Self(NonZeroU64::MIN.saturating_add(index as u64))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.get()
            }
        }

        impl FromStr for $name {
            type Err = TypesError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<u64>()
                    .ok()
                    .and_then(Self::new)
                    .ok_or_else(|| TypesError::InvalidId(format!("{} id {s:?}", $label)))
            }
        }
    };
}

record_id!(
    /// Id of a member profile.
    MemberId,
    "member"
);
record_id!(
    /// Id of an organization profile.
    OrganizationId,
    "organization"
);
record_id!(
    /// Id of a claimed employment record.
    ExperienceId,
    "experience"
);
record_id!(SkillId, "skill");
record_id!(CertificateId, "certificate");
record_id!(EndorsementId, "endorsement");
