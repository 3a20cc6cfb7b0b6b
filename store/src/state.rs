//! The complete persisted registry state and its snapshot codec.

use crate::arena::Arena;
use crate::records::{Certificate, Endorsement, Experience, Member, Organization, Skill};
use crate::StoreError;
use proledger_types::{
    Account, CertificateId, Email, EndorsementId, ExperienceId, Identity, MemberId,
    OrganizationId, SkillId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Six record arenas plus the two identity maps.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RegistryState {
    pub organizations: Arena<OrganizationId, Organization>,
    pub members: Arena<MemberId, Member>,
    pub certificates: Arena<CertificateId, Certificate>,
    pub endorsements: Arena<EndorsementId, Endorsement>,
    pub skills: Arena<SkillId, Skill>,
    pub experiences: Arena<ExperienceId, Experience>,
    /// Login e-mail → identity currently allowed to use it.
    pub emails: HashMap<Email, Identity>,
    /// Identity → the account it owns.
    pub accounts: HashMap<Identity, Account>,
}

/// Snapshot header: magic bytes followed by a format version.
const SNAPSHOT_MAGIC: &[u8; 4] = b"PLGR";
const SNAPSHOT_VERSION: u8 = 1;
const HEADER_LEN: usize = SNAPSHOT_MAGIC.len() + 1;

impl RegistryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode the state as a versioned snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, StoreError> {
        let body =
            bincode::serialize(self).map_err(|e| StoreError::Serialization(e.to_string()))?;
        let mut out = Vec::with_capacity(HEADER_LEN + body.len());
        out.extend_from_slice(SNAPSHOT_MAGIC);
        out.push(SNAPSHOT_VERSION);
        out.extend_from_slice(&body);
        Ok(out)
    }

    /// Decode a snapshot produced by [`RegistryState::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StoreError> {
        if bytes.len() < HEADER_LEN || &bytes[..SNAPSHOT_MAGIC.len()] != SNAPSHOT_MAGIC {
            return Err(StoreError::Corruption("missing snapshot header".into()));
        }
        let version = bytes[SNAPSHOT_MAGIC.len()];
        if version != SNAPSHOT_VERSION {
            return Err(StoreError::Corruption(format!(
                "unsupported snapshot version {version}"
            )));
        }
        bincode::deserialize(&bytes[HEADER_LEN..])
            .map_err(|e| StoreError::Corruption(e.to_string()))
    }

    /// The account bound to `identity`, if any.
    pub fn account_of(&self, identity: &Identity) -> Option<Account> {
        self.accounts.get(identity).copied()
    }
}
