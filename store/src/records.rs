//! Profile and credential records stored in the registry arenas.

use crate::slots::SlotList;
use proledger_types::{
    CertificateId, EndorsementId, ExperienceId, Identity, MemberId, OrganizationId, SkillId,
};
use serde::{Deserialize, Serialize};

/// An individual's profile.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    /// Organization the member claims to work for.
    pub company_id: Option<OrganizationId>,
    pub current_active_experience: Option<ExperienceId>,
    pub name: String,
    /// Identity currently bound to this profile.
    pub identity: Identity,
    /// Granted by the member's organization; never revoked.
    pub is_manager: bool,
    /// Organization that granted `is_manager`. Moving to another company
    /// does not carry the grant along.
    pub manager_of: Option<OrganizationId>,
    pub skills: Vec<SkillId>,
    pub experiences: Vec<ExperienceId>,
}

impl Member {
    pub fn new(id: MemberId, name: String, identity: Identity) -> Self {
        Self {
            id,
            company_id: None,
            current_active_experience: None,
            name,
            identity,
            is_manager: false,
            manager_of: None,
            skills: Vec::new(),
            experiences: Vec::new(),
        }
    }

    /// Whether this member is a manager appointed by `company` and still
    /// employed there.
    pub fn manages(&self, company: OrganizationId) -> bool {
        self.is_manager
            && self.manager_of == Some(company)
            && self.company_id == Some(company)
    }
}

/// A company's profile and its employment indices.
///
/// All three indices hold experience ids, not member ids.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    pub identity: Identity,
    pub current_employees: SlotList<ExperienceId>,
    pub previous_employees: SlotList<ExperienceId>,
    pub unverified_employees: SlotList<ExperienceId>,
}

impl Organization {
    pub fn new(id: OrganizationId, name: String, identity: Identity) -> Self {
        Self {
            id,
            name,
            identity,
            current_employees: SlotList::new(),
            previous_employees: SlotList::new(),
            unverified_employees: SlotList::new(),
        }
    }
}

/// A claimed employment period.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Experience {
    pub start_date: String,
    pub end_date: String,
    pub role: String,
    pub is_active: bool,
    pub is_approved: bool,
    pub company_id: OrganizationId,
    /// Member that made the claim.
    pub member_id: MemberId,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    /// Set by an endorsement from a manager at the endorsee's company; never reverts.
    pub is_verified: bool,
    pub certifications: Vec<CertificateId>,
    pub endorsements: Vec<EndorsementId>,
}

impl Skill {
    pub fn new(id: SkillId, name: String) -> Self {
        Self {
            id,
            name,
            is_verified: false,
            certifications: Vec::new(),
            endorsements: Vec::new(),
        }
    }
}

/// An external credential attached to a skill.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Certificate {
    pub id: CertificateId,
    pub url: String,
    pub issued_on: String,
    pub valid_till: String,
    pub name: String,
    pub issuer: String,
}

/// A peer attestation of a skill.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Endorsement {
    pub endorser_id: MemberId,
    pub date: String,
    pub comment: String,
}
