//! Skill catalog: skills, certificates, and peer endorsements.
//!
//! Certificates and endorsements may be attached to any existing skill; the
//! skill is not required to belong to the acting or endorsed member.

use crate::error::RegistryError;
use crate::guard::Guard;
use proledger_store::{Certificate, Endorsement, RegistryState, Skill};
use proledger_types::{CertificateId, EndorsementId, Identity, MemberId, SkillId};

/// A credential as submitted by a member.
#[derive(Clone, Debug)]
pub struct NewCertificate {
    pub url: String,
    pub issued_on: String,
    pub valid_till: String,
    pub name: String,
    pub issuer: String,
}

/// A peer attestation as submitted by the endorser.
#[derive(Clone, Debug)]
pub struct NewEndorsement {
    pub endorsee_id: MemberId,
    pub skill_id: SkillId,
    pub date: String,
    pub comment: String,
}

pub struct SkillCatalog;

impl SkillCatalog {
    /// Add an unverified skill to the member's profile.
    pub fn add_skill(
        &self,
        state: &mut RegistryState,
        caller: &Identity,
        member_id: MemberId,
        name: String,
    ) -> Result<SkillId, RegistryError> {
        Guard::require_self_claim(state, caller, member_id)?;
        let id = state.skills.next_id();
        state.skills.insert(Skill::new(id, name));
        if let Some(m) = state.members.get_mut(member_id) {
            m.skills.push(id);
        }
        Ok(id)
    }

    /// Attach a certificate to a skill.
    pub fn add_certification(
        &self,
        state: &mut RegistryState,
        caller: &Identity,
        member_id: MemberId,
        skill_id: SkillId,
        cert: NewCertificate,
    ) -> Result<CertificateId, RegistryError> {
        Guard::require_self_claim(state, caller, member_id)?;
        if !state.skills.contains(skill_id) {
            return Err(RegistryError::UnknownSkill(skill_id));
        }

        let id = state.certificates.next_id();
        state.certificates.insert(Certificate {
            id,
            url: cert.url,
            issued_on: cert.issued_on,
            valid_till: cert.valid_till,
            name: cert.name,
            issuer: cert.issuer,
        });
        if let Some(skill) = state.skills.get_mut(skill_id) {
            skill.certifications.push(id);
        }
        Ok(id)
    }

    /// Endorse another member's skill.
    ///
    /// An endorsement from a manager at the endorsee's company verifies the
    /// skill. Verification is permanent.
    pub fn endorse_skill(
        &self,
        state: &mut RegistryState,
        caller: &Identity,
        member_id: MemberId,
        endorsement: NewEndorsement,
    ) -> Result<EndorsementId, RegistryError> {
        let endorser = Guard::require_self_claim(state, caller, member_id)?;
        let endorsee_id = endorsement.endorsee_id;
        if member_id == endorsee_id {
            return Err(RegistryError::SelfEndorsement(member_id));
        }
        let endorsee = state
            .members
            .get(endorsee_id)
            .ok_or(RegistryError::UnknownMember(endorsee_id))?;
        let skill_id = endorsement.skill_id;
        if !state.skills.contains(skill_id) {
            return Err(RegistryError::UnknownSkill(skill_id));
        }
        let verifies = endorser
            .company_id
            .is_some_and(|c| endorser.manages(c) && endorsee.company_id == Some(c));

        let id = state.endorsements.insert(Endorsement {
            endorser_id: member_id,
            date: endorsement.date,
            comment: endorsement.comment,
        });
        if let Some(skill) = state.skills.get_mut(skill_id) {
            skill.endorsements.push(id);
            if verifies {
                skill.is_verified = true;
            }
        }
        Ok(id)
    }
}
