//! The registry facade: owns the state and exposes every entry point.
//!
//! Calls are expected to arrive one at a time in a single global order. Each
//! entry point validates all of its preconditions before writing, so a
//! rejected call leaves the state exactly as it found it.

use crate::directory::Directory;
use crate::error::RegistryError;
use crate::experience::{ExperienceLedger, NewExperience};
use crate::identity::IdentityRegistry;
use crate::skill::{NewCertificate, NewEndorsement, SkillCatalog};
use proledger_store::{
    Certificate, Endorsement, Experience, Member, Organization, RegistryState, Skill, Slot,
};
use proledger_types::{
    Account, AccountType, CertificateId, Email, EndorsementId, ExperienceId, Identity, MemberId,
    OrganizationId, SkillId,
};
use tracing::{debug, info};

/// Log a rejected call and pass the result through.
fn traced<T>(
    op: &'static str,
    caller: &Identity,
    result: Result<T, RegistryError>,
) -> Result<T, RegistryError> {
    if let Err(e) = &result {
        debug!(op, %caller, error = %e, "call rejected");
    }
    result
}

#[derive(Clone, Debug, Default)]
pub struct Registry {
    state: RegistryState,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: RegistryState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &RegistryState {
        &self.state
    }

    pub fn into_state(self) -> RegistryState {
        self.state
    }

    // ── Identity ────────────────────────────────────────────────────────

    pub fn sign_up(
        &mut self,
        caller: &Identity,
        email: Email,
        name: impl Into<String>,
        account_type: AccountType,
    ) -> Result<Account, RegistryError> {
        let result =
            IdentityRegistry.sign_up(&mut self.state, caller, email, name.into(), account_type);
        if let Ok(account) = &result {
            info!(%caller, %account, "account registered");
        }
        traced("sign_up", caller, result)
    }

    pub fn login(&self, caller: &Identity, email: &Email) -> Result<Account, RegistryError> {
        traced("login", caller, IdentityRegistry.login(&self.state, caller, email))
    }

    /// Rotate the identity bound to the account behind `email`.
    pub fn update_identity(
        &mut self,
        caller: &Identity,
        account_type: AccountType,
        email: &Email,
        new_identity: Identity,
    ) -> Result<Account, RegistryError> {
        let result = IdentityRegistry.update_identity(
            &mut self.state,
            caller,
            account_type,
            email,
            new_identity,
        );
        if let Ok(account) = &result {
            info!(%account, old = %caller, new = %new_identity, "identity rotated");
        }
        traced("update_identity", caller, result)
    }

    // ── Directory ───────────────────────────────────────────────────────

    pub fn set_company(
        &mut self,
        caller: &Identity,
        member_id: MemberId,
        company_id: OrganizationId,
    ) -> Result<(), RegistryError> {
        let result = Directory.set_company(&mut self.state, caller, member_id, company_id);
        if result.is_ok() {
            info!(member = %member_id, company = %company_id, "company set");
        }
        traced("set_company", caller, result)
    }

    pub fn set_current_active_experience(
        &mut self,
        caller: &Identity,
        member_id: MemberId,
        experience_id: ExperienceId,
    ) -> Result<(), RegistryError> {
        let result = Directory.set_current_active_experience(
            &mut self.state,
            caller,
            member_id,
            experience_id,
        );
        if result.is_ok() {
            info!(member = %member_id, experience = %experience_id, "current experience set");
        }
        traced("set_current_active_experience", caller, result)
    }

    pub fn approve_manager(
        &mut self,
        caller: &Identity,
        member_id: MemberId,
    ) -> Result<(), RegistryError> {
        let result = Directory.approve_manager(&mut self.state, caller, member_id);
        if result.is_ok() {
            info!(member = %member_id, "manager approved");
        }
        traced("approve_manager", caller, result)
    }

    // ── Experience ──────────────────────────────────────────────────────

    pub fn add_experience(
        &mut self,
        caller: &Identity,
        member_id: MemberId,
        claim: NewExperience,
    ) -> Result<ExperienceId, RegistryError> {
        let company = claim.company_id;
        let result = ExperienceLedger.add_experience(&mut self.state, caller, member_id, claim);
        if let Ok(id) = &result {
            info!(member = %member_id, %company, experience = %id, "experience claimed");
        }
        traced("add_experience", caller, result)
    }

    pub fn approve_experience(
        &mut self,
        caller: &Identity,
        experience_id: ExperienceId,
        company_id: OrganizationId,
        is_active: bool,
    ) -> Result<(), RegistryError> {
        let result = ExperienceLedger.approve_experience(
            &mut self.state,
            caller,
            experience_id,
            company_id,
            is_active,
        );
        if result.is_ok() {
            info!(
                experience = %experience_id,
                company = %company_id,
                is_active,
                "experience approved"
            );
        }
        traced("approve_experience", caller, result)
    }

    // ── Skills ──────────────────────────────────────────────────────────

    pub fn add_skill(
        &mut self,
        caller: &Identity,
        member_id: MemberId,
        name: impl Into<String>,
    ) -> Result<SkillId, RegistryError> {
        let result = SkillCatalog.add_skill(&mut self.state, caller, member_id, name.into());
        if let Ok(id) = &result {
            info!(member = %member_id, skill = %id, "skill added");
        }
        traced("add_skill", caller, result)
    }

    pub fn add_certification(
        &mut self,
        caller: &Identity,
        member_id: MemberId,
        skill_id: SkillId,
        cert: NewCertificate,
    ) -> Result<CertificateId, RegistryError> {
        let result =
            SkillCatalog.add_certification(&mut self.state, caller, member_id, skill_id, cert);
        if let Ok(id) = &result {
            info!(
                member = %member_id,
                skill = %skill_id,
                certificate = %id,
                "certificate attached"
            );
        }
        traced("add_certification", caller, result)
    }

    pub fn endorse_skill(
        &mut self,
        caller: &Identity,
        member_id: MemberId,
        endorsement: NewEndorsement,
    ) -> Result<EndorsementId, RegistryError> {
        let skill_id = endorsement.skill_id;
        let endorsee = endorsement.endorsee_id;
        let result = SkillCatalog.endorse_skill(&mut self.state, caller, member_id, endorsement);
        if let Ok(id) = &result {
            let verified = self.skill(skill_id).is_some_and(|s| s.is_verified);
            info!(
                endorser = %member_id,
                %endorsee,
                skill = %skill_id,
                endorsement = %id,
                verified,
                "skill endorsed"
            );
        }
        traced("endorse_skill", caller, result)
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn account_of(&self, identity: &Identity) -> Option<Account> {
        self.state.account_of(identity)
    }

    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.state.members.get(id)
    }

    pub fn organization(&self, id: OrganizationId) -> Option<&Organization> {
        self.state.organizations.get(id)
    }

    pub fn experience(&self, id: ExperienceId) -> Option<&Experience> {
        self.state.experiences.get(id)
    }

    pub fn skill(&self, id: SkillId) -> Option<&Skill> {
        self.state.skills.get(id)
    }

    pub fn certificate(&self, id: CertificateId) -> Option<&Certificate> {
        self.state.certificates.get(id)
    }

    pub fn endorsement(&self, id: EndorsementId) -> Option<&Endorsement> {
        self.state.endorsements.get(id)
    }

    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.state.members.iter().map(|(_, m)| m)
    }

    pub fn organizations(&self) -> impl Iterator<Item = &Organization> {
        self.state.organizations.iter().map(|(_, o)| o)
    }

    pub fn member_count(&self) -> usize {
        self.state.members.len()
    }

    pub fn organization_count(&self) -> usize {
        self.state.organizations.len()
    }

    /// Skills on a member's profile, in the order they were added.
    pub fn member_skills(&self, id: MemberId) -> Vec<&Skill> {
        self.member(id)
            .map(|m| m.skills.iter().filter_map(|s| self.skill(*s)).collect())
            .unwrap_or_default()
    }

    pub fn member_experiences(&self, id: MemberId) -> Vec<(ExperienceId, &Experience)> {
        self.member(id)
            .map(|m| {
                m.experiences
                    .iter()
                    .filter_map(|e| self.experience(*e).map(|x| (*e, x)))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn skill_certificates(&self, id: SkillId) -> Vec<&Certificate> {
        self.skill(id)
            .map(|s| {
                s.certifications
                    .iter()
                    .filter_map(|c| self.certificate(*c))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn skill_endorsements(&self, id: SkillId) -> Vec<&Endorsement> {
        self.skill(id)
            .map(|s| {
                s.endorsements
                    .iter()
                    .filter_map(|e| self.endorsement(*e))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Live experience ids of current employees.
    pub fn current_employees(&self, id: OrganizationId) -> Vec<ExperienceId> {
        self.organization(id)
            .map(|o| o.current_employees.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Live experience ids of former employees.
    pub fn previous_employees(&self, id: OrganizationId) -> Vec<ExperienceId> {
        self.organization(id)
            .map(|o| o.previous_employees.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Raw layout of the unverified index, vacated slots included.
    pub fn unverified_employees(&self, id: OrganizationId) -> Vec<Slot<ExperienceId>> {
        self.organization(id)
            .map(|o| o.unverified_employees.slots().to_vec())
            .unwrap_or_default()
    }
}
