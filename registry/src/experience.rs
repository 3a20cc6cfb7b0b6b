//! Experience ledger: employment claims and their approval state machine.
//!
//! A claim starts unapproved and sits in the organization's unverified index.
//! Approval moves it into the current or previous index. Re-approving with
//! the other status moves it across; re-approving with the same status is
//! rejected, so an experience is live in at most one index at a time.

use crate::error::RegistryError;
use crate::guard::Guard;
use proledger_store::{Experience, RegistryState};
use proledger_types::{ExperienceId, Identity, MemberId, OrganizationId};

/// An employment claim as submitted by a member.
#[derive(Clone, Debug)]
pub struct NewExperience {
    pub start_date: String,
    pub end_date: String,
    pub role: String,
    pub company_id: OrganizationId,
}

pub struct ExperienceLedger;

impl ExperienceLedger {
    /// Record an unapproved employment claim for `member_id`.
    pub fn add_experience(
        &self,
        state: &mut RegistryState,
        caller: &Identity,
        member_id: MemberId,
        claim: NewExperience,
    ) -> Result<ExperienceId, RegistryError> {
        Guard::require_self_claim(state, caller, member_id)?;
        let company_id = claim.company_id;
        if !state.organizations.contains(company_id) {
            return Err(RegistryError::UnknownCompany(company_id));
        }

        let id = state.experiences.insert(Experience {
            start_date: claim.start_date,
            end_date: claim.end_date,
            role: claim.role,
            is_active: false,
            is_approved: false,
            company_id,
            member_id,
        });
        if let Some(m) = state.members.get_mut(member_id) {
            m.experiences.push(id);
        }
        if let Some(org) = state.organizations.get_mut(company_id) {
            org.unverified_employees.insert(id);
        }
        Ok(id)
    }

    /// Approve an employment claim as current (`is_active`) or previous.
    pub fn approve_experience(
        &self,
        state: &mut RegistryState,
        caller: &Identity,
        experience_id: ExperienceId,
        company_id: OrganizationId,
        is_active: bool,
    ) -> Result<(), RegistryError> {
        let experience = state
            .experiences
            .get(experience_id)
            .ok_or(RegistryError::UnknownExperience(experience_id))?;
        if experience.company_id != company_id {
            return Err(RegistryError::UnauthorizedApprover(company_id));
        }
        Guard::require_approver(state, caller, company_id)?;
        if experience.is_approved && experience.is_active == is_active {
            return Err(RegistryError::ExperienceAlreadyApproved(experience_id));
        }
        if !state.organizations.contains(company_id) {
            return Err(RegistryError::UnknownCompany(company_id));
        }

        if let Some(exp) = state.experiences.get_mut(experience_id) {
            exp.is_approved = true;
            exp.is_active = is_active;
        }
        if let Some(org) = state.organizations.get_mut(company_id) {
            org.unverified_employees.remove(&experience_id);
            if is_active {
                org.previous_employees.remove(&experience_id);
                org.current_employees.insert(experience_id);
            } else {
                org.current_employees.remove(&experience_id);
                org.previous_employees.insert(experience_id);
            }
        }
        Ok(())
    }
}
