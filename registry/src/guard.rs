//! Admission predicates shared by every mutating call.

use crate::error::RegistryError;
use proledger_store::{Member, RegistryState};
use proledger_types::{Account, Identity, MemberId, OrganizationId};

/// Decides whether a caller may perform a given mutation.
pub struct Guard;

impl Guard {
    /// Self-claim: the caller owns the member account it claims to act for.
    pub fn is_self_claim(state: &RegistryState, caller: &Identity, claimed: MemberId) -> bool {
        state.account_of(caller) == Some(Account::Member(claimed))
    }

    /// Require a self-claim and return the caller's member record.
    pub fn require_self_claim<'a>(
        state: &'a RegistryState,
        caller: &Identity,
        claimed: MemberId,
    ) -> Result<&'a Member, RegistryError> {
        if !Self::is_self_claim(state, caller, claimed) {
            return Err(RegistryError::Unauthorized(claimed));
        }
        state
            .members
            .get(claimed)
            .ok_or(RegistryError::UnknownMember(claimed))
    }

    /// Require the caller to own an organization account.
    pub fn require_organization(
        state: &RegistryState,
        caller: &Identity,
    ) -> Result<OrganizationId, RegistryError> {
        state
            .account_of(caller)
            .and_then(|a| a.organization())
            .ok_or(RegistryError::MustBeOrganization)
    }

    /// Organizational approval: the caller is `company` itself, or a manager
    /// member employed there.
    pub fn can_approve_for(
        state: &RegistryState,
        caller: &Identity,
        company: OrganizationId,
    ) -> bool {
        match state.account_of(caller) {
            Some(Account::Organization(org)) => org == company,
            Some(Account::Member(member)) => state
                .members
                .get(member)
                .is_some_and(|m| m.manages(company)),
            None => false,
        }
    }

    pub fn require_approver(
        state: &RegistryState,
        caller: &Identity,
        company: OrganizationId,
    ) -> Result<(), RegistryError> {
        if Self::can_approve_for(state, caller, company) {
            Ok(())
        } else {
            Err(RegistryError::UnauthorizedApprover(company))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proledger_nullables::NullIdentities;
    use proledger_store::{Member, Organization};

    struct Fixture {
        state: RegistryState,
        org: Identity,
        manager: Identity,
        employee: Identity,
        outsider: Identity,
        org_id: OrganizationId,
    }

    fn fixture() -> Fixture {
        let ids = NullIdentities::new();
        let (org, manager, employee, outsider) = (ids.next(), ids.next(), ids.next(), ids.next());
        let mut state = RegistryState::new();
        let org_id = state.organizations.next_id();
        state
            .organizations
            .insert(Organization::new(org_id, "Acme".into(), org));
        state.accounts.insert(org, Account::Organization(org_id));
        for (who, name, is_manager) in [(manager, "Mia", true), (employee, "Eve", false)] {
            let id = state.members.next_id();
            let mut m = Member::new(id, name.into(), who);
            m.company_id = Some(org_id);
            m.is_manager = is_manager;
            m.manager_of = is_manager.then_some(org_id);
            state.members.insert(m);
            state.accounts.insert(who, Account::Member(id));
        }
        Fixture {
            state,
            org,
            manager,
            employee,
            outsider,
            org_id,
        }
    }

    #[test]
    fn self_claim_requires_matching_member() {
        let f = fixture();
        let employee_id = MemberId::new(2).unwrap();
        assert!(Guard::is_self_claim(&f.state, &f.employee, employee_id));
        assert!(!Guard::is_self_claim(&f.state, &f.manager, employee_id));
        assert!(!Guard::is_self_claim(&f.state, &f.outsider, employee_id));
        assert_eq!(
            Guard::require_self_claim(&f.state, &f.org, employee_id).unwrap_err(),
            RegistryError::Unauthorized(employee_id)
        );
    }

    #[test]
    fn organization_and_its_managers_may_approve() {
        let f = fixture();
        assert!(Guard::can_approve_for(&f.state, &f.org, f.org_id));
        assert!(Guard::can_approve_for(&f.state, &f.manager, f.org_id));
        assert!(!Guard::can_approve_for(&f.state, &f.employee, f.org_id));
        assert!(!Guard::can_approve_for(&f.state, &f.outsider, f.org_id));
    }

    #[test]
    fn manager_of_other_company_may_not_approve() {
        let f = fixture();
        let other = OrganizationId::new(2).unwrap();
        assert_eq!(
            Guard::require_approver(&f.state, &f.manager, other).unwrap_err(),
            RegistryError::UnauthorizedApprover(other)
        );
    }

    #[test]
    fn require_organization_rejects_members() {
        let f = fixture();
        assert_eq!(Guard::require_organization(&f.state, &f.org), Ok(f.org_id));
        assert_eq!(
            Guard::require_organization(&f.state, &f.manager),
            Err(RegistryError::MustBeOrganization)
        );
    }
}
