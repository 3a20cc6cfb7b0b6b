//! Member and organization directory mutations.

use crate::error::RegistryError;
use crate::guard::Guard;
use proledger_store::RegistryState;
use proledger_types::{ExperienceId, Identity, MemberId, OrganizationId};

pub struct Directory;

impl Directory {
    /// Record which organization a member works for.
    ///
    /// This grants no trust on its own; managers are appointed separately.
    pub fn set_company(
        &self,
        state: &mut RegistryState,
        caller: &Identity,
        member_id: MemberId,
        company_id: OrganizationId,
    ) -> Result<(), RegistryError> {
        Guard::require_self_claim(state, caller, member_id)?;
        if !state.organizations.contains(company_id) {
            return Err(RegistryError::UnknownCompany(company_id));
        }
        if let Some(m) = state.members.get_mut(member_id) {
            m.company_id = Some(company_id);
        }
        Ok(())
    }

    /// Point a member at one of its own experiences.
    pub fn set_current_active_experience(
        &self,
        state: &mut RegistryState,
        caller: &Identity,
        member_id: MemberId,
        experience_id: ExperienceId,
    ) -> Result<(), RegistryError> {
        let member = Guard::require_self_claim(state, caller, member_id)?;
        if !member.experiences.contains(&experience_id) {
            return Err(RegistryError::ExperienceNotOwned {
                member: member_id,
                experience: experience_id,
            });
        }
        if let Some(m) = state.members.get_mut(member_id) {
            m.current_active_experience = Some(experience_id);
        }
        Ok(())
    }

    /// Appoint one of the calling organization's members as a manager.
    pub fn approve_manager(
        &self,
        state: &mut RegistryState,
        caller: &Identity,
        member_id: MemberId,
    ) -> Result<(), RegistryError> {
        let company = Guard::require_organization(state, caller)?;
        let member = state
            .members
            .get_mut(member_id)
            .ok_or(RegistryError::UnknownMember(member_id))?;
        if member.company_id != Some(company) {
            return Err(RegistryError::NotEmployeeOfCompany {
                member: member_id,
                company,
            });
        }
        if member.manager_of == Some(company) {
            return Err(RegistryError::AlreadyManager(member_id));
        }
        member.is_manager = true;
        member.manager_of = Some(company);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::IdentityRegistry;
    use proledger_nullables::NullIdentities;
    use proledger_store::Experience;
    use proledger_types::{AccountType, Email};

    struct Fixture {
        state: RegistryState,
        org: Identity,
        ada: Identity,
        org_id: OrganizationId,
        ada_id: MemberId,
    }

    fn fixture() -> Fixture {
        let ids = NullIdentities::new();
        let (org, ada) = (ids.next(), ids.next());
        let mut state = RegistryState::new();
        let mut sign_up = |who: &Identity, e: &str, kind| {
            IdentityRegistry
                .sign_up(&mut state, who, Email::parse(e).unwrap(), e.into(), kind)
                .unwrap()
        };
        let org_id = sign_up(&org, "hr@acme.test", AccountType::Organization)
            .organization()
            .unwrap();
        let ada_id = sign_up(&ada, "ada@mail.test", AccountType::Member)
            .member()
            .unwrap();
        Fixture {
            state,
            org,
            ada,
            org_id,
            ada_id,
        }
    }

    #[test]
    fn set_company_by_member_itself() {
        let mut f = fixture();
        Directory
            .set_company(&mut f.state, &f.ada, f.ada_id, f.org_id)
            .unwrap();
        assert_eq!(f.state.members.get(f.ada_id).unwrap().company_id, Some(f.org_id));
    }

    #[test]
    fn set_company_rejects_other_callers_and_unknown_company() {
        let mut f = fixture();
        assert_eq!(
            Directory.set_company(&mut f.state, &f.org, f.ada_id, f.org_id),
            Err(RegistryError::Unauthorized(f.ada_id))
        );
        let missing = OrganizationId::new(9).unwrap();
        assert_eq!(
            Directory.set_company(&mut f.state, &f.ada, f.ada_id, missing),
            Err(RegistryError::UnknownCompany(missing))
        );
        assert_eq!(f.state.members.get(f.ada_id).unwrap().company_id, None);
    }

    #[test]
    fn current_experience_must_be_owned() {
        let mut f = fixture();
        let exp_id = f.state.experiences.insert(Experience {
            start_date: "2020".into(),
            end_date: "2021".into(),
            role: "Eng".into(),
            is_active: false,
            is_approved: false,
            company_id: f.org_id,
            member_id: f.ada_id,
        });

        assert_eq!(
            Directory.set_current_active_experience(&mut f.state, &f.ada, f.ada_id, exp_id),
            Err(RegistryError::ExperienceNotOwned {
                member: f.ada_id,
                experience: exp_id
            })
        );

        f.state.members.get_mut(f.ada_id).unwrap().experiences.push(exp_id);
        Directory
            .set_current_active_experience(&mut f.state, &f.ada, f.ada_id, exp_id)
            .unwrap();
        assert_eq!(
            f.state.members.get(f.ada_id).unwrap().current_active_experience,
            Some(exp_id)
        );
    }

    #[test]
    fn approve_manager_is_guarded() {
        let mut f = fixture();
        assert_eq!(
            Directory.approve_manager(&mut f.state, &f.ada, f.ada_id),
            Err(RegistryError::MustBeOrganization)
        );
        assert_eq!(
            Directory.approve_manager(&mut f.state, &f.org, f.ada_id),
            Err(RegistryError::NotEmployeeOfCompany {
                member: f.ada_id,
                company: f.org_id
            })
        );

        Directory
            .set_company(&mut f.state, &f.ada, f.ada_id, f.org_id)
            .unwrap();
        Directory
            .approve_manager(&mut f.state, &f.org, f.ada_id)
            .unwrap();
        assert_eq!(
            Directory.approve_manager(&mut f.state, &f.org, f.ada_id),
            Err(RegistryError::AlreadyManager(f.ada_id))
        );
        assert!(f.state.members.get(f.ada_id).unwrap().is_manager);
    }

    #[test]
    fn approve_manager_unknown_member() {
        let mut f = fixture();
        let missing = MemberId::new(42).unwrap();
        assert_eq!(
            Directory.approve_manager(&mut f.state, &f.org, missing),
            Err(RegistryError::UnknownMember(missing))
        );
    }

    #[test]
    fn manager_grant_is_tied_to_appointing_company() {
        let mut f = fixture();
        let ids = NullIdentities::new();
        for _ in 0..2 {
            ids.next();
        }
        let other = ids.next();
        let other_id = IdentityRegistry
            .sign_up(
                &mut f.state,
                &other,
                Email::parse("hr@other.test").unwrap(),
                "Other".into(),
                AccountType::Organization,
            )
            .unwrap()
            .organization()
            .unwrap();

        Directory
            .set_company(&mut f.state, &f.ada, f.ada_id, f.org_id)
            .unwrap();
        Directory
            .approve_manager(&mut f.state, &f.org, f.ada_id)
            .unwrap();
        Directory
            .set_company(&mut f.state, &f.ada, f.ada_id, other_id)
            .unwrap();

        let ada = f.state.members.get(f.ada_id).unwrap();
        assert!(ada.is_manager);
        assert!(!ada.manages(other_id));
        assert!(!ada.manages(f.org_id));

        Directory
            .approve_manager(&mut f.state, &other, f.ada_id)
            .unwrap();
        let ada = f.state.members.get(f.ada_id).unwrap();
        assert!(ada.manages(other_id));
        assert_eq!(ada.manager_of, Some(other_id));
    }
}
