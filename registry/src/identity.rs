//! Identity registry: binds e-mails and caller identities to accounts.

use crate::error::RegistryError;
use proledger_store::{Member, Organization, RegistryState};
use proledger_types::{Account, AccountType, Email, Identity};

pub struct IdentityRegistry;

impl IdentityRegistry {
    /// Create a member or organization account owned by `caller`.
    ///
    /// Fails if the e-mail is already bound or `caller` already owns an account.
    pub fn sign_up(
        &self,
        state: &mut RegistryState,
        caller: &Identity,
        email: Email,
        name: String,
        account_type: AccountType,
    ) -> Result<Account, RegistryError> {
        if state.emails.contains_key(&email) || state.accounts.contains_key(caller) {
            return Err(RegistryError::AlreadyRegistered);
        }

        let account = match account_type {
            AccountType::Member => {
                let id = state.members.next_id();
                state.members.insert(Member::new(id, name, *caller));
                Account::Member(id)
            }
            AccountType::Organization => {
                let id = state.organizations.next_id();
                state
                    .organizations
                    .insert(Organization::new(id, name, *caller));
                Account::Organization(id)
            }
        };
        state.emails.insert(email, *caller);
        state.accounts.insert(*caller, account);
        Ok(account)
    }

    /// Look up the account behind `email`, provided `caller` is bound to it.
    pub fn login(
        &self,
        state: &RegistryState,
        caller: &Identity,
        email: &Email,
    ) -> Result<Account, RegistryError> {
        Self::authenticate(state, caller, email)
    }

    /// Rotate the identity bound to an account. The account id is preserved
    /// and the old identity loses all access.
    pub fn update_identity(
        &self,
        state: &mut RegistryState,
        caller: &Identity,
        account_type: AccountType,
        email: &Email,
        new_identity: Identity,
    ) -> Result<Account, RegistryError> {
        let account = Self::authenticate(state, caller, email)?;
        if account.account_type() != account_type {
            return Err(RegistryError::AuthenticationFailed);
        }
        if new_identity == *caller {
            return Ok(account);
        }
        if state.accounts.contains_key(&new_identity) {
            return Err(RegistryError::AlreadyRegistered);
        }

        match account {
            Account::Member(id) => {
                if let Some(m) = state.members.get_mut(id) {
                    m.identity = new_identity;
                }
            }
            Account::Organization(id) => {
                if let Some(o) = state.organizations.get_mut(id) {
                    o.identity = new_identity;
                }
            }
        }
        state.emails.insert(email.clone(), new_identity);
        state.accounts.remove(caller);
        state.accounts.insert(new_identity, account);
        Ok(account)
    }

    fn authenticate(
        state: &RegistryState,
        caller: &Identity,
        email: &Email,
    ) -> Result<Account, RegistryError> {
        match state.emails.get(email) {
            Some(bound) if bound == caller => state
                .account_of(caller)
                .ok_or(RegistryError::AuthenticationFailed),
            _ => Err(RegistryError::AuthenticationFailed),
        }
    }
}
