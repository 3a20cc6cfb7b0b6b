//! Account kinds.

use crate::{MemberId, OrganizationId, TypesError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of profile an identity owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    /// An individual.
    Member,
    /// A company.
    Organization,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Organization => "organization",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "member" => Ok(Self::Member),
            "organization" | "organisation" | "org" => Ok(Self::Organization),
            other => Err(TypesError::InvalidAccountType(other.to_string())),
        }
    }
}

/// The account an identity is bound to: its kind together with its id.
///
/// Keeping both in one value means an identity rotation can never leave a
/// stale kind behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Account {
    Member(MemberId),
    Organization(OrganizationId),
}

impl Account {
    pub fn account_type(&self) -> AccountType {
        match self {
            Self::Member(_) => AccountType::Member,
            Self::Organization(_) => AccountType::Organization,
        }
    }

    /// The raw dense id, without its kind.
    pub fn raw_id(&self) -> u64 {
        match self {
            Self::Member(id) => id.get(),
            Self::Organization(id) => id.get(),
        }
    }

    pub fn member(&self) -> Option<MemberId> {
        match self {
            Self::Member(id) => Some(*id),
            Self::Organization(_) => None,
        }
    }

    pub fn organization(&self) -> Option<OrganizationId> {
        match self {
            Self::Organization(id) => Some(*id),
            Self::Member(_) => None,
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.account_type(), self.raw_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_type_parses_aliases() {
        assert_eq!("Member".parse::<AccountType>().unwrap(), AccountType::Member);
        assert_eq!("org".parse::<AccountType>().unwrap(), AccountType::Organization);
        assert!("team".parse::<AccountType>().is_err());
    }

    #[test]
    fn account_projections() {
        let acct = Account::Organization(OrganizationId::FIRST);
        assert_eq!(acct.account_type(), AccountType::Organization);
        assert_eq!(acct.organization(), Some(OrganizationId::FIRST));
        assert_eq!(acct.member(), None);
        assert_eq!(acct.to_string(), "organization#1");
    }
}
