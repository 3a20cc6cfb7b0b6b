//! Fundamental types for the proledger registry.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! caller identities, typed record ids, account kinds, and e-mail addresses.

pub mod account;
pub mod email;
pub mod error;
pub mod identity;
pub mod ids;

pub use account::{Account, AccountType};
pub use email::Email;
pub use error::TypesError;
pub use identity::Identity;
pub use ids::{CertificateId, EndorsementId, ExperienceId, MemberId, OrganizationId, SkillId};
