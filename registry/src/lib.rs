//! Professional-network registry engine.
//!
//! Tracks members and organizations, employment claims, skills,
//! certificates, and endorsements, and decides who may mutate which record:
//!
//! - **Identity**: e-mails and caller identities bind to exactly one account.
//! - **Directory**: members pick a company; organizations appoint managers.
//! - **Experience**: members claim employment; the company or one of its
//!   managers approves it as current or previous.
//! - **Skills**: members list skills and attach certificates; peers endorse,
//!   and an endorsement from a manager at the same company verifies.
//!
//! Every entry point takes the already-authenticated caller [`Identity`]
//! explicitly.
//!
//! [`Identity`]: proledger_types::Identity

pub mod directory;
pub mod error;
pub mod experience;
pub mod guard;
pub mod identity;
pub mod registry;
pub mod skill;

pub use directory::Directory;
pub use error::RegistryError;
pub use experience::{ExperienceLedger, NewExperience};
pub use guard::Guard;
pub use identity::IdentityRegistry;
pub use registry::Registry;
pub use skill::{NewCertificate, NewEndorsement, SkillCatalog};
