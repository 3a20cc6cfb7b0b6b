use proledger_types::{ExperienceId, MemberId, OrganizationId, SkillId};
use thiserror::Error;

/// Every way a registry call can be rejected.
///
/// All of these are raised before the call writes anything.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("e-mail or identity is already registered")]
    AlreadyRegistered,

    #[error("caller is not the identity bound to this account")]
    AuthenticationFailed,

    #[error("caller may not act for member {0}")]
    Unauthorized(MemberId),

    #[error("caller may not approve experiences for organization {0}")]
    UnauthorizedApprover(OrganizationId),

    #[error("only an organization may perform this action")]
    MustBeOrganization,

    #[error("member {member} is not employed by organization {company}")]
    NotEmployeeOfCompany {
        member: MemberId,
        company: OrganizationId,
    },

    #[error("member {0} is already a manager")]
    AlreadyManager(MemberId),

    #[error("experience {experience} does not belong to member {member}")]
    ExperienceNotOwned {
        member: MemberId,
        experience: ExperienceId,
    },

    #[error("organization {0} does not exist")]
    UnknownCompany(OrganizationId),

    #[error("member {0} cannot endorse itself")]
    SelfEndorsement(MemberId),

    #[error("member {0} does not exist")]
    UnknownMember(MemberId),

    #[error("experience {0} does not exist")]
    UnknownExperience(ExperienceId),

    #[error("skill {0} does not exist")]
    UnknownSkill(SkillId),

    #[error("experience {0} is already approved with this status")]
    ExperienceAlreadyApproved(ExperienceId),
}
