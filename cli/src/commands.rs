//! Subcommands: one per registry entry point, plus read-only views.

use anyhow::{Context, Result};
use clap::Subcommand;
use proledger_registry::{NewCertificate, NewEndorsement, NewExperience, Registry};
use proledger_types::{
    Account, AccountType, CertificateId, Email, EndorsementId, ExperienceId, Identity, MemberId,
    OrganizationId, SkillId,
};
use serde_json::{json, Value};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register a member or organization owned by the caller.
    SignUp {
        email: Email,
        name: String,
        /// "member" or "organization".
        #[arg(long = "type", default_value = "member")]
        account_type: AccountType,
    },
    /// Resolve the caller's account from its e-mail.
    Login { email: Email },
    /// Rebind an account to a new identity.
    UpdateIdentity {
        #[arg(long = "type")]
        account_type: AccountType,
        email: Email,
        new_identity: Identity,
    },
    /// Claim an employment period at an organization.
    AddExperience {
        member: MemberId,
        company: OrganizationId,
        role: String,
        #[arg(long)]
        start_date: String,
        #[arg(long, default_value = "")]
        end_date: String,
    },
    /// Approve a claimed experience as current (--active) or previous.
    ApproveExperience {
        experience: ExperienceId,
        company: OrganizationId,
        #[arg(long)]
        active: bool,
    },
    SetCurrentExperience {
        member: MemberId,
        experience: ExperienceId,
    },
    SetCompany {
        member: MemberId,
        company: OrganizationId,
    },
    /// Appoint a member of the calling organization as manager.
    ApproveManager { member: MemberId },
    AddSkill { member: MemberId, name: String },
    AddCertification {
        member: MemberId,
        skill: SkillId,
        name: String,
        #[arg(long)]
        issuer: String,
        #[arg(long, default_value = "")]
        url: String,
        #[arg(long, default_value = "")]
        issued_on: String,
        #[arg(long, default_value = "")]
        valid_till: String,
    },
    EndorseSkill {
        member: MemberId,
        endorsee: MemberId,
        skill: SkillId,
        #[arg(long)]
        date: String,
        #[arg(long, default_value = "")]
        comment: String,
    },
    /// Print a record as JSON.
    Show {
        #[command(subcommand)]
        what: Show,
    },
}

#[derive(Subcommand, Debug)]
pub enum Show {
    Member { id: MemberId },
    Organization { id: OrganizationId },
    Experience { id: ExperienceId },
    Skill { id: SkillId },
    Certificate { id: CertificateId },
    Endorsement { id: EndorsementId },
    /// The account bound to an identity.
    Account { identity: Identity },
}

/// What a command produced and whether the state must be saved.
#[derive(Debug)]
pub struct Outcome {
    pub output: Value,
    pub mutated: bool,
}

impl Outcome {
    fn read(output: Value) -> Self {
        Self {
            output,
            mutated: false,
        }
    }

    fn write(output: Value) -> Self {
        Self {
            output,
            mutated: true,
        }
    }
}

/// Run one command against `registry`. Mutations require a caller.
pub fn execute(
    registry: &mut Registry,
    caller: Option<Identity>,
    command: Command,
) -> Result<Outcome> {
    let require_caller =
        || caller.context("--caller (or PROLEDGER_CALLER) is required for this command");

    let outcome = match command {
        Command::SignUp {
            email,
            name,
            account_type,
        } => {
            let account = registry.sign_up(&require_caller()?, email, name, account_type)?;
            Outcome::write(account_json(account))
        }
        Command::Login { email } => {
            let account = registry.login(&require_caller()?, &email)?;
            Outcome::read(account_json(account))
        }
        Command::UpdateIdentity {
            account_type,
            email,
            new_identity,
        } => {
            let caller = require_caller()?;
            let account = registry.update_identity(&caller, account_type, &email, new_identity)?;
            Outcome::write(json!({ "id": account.raw_id(), "identity": new_identity.to_string() }))
        }
        Command::AddExperience {
            member,
            company,
            role,
            start_date,
            end_date,
        } => {
            let claim = NewExperience {
                start_date,
                end_date,
                role,
                company_id: company,
            };
            let id = registry.add_experience(&require_caller()?, member, claim)?;
            Outcome::write(json!({ "experience_id": id }))
        }
        Command::ApproveExperience {
            experience,
            company,
            active,
        } => {
            registry.approve_experience(&require_caller()?, experience, company, active)?;
            Outcome::write(json!({ "experience_id": experience, "is_active": active }))
        }
        Command::SetCurrentExperience { member, experience } => {
            registry.set_current_active_experience(&require_caller()?, member, experience)?;
            Outcome::write(json!({ "member_id": member, "experience_id": experience }))
        }
        Command::SetCompany { member, company } => {
            registry.set_company(&require_caller()?, member, company)?;
            Outcome::write(json!({ "member_id": member, "company_id": company }))
        }
        Command::ApproveManager { member } => {
            registry.approve_manager(&require_caller()?, member)?;
            Outcome::write(json!({ "member_id": member, "is_manager": true }))
        }
        Command::AddSkill { member, name } => {
            let id = registry.add_skill(&require_caller()?, member, name)?;
            Outcome::write(json!({ "skill_id": id }))
        }
        Command::AddCertification {
            member,
            skill,
            name,
            issuer,
            url,
            issued_on,
            valid_till,
        } => {
            let cert = NewCertificate {
                url,
                issued_on,
                valid_till,
                name,
                issuer,
            };
            let id = registry.add_certification(&require_caller()?, member, skill, cert)?;
            Outcome::write(json!({ "certificate_id": id }))
        }
        Command::EndorseSkill {
            member,
            endorsee,
            skill,
            date,
            comment,
        } => {
            let endorsement = NewEndorsement {
                endorsee_id: endorsee,
                skill_id: skill,
                date,
                comment,
            };
            let id = registry.endorse_skill(&require_caller()?, member, endorsement)?;
            let verified = registry.skill(skill).is_some_and(|s| s.is_verified);
            Outcome::write(json!({ "endorsement_id": id, "skill_verified": verified }))
        }
        Command::Show { what } => Outcome::read(show(registry, what)?),
    };
    Ok(outcome)
}

fn show(registry: &Registry, what: Show) -> Result<Value> {
    let value = match what {
        Show::Member { id } => {
            let member = registry
                .member(id)
                .with_context(|| format!("member {id} not found"))?;
            json!({
                "member": member,
                "skills": registry.member_skills(id),
                "experiences": registry.member_experiences(id),
            })
        }
        Show::Organization { id } => {
            let org = registry
                .organization(id)
                .with_context(|| format!("organization {id} not found"))?;
            serde_json::to_value(org)?
        }
        Show::Experience { id } => {
            let exp = registry
                .experience(id)
                .with_context(|| format!("experience {id} not found"))?;
            serde_json::to_value(exp)?
        }
        Show::Skill { id } => {
            let skill = registry
                .skill(id)
                .with_context(|| format!("skill {id} not found"))?;
            json!({
                "skill": skill,
                "certificates": registry.skill_certificates(id),
                "endorsements": registry.skill_endorsements(id),
            })
        }
        Show::Certificate { id } => {
            let cert = registry
                .certificate(id)
                .with_context(|| format!("certificate {id} not found"))?;
            serde_json::to_value(cert)?
        }
        Show::Endorsement { id } => {
            let endorsement = registry
                .endorsement(id)
                .with_context(|| format!("endorsement {id} not found"))?;
            serde_json::to_value(endorsement)?
        }
        Show::Account { identity } => {
            let account = registry
                .account_of(&identity)
                .with_context(|| format!("no account bound to {identity}"))?;
            account_json(account)
        }
    };
    Ok(value)
}

fn account_json(account: Account) -> Value {
    json!({ "account_type": account.account_type(), "id": account.raw_id() })
}
