//! Authorization predicates.
//!
//! Every predicate is total and side-effect free. A `false` result is a normal
//! refusal; handlers translate it into a `403`.

use crate::id::UserId;
use crate::profile::ADMIN_LABEL;

/// The caller of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: UserId,
    /// Role label derived from the caller's profile type (`None` without a profile).
    pub role_label: Option<String>,
}

impl Actor {
    pub fn new(id: UserId, role_label: Option<String>) -> Self {
        Self { id, role_label }
    }

    pub fn is_admin(&self) -> bool {
        self.role_label.as_deref() == Some(ADMIN_LABEL)
    }
}

/// A resource exclusively owned by one user.
pub trait Owned {
    fn owner_id(&self) -> UserId;
}

fn owner_or_admin(actor: &Actor, resource: &impl Owned) -> bool {
    resource.owner_id() == actor.id || actor.is_admin()
}

/// Gatekeeper for questions and their tag links.
pub struct QuestionPolicy;

impl QuestionPolicy {
    pub fn view_any(_actor: &Actor) -> bool {
        true
    }

    pub fn view(_actor: &Actor, _question: &impl Owned) -> bool {
        true
    }

    pub fn create(_actor: &Actor) -> bool {
        true
    }

    pub fn update(actor: &Actor, question: &impl Owned) -> bool {
        owner_or_admin(actor, question)
    }

    pub fn delete(actor: &Actor, question: &impl Owned) -> bool {
        owner_or_admin(actor, question)
    }

    /// Attaching a tag; the tag itself plays no part in the decision.
    pub fn attach<T>(actor: &Actor, question: &impl Owned, _tag: &T) -> bool {
        owner_or_admin(actor, question)
    }

    pub fn detach<T>(actor: &Actor, question: &impl Owned, _tag: &T) -> bool {
        owner_or_admin(actor, question)
    }
}
