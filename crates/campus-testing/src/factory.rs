//! Randomized user attributes for seeding tests.
//!
//! Every generated user has a unique email, a verified address, the plaintext
//! password [`DEFAULT_PASSWORD`], a random gender and blocked flag, and no
//! profile attached.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use rand::RngExt;

use campus_domain::gender::Gender;

pub const DEFAULT_PASSWORD: &str = "123456";

const FIRST_NAMES: &[&str] = &[
    "Amira", "Bassel", "Dana", "Elias", "Farah", "Hadi", "Lina", "Omar", "Rania", "Yusuf",
];
const LAST_NAMES: &[&str] = &[
    "Haddad", "Khoury", "Saleh", "Nasser", "Aziz", "Mansour", "Darwish", "Sabbagh",
];
const STREETS: &[&str] = &[
    "University Ave", "Baghdad St", "Mazzeh Hwy", "Abu Rummaneh", "Shaalan St",
];

static SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Attributes of a user as submitted at registration.
#[derive(Debug, Clone)]
pub struct UserAttributes {
    pub name: String,
    pub email: String,
    pub email_verified_at: Option<DateTime<Utc>>,
    pub password: String,
    pub gender: Gender,
    pub blocked: bool,
    pub address: String,
    pub mobile: String,
}

/// Builds [`UserAttributes`] with random but well-formed values.
pub struct UserFactory;

impl UserFactory {
    pub fn make() -> UserAttributes {
        let mut rng = rand::rng();
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
        let street = STREETS[rng.random_range(0..STREETS.len())];

        UserAttributes {
            name: format!("{first} {last}"),
            email: format!(
                "{}.{}{seq}@example.test",
                first.to_lowercase(),
                last.to_lowercase()
            ),
            email_verified_at: Some(Utc::now()),
            password: DEFAULT_PASSWORD.to_owned(),
            gender: Gender::ALL[rng.random_range(0..Gender::ALL.len())],
            blocked: rng.random_bool(0.5),
            address: format!("{} {street}", rng.random_range(1..400)),
            mobile: format!("+9639{:08}", rng.random_range(0..100_000_000u32)),
        }
    }

    pub fn make_many(count: usize) -> Vec<UserAttributes> {
        (0..count).map(|_| Self::make()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn should_generate_unique_emails() {
        let users = UserFactory::make_many(50);
        let emails: HashSet<_> = users.iter().map(|u| u.email.clone()).collect();
        assert_eq!(emails.len(), 50);
    }

    #[test]
    fn should_fill_well_formed_fields() {
        let user = UserFactory::make();
        assert!(user.email.contains('@'));
        assert_eq!(user.password, DEFAULT_PASSWORD);
        assert!(user.mobile.starts_with("+963"));
        assert_eq!(user.mobile.len(), 13);
        assert!(user.email_verified_at.is_some());
    }
}
