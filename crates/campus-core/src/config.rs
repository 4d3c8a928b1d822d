/// Trait for loading service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize`; field `database_url` is read from
/// `DATABASE_URL` and so on.
///
/// # Panics
///
/// `from_env` panics if a required variable is missing or cannot be parsed.
/// Use `try_from_env` where a recoverable error is wanted.
pub trait Config: Sized + serde::de::DeserializeOwned {
    fn try_from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    fn from_env() -> Self {
        Self::try_from_env().expect("failed to load config from environment")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct Sample {
        database_url: String,
        #[serde(default = "default_port")]
        port: u16,
    }

    fn default_port() -> u16 {
        8080
    }

    impl Config for Sample {}

    #[test]
    fn should_deserialize_from_iterator_with_defaults() {
        let vars = vec![("DATABASE_URL".to_owned(), "postgres://x".to_owned())];
        let sample: Sample = envy::from_iter(vars).unwrap();
        assert_eq!(sample.database_url, "postgres://x");
        assert_eq!(sample.port, 8080);
    }

    #[test]
    fn should_fail_when_required_var_missing() {
        let vars: Vec<(String, String)> = vec![];
        assert!(envy::from_iter::<_, Sample>(vars).is_err());
    }
}
