#[cfg(any(test, feature = "test-support"))]
use std::cell::RefCell;
#[cfg(any(test, feature = "test-support"))]
use std::collections::HashMap;
#[cfg(any(test, feature = "test-support"))]
use std::env;

#[cfg(any(test, feature = "test-support"))]
use super::ReadEnv;

/// Won't touch the global process environment.
///
/// Uses `RefCell` for interior mutability, so every method takes `&self`.
#[cfg(any(test, feature = "test-support"))]
#[derive(Default)]
pub struct InMemoryEnv {
    vars: RefCell<HashMap<String, String>>,
}

#[cfg(any(test, feature = "test-support"))]
impl InMemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.borrow_mut().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.vars.borrow_mut().remove(key);
    }
}

#[cfg(any(test, feature = "test-support"))]
impl ReadEnv for InMemoryEnv {
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        self.vars
            .borrow()
            .get(key)
            .cloned()
            .ok_or(env::VarError::NotPresent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let env = InMemoryEnv::new();
        env.set("VAULT_ADDR", "http://vault:8200");

        assert_eq!(env.var("VAULT_ADDR").unwrap(), "http://vault:8200");
    }

    #[test]
    fn unset_is_not_present() {
        let env = InMemoryEnv::new();

        assert!(matches!(env.var("NONEXISTENT"), Err(env::VarError::NotPresent)));
    }

    #[test]
    fn remove_unsets() {
        let env = InMemoryEnv::new();
        env.set("VAULT_TOKEN", "hvs.abc");
        env.remove("VAULT_TOKEN");

        assert!(env.var("VAULT_TOKEN").is_err());
    }

    #[test]
    fn non_empty_filters_blank_values() {
        let env = InMemoryEnv::new();
        env.set("BLANK", "   ");
        env.set("FILLED", "value");

        assert_eq!(env.non_empty("BLANK"), None);
        assert_eq!(env.non_empty("MISSING"), None);
        assert_eq!(env.non_empty("FILLED").as_deref(), Some("value"));
    }

    #[test]
    fn non_empty_trims_surrounding_whitespace() {
        let env = InMemoryEnv::new();
        env.set("PADDED", "  hvs.token \n");

        assert_eq!(env.non_empty("PADDED").as_deref(), Some("hvs.token"));
    }
}
