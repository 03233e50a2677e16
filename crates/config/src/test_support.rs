//! Helpers for tests that touch the process environment

/// Sets environment variables for the lifetime of the guard
pub struct EnvGuard(Vec<&'static str>);

impl EnvGuard {
    pub fn set(vars: &[(&'static str, &str)]) -> Self {
        for (name, value) in vars {
            std::env::set_var(name, value);
        }
        Self(vars.iter().map(|(name, _)| *name).collect())
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for name in &self.0 {
            std::env::remove_var(name);
        }
    }
}
