//! The configuration store capability consumed by the binder

/// A configuration store that accepts environment variable bindings
pub trait EnvStore {
    /// Declare that resolving `key` should consider the environment variable `env_var`
    fn bind_env(&mut self, key: &str, env_var: &str);

    /// Configured environment variable prefix, empty when none is set
    fn env_prefix(&self) -> &str;
}

impl<S: EnvStore + ?Sized> EnvStore for &mut S {
    fn bind_env(&mut self, key: &str, env_var: &str) {
        (**self).bind_env(key, env_var);
    }

    fn env_prefix(&self) -> &str {
        (**self).env_prefix()
    }
}

impl<S: EnvStore + ?Sized> EnvStore for Box<S> {
    fn bind_env(&mut self, key: &str, env_var: &str) {
        (**self).bind_env(key, env_var);
    }

    fn env_prefix(&self) -> &str {
        (**self).env_prefix()
    }
}
