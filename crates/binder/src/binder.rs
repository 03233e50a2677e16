//! Schema binder
//!
//! Walks a schema depth-first in declaration order and registers one
//! environment variable binding per configurable leaf field.

use crate::key::{env_var_name, join_key};
use envbind_types::{Describe, EnvStore, Shape};
use tracing::{debug, trace};

/// Bind every configurable leaf field of `value`'s schema into `store`
///
/// Values whose type is not a record (after one level of indirection) bind
/// nothing.
pub fn bind<S, T>(store: &mut S, value: &T)
where
    S: EnvStore + ?Sized,
    T: Describe + ?Sized,
{
    bind_with_prefix(store, "", value);
}

/// Bind `value`'s schema with every key nested under `prefix`
pub fn bind_with_prefix<S, T>(store: &mut S, prefix: &str, _value: &T)
where
    S: EnvStore + ?Sized,
    T: Describe + ?Sized,
{
    bind_shape(store, prefix, T::shape());
}

/// Bind the schema of `T` without an instance of it
pub fn bind_type<T, S>(store: &mut S)
where
    T: Describe + ?Sized,
    S: EnvStore + ?Sized,
{
    bind_shape(store, "", T::shape());
}

/// Bind an explicit shape with every key nested under `prefix`
pub fn bind_shape<S>(store: &mut S, prefix: &str, shape: Shape)
where
    S: EnvStore + ?Sized,
{
    let mut path = vec![prefix];
    let bound = walk(store, &mut path, shape);
    debug!(prefix, bound, "Bound schema to environment");
}

fn walk<'a, S>(store: &mut S, path: &mut Vec<&'a str>, shape: Shape) -> usize
where
    S: EnvStore + ?Sized,
{
    let Some(record) = shape.into_record() else {
        trace!(path = %join_key(path.as_slice()), "Not a record, nothing to bind");
        return 0;
    };

    let mut bound = 0;
    for field in record.fields() {
        // An explicit opt-out wins even when a key is present.
        if field.is_opted_out() {
            trace!(record = record.name(), field = field.name(), "Field opted out of env binding");
            continue;
        }

        let key = field.binding_key();
        if key.is_empty() {
            trace!(record = record.name(), field = field.name(), "Field has no binding key");
            continue;
        }

        path.push(key);
        match field.shape() {
            nested @ Shape::Record(_) => bound += walk(store, path, nested),
            _ => {
                let key = join_key(path.as_slice());
                let env_var = env_var_name(store.env_prefix(), &key);
                debug!(key = %key, env_var = %env_var, "Binding environment variable");
                store.bind_env(&key, &env_var);
                bound += 1;
            }
        }
        path.pop();
    }

    bound
}
