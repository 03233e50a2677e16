//! Key and environment variable name derivation

/// Join binding key segments into a dotted configuration key
///
/// An empty leading segment (the root prefix) is dropped so keys never start
/// with a dot.
pub fn join_key<S: AsRef<str>>(segments: &[S]) -> String {
    let segments = match segments.split_first() {
        Some((first, rest)) if first.as_ref().is_empty() => rest,
        _ => segments,
    };

    segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(".")
}

/// Environment variable name for a dotted configuration key
pub fn env_var_name(env_prefix: &str, key: &str) -> String {
    let name = key.replace('.', "_");
    let name = if env_prefix.is_empty() {
        name
    } else {
        format!("{}_{}", env_prefix, name)
    };
    name.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_key() {
        assert_eq!(join_key(&["", "f1"]), "f1");
        assert_eq!(join_key(&["f2", "f3", "f4"]), "f2.f3.f4");
        assert_eq!(join_key(&["", "server", "http", "port"]), "server.http.port");
        assert_eq!(join_key(&["NotFound", "f1"]), "NotFound.f1");
        assert_eq!(join_key::<&str>(&[]), "");
    }

    #[test]
    fn test_env_var_name() {
        assert_eq!(env_var_name("", "f1"), "F1");
        assert_eq!(env_var_name("", "f2.f3.f4"), "F2_F3_F4");
        assert_eq!(env_var_name("PREFIX", "f1"), "PREFIX_F1");
        assert_eq!(env_var_name("SomePrefix", "f5.f6"), "SOMEPREFIX_F5_F6");
        assert_eq!(env_var_name("", "NotFound.f1"), "NOTFOUND_F1");
    }
}
