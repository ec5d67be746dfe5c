//! Host configuration lookup.
//!
//! The client never reads ambient global state; the host hands it a
//! `ConfigSource` and the client queries the keys it needs. Both the dotted
//! (`cachet.api_url`) and colon (`cachet:api_url`) spellings are accepted,
//! dotted first, matching what existing host configurations contain.

use std::collections::HashMap;

/// Configuration key spellings for the base API URL.
pub const API_URL_KEYS: [&str; 2] = ["cachet.api_url", "cachet:api_url"];

/// Configuration key spellings for the API token.
pub const API_TOKEN_KEYS: [&str; 2] = ["cachet.api_token", "cachet:api_token"];

/// Read-only view of the host's configuration.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<String>;
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// The empty configuration; every lookup misses. Useful when all values are
/// supplied as explicit overrides.
impl ConfigSource for () {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Return the first key spelling that resolves.
pub(crate) fn first_match<C: ConfigSource>(config: &C, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| config.get(key))
}
