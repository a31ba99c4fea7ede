/// Returns the URL of the item resource for `key` under `base`.
///
/// The key is percent-encoded so it always occupies exactly one path
/// segment. Reads and writes must both build item URLs through this
/// function so expire events line up with cache keys.
pub fn item_url(base: &str, key: &str) -> String {
    format!("{}/{}", base, urlencoding::encode(key))
}

/// Returns the URL insert-style POSTs are issued against.
pub fn collection_post_url(base: &str) -> String {
    format!("{}/", base)
}
