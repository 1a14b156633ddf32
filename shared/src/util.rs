/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a prefixed string resource id, e.g. `rest-1756500000000-3f2a`.
///
/// Millisecond timestamp plus a 16-bit random suffix so two ids minted in
/// the same millisecond on different clients stay distinct. Documents
/// created by the legacy client used bare `prefix-{millis}` ids; readers
/// must not assume the suffix is present.
pub fn gen_id(prefix: &str) -> String {
    use rand::Rng;
    let suffix: u32 = rand::thread_rng().gen_range(0..0x1_0000);
    format!("{}-{}-{:04x}", prefix, now_millis(), suffix)
}
