/// An optional response store consulted by the minimal dispatch strategy
/// before it performs a live fetch.
///
/// A hit stands in for the response body exactly as if the request had been
/// made; a miss falls through to the transport. Population and expiry are
/// entirely the implementation's concern; this crate only ever reads.
pub trait ResponseCache: Send + Sync {
    /// Returns the stored body for `url`, if this cache can satisfy it.
    fn lookup(&self, url: &str) -> Option<String>;
}
