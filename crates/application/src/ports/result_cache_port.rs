/// Fixed-TTL store for results of expensive commands.
///
/// Implementations must be safe under concurrent reads and writes; when two
/// writers race on one key, the last write wins.
pub trait ResultCachePort: Send + Sync {
    /// Returns the value only while it is younger than the cache TTL.
    /// Expired entries are removed on lookup.
    fn get(&self, key: &str) -> Option<String>;

    /// Inserts or overwrites, restarting the entry's lifetime.
    fn set(&self, key: &str, value: String);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
