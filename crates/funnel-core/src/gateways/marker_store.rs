//! Durable session marker trait (port)

/// Port for the durable "last known logged-in" marker.
///
/// The marker outlives the process and is read back on restart, so a
/// session restored before the async identity listener resolves still
/// reads as logged in. Synchronous on purpose: the route guard consults it
/// inline on every navigation.
#[cfg_attr(test, mockall::automock)]
pub trait MarkerStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn put(&self, uid: &str);
    fn clear(&self);
}
