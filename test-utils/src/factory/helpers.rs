//! Shared helper utilities for factory methods.

/// Counter for generating unique default values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Factories use this to give default names distinct suffixes, which keeps assertions
/// about "which record came back" unambiguous.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}
