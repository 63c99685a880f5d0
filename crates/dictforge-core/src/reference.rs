use std::fmt;
use std::sync::Mutex;

/// Composite `(kind, id)` key addressing one entry of the source table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryKey {
    pub kind: String,
    pub id: String,
}

impl EntryKey {
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
        }
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.kind, self.id)
    }
}

/// Notified when a cross-reference cannot be resolved.
///
/// Observers only watch; the reference is skipped either way.
pub trait ReferenceObserver: Send + Sync {
    fn dangling(&self, referrer: &EntryKey, target: &EntryKey);
}

/// Ignores dangling references.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl ReferenceObserver for SilentObserver {
    fn dangling(&self, _referrer: &EntryKey, _target: &EntryKey) {}
}

/// Reports dangling references as warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ReferenceObserver for TracingObserver {
    fn dangling(&self, referrer: &EntryKey, target: &EntryKey) {
        tracing::warn!("{referrer} references missing entry {target}");
    }
}

/// Records every dangling reference it sees.
#[derive(Debug, Default)]
pub struct CollectingObserver {
    seen: Mutex<Vec<(EntryKey, EntryKey)>>,
}

impl CollectingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<(EntryKey, EntryKey)> {
        match self.seen.lock() {
            Ok(mut seen) => std::mem::take(&mut *seen),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl ReferenceObserver for CollectingObserver {
    fn dangling(&self, referrer: &EntryKey, target: &EntryKey) {
        let mut seen = match self.seen.lock() {
            Ok(seen) => seen,
            Err(poisoned) => poisoned.into_inner(),
        };
        seen.push((referrer.clone(), target.clone()));
    }
}
