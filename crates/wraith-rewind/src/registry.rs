//! The [`RewindRegistry`]: id→entity map with atomic capture/restore.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use wraith_core::RestoreError;

use crate::state::{Rewindable, RewindState};

/// A shared handle to a registered rewindable entity.
pub type SharedRewindable = Rc<RefCell<dyn Rewindable>>;

/// Registry of rewindable entities, keyed by string id.
///
/// The host registers each entity once (the registry holds a shared
/// handle; the host keeps its own and drives the entity every tick)
/// and then captures or restores the whole set on demand at save and
/// rewind points — never in the per-tick path.
///
/// Restore is deliberately tolerant of drift between runs: snapshot
/// ids that are no longer registered are skipped without error, and
/// registered ids absent from the snapshot are left untouched. The
/// registry can therefore evolve (entities added or removed) without
/// restore ever failing for shape reasons; only genuinely invalid
/// snapshot data is an error.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use wraith_core::Position;
/// use wraith_recorder::{Timing, TrailRecorder};
/// use wraith_rewind::RewindRegistry;
///
/// let ghost = Rc::new(RefCell::new(TrailRecorder::with_timing(
///     Timing::from_ticks(2, 8, 1),
/// )));
///
/// let mut registry = RewindRegistry::new();
/// registry.register("ghost", ghost.clone());
///
/// ghost.borrow_mut().record(&[Position::new(1, 1)]);
/// let save = registry.capture(100);
///
/// ghost.borrow_mut().record(&[Position::new(2, 2)]);
/// registry.restore(&save).unwrap();
/// assert_eq!(ghost.borrow().len(), 1);
/// ```
#[derive(Default)]
pub struct RewindRegistry {
    entries: IndexMap<String, SharedRewindable>,
}

impl RewindRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity under `id`. Last write wins on duplicates.
    pub fn register(&mut self, id: impl Into<String>, entry: SharedRewindable) {
        self.entries.insert(id.into(), entry);
    }

    /// Remove the entity registered under `id`, reporting whether one
    /// was present.
    pub fn unregister(&mut self, id: &str) -> bool {
        self.entries.shift_remove(id).is_some()
    }

    /// Remove every registered entity.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of registered entities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entities are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an entity is registered under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// The registered ids, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Capture every registered entity.
    ///
    /// `timestamp` is an opaque caller-supplied marker (a global tick,
    /// say); the registry attaches no behavior to it.
    pub fn capture(&self, timestamp: u64) -> RegistrySnapshot {
        let entries = self
            .entries
            .iter()
            .map(|(id, entry)| (id.clone(), entry.borrow().capture()))
            .collect();
        RegistrySnapshot { timestamp, entries }
    }

    /// Restore every snapshot entry whose id is still registered.
    ///
    /// Ids present in the snapshot but no longer registered are
    /// skipped; registered ids absent from the snapshot are left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Fails fast with [`RestoreError`] when an entry's state is
    /// internally inconsistent or of the wrong kind; entries already
    /// applied stay restored.
    pub fn restore(&self, snapshot: &RegistrySnapshot) -> Result<(), RestoreError> {
        for (id, state) in &snapshot.entries {
            if let Some(entry) = self.entries.get(id) {
                entry.borrow_mut().apply(state)?;
            }
        }
        Ok(())
    }
}

/// An atomic capture of every entity registered at one moment.
#[derive(Clone, Debug)]
pub struct RegistrySnapshot {
    timestamp: u64,
    entries: IndexMap<String, RewindState>,
}

impl RegistrySnapshot {
    /// The caller-supplied marker this capture was taken at.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// The captured entity states, in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &RewindState)> {
        self.entries.iter().map(|(id, state)| (id.as_str(), state))
    }

    /// The captured state for `id`, if present.
    pub fn get(&self, id: &str) -> Option<&RewindState> {
        self.entries.get(id)
    }

    /// Number of captured entities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the capture holds no entities.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
