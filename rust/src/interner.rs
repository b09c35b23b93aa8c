//! Task identifier interning.
//!
//! Maps task identifier strings to dense integer ids assigned in input
//! order, so the passes can use plain vectors instead of string-keyed maps.

use rustc_hash::FxHashMap;

/// Interned task id (u32 for compact storage and fast hashing).
pub type TaskId = u32;

/// Bidirectional mapping between task identifiers and dense ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskIdInterner {
    to_int: FxHashMap<String, TaskId>,
    from_int: Vec<String>,
}

impl TaskIdInterner {
    /// Create a new interner with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_int: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            from_int: Vec::with_capacity(capacity),
        }
    }

    /// Intern a new identifier, returning its id.
    ///
    /// Returns `None` if the identifier was already interned; ids are never
    /// shared between two tasks.
    pub fn insert_new(&mut self, s: &str) -> Option<TaskId> {
        if self.to_int.contains_key(s) {
            return None;
        }
        let id = self.from_int.len() as TaskId;
        self.from_int.push(s.to_string());
        self.to_int.insert(s.to_string(), id);
        Some(id)
    }

    /// Get the id for an identifier, if it exists.
    #[inline]
    pub fn get(&self, s: &str) -> Option<TaskId> {
        self.to_int.get(s).copied()
    }

    /// Get the identifier for an id.
    #[inline]
    pub fn resolve(&self, id: TaskId) -> Option<&str> {
        self.from_int.get(id as usize).map(|s| s.as_str())
    }

    /// Number of interned identifiers.
    pub fn len(&self) -> usize {
        self.from_int.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.from_int.is_empty()
    }
}

impl Default for TaskIdInterner {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
