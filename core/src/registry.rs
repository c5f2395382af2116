//! Ordered descriptor registries.
//!
//! A [`Registry`] is an explicit-length, append-only sequence of
//! descriptors. Lookups scan in registration order, so earlier entries
//! shadow later ones with the same identity; concatenation preserves
//! relative order across pushes.

/// Ordered collection of descriptors of one kind.
///
/// # Examples
///
/// ```
/// use cmdparse_core::{CommandSpec, Registry};
///
/// let mut registry: Registry<CommandSpec> = Registry::new();
/// registry.push_all(&[CommandSpec::new("snap", "Create a snapshot")]);
/// registry.push_all(&[CommandSpec::new("restore", "Restore a snapshot")]);
///
/// let names: Vec<&str> = registry.iter().map(|c| c.name.as_str()).collect();
/// assert_eq!(names, ["snap", "restore"]);
/// ```
#[derive(Debug, Clone)]
pub struct Registry<T> {
    entries: Vec<T>,
}

impl<T> Registry<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Borrows the entries as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> Registry<T> {
    /// Appends `entries`, keeping existing entries first.
    pub fn push_all(&mut self, entries: &[T]) {
        self.entries = concat(&self.entries, entries);
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Concatenates two descriptor lists into a new one.
///
/// Entries of `first` come before entries of `second`; relative order
/// within each list is preserved.
///
/// # Examples
///
/// ```
/// use cmdparse_core::concat;
///
/// let merged = concat(&[1, 2], &[3]);
/// assert_eq!(merged, [1, 2, 3]);
/// ```
pub fn concat<T: Clone>(first: &[T], second: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(first.len() + second.len());
    merged.extend_from_slice(first);
    merged.extend_from_slice(second);
    merged
}
