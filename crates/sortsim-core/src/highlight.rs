//! Per-step highlight roles.
//!
//! A [`HighlightSet`] tells the renderer which bars a step touched and
//! why. The engine only assigns semantic roles; mapping a role to a
//! color is the renderer's business.

use indexmap::IndexMap;

/// Why an index is highlighted in the current frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HighlightRole {
    /// The element was compared this step.
    Compared,
    /// The element was moved this step.
    Swapped,
    /// The element is the pivot of the partition just performed.
    Pivot,
    /// The element bounds the range the step operated on.
    Boundary,
}

/// Index-to-role mapping for a single step.
///
/// Iteration follows insertion order so identical steps always produce
/// identical frames. Marking an index twice keeps its original position
/// and replaces the role.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HighlightSet {
    roles: IndexMap<usize, HighlightRole>,
}

impl HighlightSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `role` to `index`.
    pub fn mark(&mut self, index: usize, role: HighlightRole) {
        self.roles.insert(index, role);
    }

    /// Builder-style [`mark`](Self::mark).
    pub fn with(mut self, index: usize, role: HighlightRole) -> Self {
        self.mark(index, role);
        self
    }

    /// Role assigned to `index`, if any.
    pub fn role(&self, index: usize) -> Option<HighlightRole> {
        self.roles.get(&index).copied()
    }

    /// Number of highlighted indices.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether nothing is highlighted.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Highlighted `(index, role)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, HighlightRole)> + '_ {
        self.roles.iter().map(|(&i, &r)| (i, r))
    }
}

impl FromIterator<(usize, HighlightRole)> for HighlightSet {
    fn from_iter<I: IntoIterator<Item = (usize, HighlightRole)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (index, role) in iter {
            set.mark(index, role);
        }
        set
    }
}
