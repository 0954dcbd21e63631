use std::collections::HashSet;

/// Per-session baseline of wardrobe document ids known to exist remotely.
///
/// Owned by whoever owns the sync session; ids disappear from here only
/// after a successful commit, so a failed save never loses the deletion
/// baseline. An empty context means "no baseline yet": nothing is deleted
/// and every item counts as new.
#[derive(Debug, Default)]
pub struct ReconciliationContext {
    known_ids: HashSet<String>,
}

impl ReconciliationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn knows(&self, id: &str) -> bool {
        self.known_ids.contains(id)
    }

    pub fn known_ids(&self) -> impl Iterator<Item = &str> {
        self.known_ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.known_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known_ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.known_ids.clear();
    }

    /// Replace the baseline after a successful load or commit.
    pub fn reset<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_ids = ids.into_iter().map(Into::into).collect();
    }
}
