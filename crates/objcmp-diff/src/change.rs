//! Change records and the flat change list.
//!
//! Records are stored in visitation order. A nested change refers to the
//! record of its enclosing field by index, so every parent index is smaller
//! than the index of its children.

use objcmp_types::Value;
use serde::Serialize;

/// One divergent field between two compared objects.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChangeRecord {
    /// Position of this record in its [`ChangeList`].
    pub id: usize,
    /// Name of the field or property that differs.
    pub attribute_name: String,
    /// Value on the source object (`Null` if absent).
    pub source_attribute: Value,
    /// Value on the compared object (`Null` if absent).
    pub changed_attribute: Value,
    /// Record of the enclosing field, or `None` for a top-level change.
    pub parent: Option<usize>,
}

impl ChangeRecord {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Ordered list of change records forming a tree through parent links.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ChangeList {
    records: Vec<ChangeRecord>,
}

impl ChangeList {
    /// Create an empty change list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no changes.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of changes.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn get(&self, id: usize) -> Option<&ChangeRecord> {
        self.records.get(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChangeRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[ChangeRecord] {
        &self.records
    }

    /// Append a record and return its id.
    ///
    /// `parent` must be the id of a record already in the list.
    pub(crate) fn push(
        &mut self,
        attribute_name: impl Into<String>,
        source_attribute: Value,
        changed_attribute: Value,
        parent: Option<usize>,
    ) -> usize {
        debug_assert!(parent.map_or(true, |p| p < self.records.len()));
        let id = self.records.len();
        self.records.push(ChangeRecord {
            id,
            attribute_name: attribute_name.into(),
            source_attribute,
            changed_attribute,
            parent,
        });
        id
    }

    /// Top-level changes.
    pub fn roots(&self) -> impl Iterator<Item = &ChangeRecord> {
        self.records.iter().filter(|r| r.is_root())
    }

    /// Direct children of the record `id`.
    pub fn children(&self, id: usize) -> impl Iterator<Item = &ChangeRecord> {
        self.records
            .iter()
            .skip(id + 1)
            .filter(move |r| r.parent == Some(id))
    }

    /// The enclosing record of `id`.
    pub fn parent(&self, id: usize) -> Option<&ChangeRecord> {
        self.get(id)?.parent.and_then(|p| self.get(p))
    }

    /// Number of ancestors of `id` (0 for a top-level change).
    pub fn depth(&self, id: usize) -> usize {
        let mut depth = 0;
        let mut current = self.get(id).and_then(|r| r.parent);
        while let Some(p) = current {
            depth += 1;
            current = self.get(p).and_then(|r| r.parent);
        }
        depth
    }

    /// Dotted attribute path of `id`, e.g. `address.street`.
    pub fn path(&self, id: usize) -> String {
        let mut names = Vec::new();
        let mut current = self.get(id);
        while let Some(record) = current {
            names.push(record.attribute_name.as_str());
            current = record.parent.and_then(|p| self.get(p));
        }
        names.reverse();
        names.join(".")
    }

    /// Find the first record with the given dotted path.
    pub fn find(&self, path: &str) -> Option<&ChangeRecord> {
        self.records.iter().find(|r| self.path(r.id) == path)
    }

    pub fn into_vec(self) -> Vec<ChangeRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a ChangeList {
    type Item = &'a ChangeRecord;
    type IntoIter = std::slice::Iter<'a, ChangeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for ChangeList {
    type Item = ChangeRecord;
    type IntoIter = std::vec::IntoIter<ChangeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
