//! Recursive field-level diff.
//!
//! The differ compares two objects field by field in declaration order,
//! skipping type-level constants. Every divergent field becomes a
//! [`ChangeRecord`](crate::ChangeRecord); if both sides of a divergent field
//! are nested objects, the walk descends into them with the new record as
//! parent.
//!
//! # Termination
//!
//! Object graphs may share and even cycle through [`ObjectRef`] handles. The
//! walk keeps the identity pairs on its current path and does not descend
//! into a pair it is already comparing. Independently, nesting deeper than
//! [`DiffConfig::max_depth`] fails the call.
//!
//! [`ObjectRef`]: objcmp_types::ObjectRef

use std::collections::HashSet;

use objcmp_types::{identity, same_type, Inspect, Value};
use tracing::{debug, trace};

use crate::change::ChangeList;
use crate::config::DiffConfig;
use crate::error::{DiffError, DiffResult};

/// Compare two objects with the default configuration.
pub fn diff(source: &dyn Inspect, compare_to: &dyn Inspect) -> DiffResult<ChangeList> {
    Differ::default().diff(source, compare_to)
}

/// Recursive structural differ.
///
/// Holds only configuration; each call accumulates into its own list.
#[derive(Clone, Debug, Default)]
pub struct Differ {
    config: DiffConfig,
}

impl Differ {
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Compare two objects and return a fresh change list.
    pub fn diff(
        &self,
        source: &dyn Inspect,
        compare_to: &dyn Inspect,
    ) -> DiffResult<ChangeList> {
        let mut changes = ChangeList::new();
        self.diff_into(Some(source), Some(compare_to), &mut changes, None)?;
        Ok(changes)
    }

    /// Compare two possibly absent objects, appending to `changes`.
    ///
    /// Records produced by this call get `parent` as their parent. If either
    /// object is absent or the runtime types differ, nothing is appended;
    /// with [`DiffConfig::strict`] a top-level call (`parent == None`) fails
    /// with [`DiffError::InvalidComparison`] instead.
    ///
    /// A `parent` that is not the id of a record in `changes` fails with
    /// [`DiffError::UnknownParent`].
    pub fn diff_into(
        &self,
        source: Option<&dyn Inspect>,
        compare_to: Option<&dyn Inspect>,
        changes: &mut ChangeList,
        parent: Option<usize>,
    ) -> DiffResult<()> {
        if let Some(id) = parent {
            if id >= changes.len() {
                return Err(DiffError::UnknownParent {
                    parent: id,
                    len: changes.len(),
                });
            }
        }

        let (source, compare_to) = match (source, compare_to) {
            (Some(s), Some(c)) if same_type(s, c) => (s, c),
            (source, compare_to) => {
                if self.config.strict && parent.is_none() {
                    return Err(DiffError::InvalidComparison {
                        left: source.map_or("<absent>", |s| s.type_name()),
                        right: compare_to.map_or("<absent>", |c| c.type_name()),
                    });
                }
                trace!("inputs absent or of different types, nothing to compare");
                return Ok(());
            }
        };

        let depth = parent.map_or(0, |id| changes.depth(id) + 1);
        let mut walk = Walk {
            config: &self.config,
            changes,
            on_path: HashSet::new(),
        };
        walk.visit(source, compare_to, parent, depth)
    }
}

/// State of a single diff call.
struct Walk<'a> {
    config: &'a DiffConfig,
    changes: &'a mut ChangeList,
    /// Identity pairs currently being compared further up the path.
    on_path: HashSet<(usize, usize)>,
}

impl Walk<'_> {
    fn visit(
        &mut self,
        source: &dyn Inspect,
        compare_to: &dyn Inspect,
        parent: Option<usize>,
        depth: usize,
    ) -> DiffResult<()> {
        if !same_type(source, compare_to) {
            trace!(
                source = source.type_name(),
                compare_to = compare_to.type_name(),
                "nested types differ, not descending"
            );
            return Ok(());
        }
        if depth > self.config.max_depth {
            return Err(DiffError::DepthExceeded {
                limit: self.config.max_depth,
                path: parent.map(|id| self.changes.path(id)).unwrap_or_default(),
            });
        }

        let pair = (identity(source), identity(compare_to));
        if self.config.detect_cycles && !self.on_path.insert(pair) {
            debug!(
                type_name = source.type_name(),
                depth, "cycle detected, not descending"
            );
            return Ok(());
        }

        let result = self.visit_fields(source, compare_to, parent, depth);

        if self.config.detect_cycles {
            self.on_path.remove(&pair);
        }
        result
    }

    fn visit_fields(
        &mut self,
        source: &dyn Inspect,
        compare_to: &dyn Inspect,
        parent: Option<usize>,
        depth: usize,
    ) -> DiffResult<()> {
        let theirs = compare_to.fields();

        for (index, field) in source.fields().into_iter().enumerate() {
            if field.is_constant() {
                continue;
            }
            // Same type, so fields normally line up by position.
            let other = match theirs.get(index) {
                Some(f) if f.name == field.name => f.value.clone(),
                _ => compare_to.field(field.name)?,
            };
            if field.value == other {
                continue;
            }

            let nested = match (&field.value, &other) {
                (Value::Object(a), Value::Object(b)) => Some((a.clone(), b.clone())),
                _ => None,
            };
            let id = self
                .changes
                .push(field.name, field.value, other, parent);
            debug!(
                attribute = field.name,
                id,
                ?parent,
                depth,
                "field changed"
            );

            // Leaf values have no fields of their own, so only object pairs
            // are descended into.
            if let Some((a, b)) = nested {
                self.visit(a.as_ref(), b.as_ref(), Some(id), depth + 1)?;
            }
        }
        Ok(())
    }
}
