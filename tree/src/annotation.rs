//! Public annotations: auxiliary key/value metadata attached to a node.
//!
//! Annotations never take part in the structural facet checks. They are
//! compared as a whole with a set-equivalence rule that ignores order and
//! entry identity.

use intent_core::{AnnotationId, Value};

/// One annotation entry.
#[derive(Debug, Clone)]
pub struct Annotation {
    id: AnnotationId,
    key: String,
    value: Value,
}

impl Annotation {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            id: AnnotationId::fresh(),
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn id(&self) -> AnnotationId {
        self.id
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Same key and a same-intent value; identity is ignored.
    pub fn same_intent(&self, other: &Annotation) -> bool {
        self.key == other.key && self.value.same_intent(&other.value)
    }

    /// Copy with a fresh identity.
    pub fn copy(&self) -> Self {
        Self::new(self.key.clone(), self.value.clone())
    }
}

/// Ordered list of annotations owned by one node.
#[derive(Debug, Default)]
pub struct AnnotationStore {
    entries: Vec<Annotation>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append entries in order.
    pub fn add(&mut self, items: impl IntoIterator<Item = Annotation>) {
        self.entries.extend(items);
    }

    pub fn push(&mut self, item: Annotation) {
        self.entries.push(item);
    }

    /// Append copies of every entry of `other`, each with a fresh identity.
    pub fn add_copy(&mut self, other: &AnnotationStore) {
        self.entries.extend(other.entries.iter().map(Annotation::copy));
    }

    /// Value of the first entry with this key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    /// Remove every entry with this key, returning how many were removed.
    pub fn remove(&mut self, key: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.key != key);
        before - self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Order-independent equivalence: equal sizes, and every entry on each
    /// side has a same-key, same-value counterpart on the other.
    pub fn equivalent(&self, other: &AnnotationStore) -> bool {
        self.entries.len() == other.entries.len()
            && covers(&self.entries, &other.entries)
            && covers(&other.entries, &self.entries)
    }
}

fn covers(entries: &[Annotation], candidates: &[Annotation]) -> bool {
    entries
        .iter()
        .all(|entry| candidates.iter().any(|candidate| entry.same_intent(candidate)))
}

/// Helper macro to build annotation lists.
#[macro_export]
macro_rules! annotations {
    () => {
        ::std::vec::Vec::<$crate::Annotation>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        vec![$($crate::Annotation::new($key, $value)),+]
    };
}
