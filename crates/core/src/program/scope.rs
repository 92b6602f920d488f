use indexmap::IndexSet;

/// Names reserved in one method's lexical scope.
///
/// Seeded from the outer scope, then grown as the method's own variables are
/// named. Insertion order is kept so dumps are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopedNames {
    names: IndexSet<String>,
}

impl ScopedNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Returns `false` if the name was already reserved.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ScopedNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
