use std::collections::HashMap;

/// Maps normalized column names to the field each one scans into.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldMap {
    fields: HashMap<String, FieldPath>,
}

/// Field indices leading from a record to a (possibly embedded) field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    projection: Vec<usize>,
}

impl FieldMap {
    /// Inserts a mapping, returning the path it replaced.
    pub(super) fn insert(&mut self, name: String, path: FieldPath) -> Option<FieldPath> {
        self.fields.insert(name, path)
    }

    pub fn get(&self, name: &str) -> Option<&FieldPath> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldPath)> {
        self.fields.iter().map(|(name, path)| (name.as_str(), path))
    }

    /// Column names in ascending order.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl FieldPath {
    pub fn from_index(index: usize) -> FieldPath {
        FieldPath {
            projection: vec![index],
        }
    }

    /// Returns a new path with `index` as the first step.
    pub fn prefixed(&self, index: usize) -> FieldPath {
        let mut projection = Vec::with_capacity(self.projection.len() + 1);
        projection.push(index);
        projection.extend_from_slice(&self.projection);
        FieldPath { projection }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.projection
    }

    pub fn len(&self) -> usize {
        self.projection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projection.is_empty()
    }
}

impl From<Vec<usize>> for FieldPath {
    fn from(projection: Vec<usize>) -> FieldPath {
        FieldPath { projection }
    }
}

impl<const N: usize> From<[usize; N]> for FieldPath {
    fn from(projection: [usize; N]) -> FieldPath {
        FieldPath {
            projection: projection.to_vec(),
        }
    }
}

impl PartialEq<[usize]> for FieldPath {
    fn eq(&self, other: &[usize]) -> bool {
        self.projection == other
    }
}

impl<const N: usize> PartialEq<[usize; N]> for FieldPath {
    fn eq(&self, other: &[usize; N]) -> bool {
        self.projection == other
    }
}
