use super::{RecordType, Tags};

/// A declared field of a record type.
#[derive(Debug, Clone)]
pub struct Field {
    /// Index of the field in the containing record
    pub index: usize,

    /// The field identifier as written in the source
    pub name: &'static str,

    /// Whether the field is visible outside its module
    pub visibility: Visibility,

    /// Per-field overrides, keyed by tag name
    pub tags: Tags,

    /// Value or embedded record
    pub kind: FieldKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

#[derive(Clone, Copy)]
pub enum FieldKind {
    /// The field receives a single column value
    Value,

    /// The field is a record whose fields are flattened into the parent
    Embedded(fn() -> RecordType),
}

impl Field {
    /// Creates a public value field with no tags.
    pub fn new(index: usize, name: &'static str) -> Field {
        Field {
            index,
            name,
            visibility: Visibility::Public,
            tags: Tags::default(),
            kind: FieldKind::Value,
        }
    }

    pub fn private(mut self) -> Field {
        self.visibility = Visibility::Private;
        self
    }

    pub fn tag(mut self, key: &'static str, value: &'static str) -> Field {
        self.tags.push(key, value);
        self
    }

    pub fn embedded(mut self, record_type: fn() -> RecordType) -> Field {
        self.kind = FieldKind::Embedded(record_type);
        self
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    /// Returns the embedded record type, if this field is embedded.
    pub fn embedded_type(&self) -> Option<RecordType> {
        match self.kind {
            FieldKind::Embedded(record_type) => Some(record_type()),
            FieldKind::Value => None,
        }
    }
}

impl core::fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FieldKind::Value => f.write_str("Value"),
            FieldKind::Embedded(record_type) => f
                .debug_tuple("Embedded")
                .field(&record_type().name)
                .finish(),
        }
    }
}
