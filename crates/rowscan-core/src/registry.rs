mod builder;
pub use builder::Builder;

mod field_map;
pub use field_map::{FieldMap, FieldPath};

use crate::{Record, RecordType};

use parking_lot::RwLock;
use std::{any::TypeId, collections::HashMap, sync::Arc};

/// Function applied to field names before they are used as column names.
pub type NameMapper = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Computes and caches the field map of each record type.
///
/// The first lookup of a type walks its descriptor; every later lookup is a
/// read-locked hash probe. Entries are never evicted.
pub struct Registry {
    config: RwLock<Config>,
    cache: RwLock<HashMap<TypeId, Arc<FieldMap>>>,
}

#[derive(Clone)]
struct Config {
    /// Tag key holding per-field column overrides
    tag_name: String,

    /// Normalizes field names into column names
    name_mapper: NameMapper,

    /// Log when a field shadows another with the same column name
    report_collisions: bool,
}

impl Registry {
    pub fn new() -> Registry {
        Builder::default().build()
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the field map for `T`, computing it on first use.
    pub fn field_map<T: Record>(&self) -> Arc<FieldMap> {
        match self.cached(TypeId::of::<T>()) {
            Some(field_map) => field_map,
            None => self.populate(&T::record_type()),
        }
    }

    /// Returns the field map for the described record type, computing it on
    /// first use.
    pub fn field_map_for(&self, record_type: &RecordType) -> Arc<FieldMap> {
        match self.cached(record_type.id) {
            Some(field_map) => field_map,
            None => self.populate(record_type),
        }
    }

    pub fn is_cached<T: Record>(&self) -> bool {
        self.cache.read().contains_key(&TypeId::of::<T>())
    }

    /// Number of cached record types.
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    /// Sets the tag key read for column overrides.
    ///
    /// Types that are already cached keep their field maps.
    pub fn set_tag_name(&self, tag_name: impl Into<String>) {
        self.config.write().tag_name = tag_name.into();
    }

    /// Sets the function used to normalize field names.
    ///
    /// Types that are already cached keep their field maps.
    pub fn set_name_mapper(&self, name_mapper: impl Fn(&str) -> String + Send + Sync + 'static) {
        self.config.write().name_mapper = Arc::new(name_mapper);
    }

    pub fn tag_name(&self) -> String {
        self.config.read().tag_name.clone()
    }

    fn cached(&self, id: TypeId) -> Option<Arc<FieldMap>> {
        self.cache.read().get(&id).cloned()
    }

    /// Walks the descriptor and stores the result. Two threads may race to
    /// populate the same type; both compute the same map and the last store
    /// wins.
    fn populate(&self, record_type: &RecordType) -> Arc<FieldMap> {
        let config = self.config.read().clone();
        let mut field_map = FieldMap::default();

        for field in &record_type.fields {
            let tag = field.tags.get(&config.tag_name);

            if !field.is_public() || tag == "-" {
                continue;
            }

            if let Some(embedded) = field.embedded_type() {
                let embedded_map = self.field_map_for(&embedded);

                for (name, path) in embedded_map.iter() {
                    let shadowed = field_map.insert(name.to_string(), path.prefixed(field.index));
                    if config.report_collisions {
                        report_collision(record_type, name, shadowed.as_ref());
                    }
                }

                continue;
            }

            let name = if tag.is_empty() { field.name } else { tag };
            let name = (config.name_mapper)(name);
            let shadowed = field_map.insert(name.clone(), FieldPath::from_index(field.index));
            if config.report_collisions {
                report_collision(record_type, &name, shadowed.as_ref());
            }
        }

        tracing::trace!(
            record = record_type.name,
            columns = field_map.len(),
            "populated field map"
        );

        let field_map = Arc::new(field_map);
        self.cache
            .write()
            .insert(record_type.id, field_map.clone());
        field_map
    }
}

fn report_collision(record_type: &RecordType, name: &str, shadowed: Option<&FieldPath>) {
    if let Some(shadowed) = shadowed {
        tracing::warn!(
            record = record_type.name,
            column = name,
            shadowed = ?shadowed,
            "field shadows an earlier field with the same column name"
        );
    }
}

impl Default for Registry {
    fn default() -> Registry {
        Registry::new()
    }
}

impl core::fmt::Debug for Registry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let config = self.config.read();
        f.debug_struct("Registry")
            .field("tag_name", &config.tag_name)
            .field("report_collisions", &config.report_collisions)
            .field("cached", &self.cache.read().len())
            .finish()
    }
}
