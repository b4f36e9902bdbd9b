use super::{Config, NameMapper, Registry};
use crate::str;

use parking_lot::RwLock;
use std::{collections::HashMap, sync::Arc};

/// Configures a [`Registry`].
pub struct Builder {
    tag_name: String,
    name_mapper: NameMapper,
    report_collisions: bool,
}

impl Builder {
    /// Set the tag key read for column overrides. Defaults to `sql`.
    pub fn tag_name(&mut self, tag_name: impl Into<String>) -> &mut Self {
        self.tag_name = tag_name.into();
        self
    }

    /// Set the function used to normalize field names. Defaults to
    /// [`str::to_lowercase`].
    pub fn name_mapper(
        &mut self,
        name_mapper: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> &mut Self {
        self.name_mapper = Arc::new(name_mapper);
        self
    }

    /// Log a warning whenever a field shadows an earlier field with the same
    /// column name. Off by default; shadowing is always last-write-wins.
    pub fn report_collisions(&mut self, enabled: bool) -> &mut Self {
        self.report_collisions = enabled;
        self
    }

    pub fn build(&self) -> Registry {
        Registry {
            config: RwLock::new(Config {
                tag_name: self.tag_name.clone(),
                name_mapper: self.name_mapper.clone(),
                report_collisions: self.report_collisions,
            }),
            cache: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for Builder {
    fn default() -> Builder {
        Builder {
            tag_name: "sql".to_string(),
            name_mapper: Arc::new(str::to_lowercase),
            report_collisions: false,
        }
    }
}
