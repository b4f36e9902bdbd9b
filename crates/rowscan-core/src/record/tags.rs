/// Key/value overrides attached to a field, e.g. `#[tag(sql = "user_id")]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags {
    entries: Vec<(&'static str, &'static str)>,
}

impl Tags {
    pub fn new(entries: Vec<(&'static str, &'static str)>) -> Tags {
        Tags { entries }
    }

    pub fn push(&mut self, key: &'static str, value: &'static str) {
        self.entries.push((key, value));
    }

    /// Returns the value for `key`, or `""` when the key is absent.
    pub fn get(&self, key: &str) -> &'static str {
        self.lookup(key).unwrap_or("")
    }

    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| *value)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
