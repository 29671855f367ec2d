use std::collections::BTreeMap;

/// One color cluster reported by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorEntry {
    pub name: String,
    /// CSS color string, e.g. `rgb(12,34,56)`.
    pub swatch: String,
    pub percent: f64,
}

impl ColorEntry {
    pub fn new(name: impl Into<String>, swatch: impl Into<String>, percent: f64) -> Self {
        Self {
            name: name.into(),
            swatch: swatch.into(),
            percent,
        }
    }
}

/// Color name to entry. Iteration order carries no meaning; display order is
/// decided by the renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisResult {
    entries: BTreeMap<String, ColorEntry>,
}

impl AnalysisResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `entry`, replacing any previous entry with the same name.
    pub fn insert(&mut self, entry: ColorEntry) {
        self.entries.insert(entry.name.clone(), entry);
    }

    pub fn get(&self, name: &str) -> Option<&ColorEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &ColorEntry> {
        self.entries.values()
    }
}

impl FromIterator<ColorEntry> for AnalysisResult {
    fn from_iter<I: IntoIterator<Item = ColorEntry>>(iter: I) -> Self {
        let mut result = Self::new();
        for entry in iter {
            result.insert(entry);
        }
        result
    }
}
