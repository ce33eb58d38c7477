//! In-memory form of the file that gets written: a single `date` dimension,
//! one series per weather element and attribute records at both levels.

use chrono::NaiveDate;

/// Name of the time dimension and its coordinate variable.
pub const TIME_DIMENSION: &str = "date";

/// Value of a global or per-variable attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Text(String),
    Double(f64),
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Double(value)
    }
}

/// Ordered key/value attribute records. Insertion order is preserved in the
/// written file; setting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(Vec<(String, AttributeValue)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Text value of `name`, if present and textual.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(AttributeValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One weather element over the time index. `None` marks a missing observation.
#[derive(Debug, Clone, PartialEq)]
pub struct DataVariable {
    /// Lower-case variable code, matching the catalog.
    pub name: String,
    pub values: Vec<Option<f64>>,
    pub attributes: Attributes,
}

/// A time-indexed set of station series ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Dates exactly as returned by the service, in service order.
    pub time: Vec<NaiveDate>,
    pub variables: Vec<DataVariable>,
    pub attributes: Attributes,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn variable(&self, name: &str) -> Option<&DataVariable> {
        self.variables.iter().find(|v| v.name == name)
    }

    pub fn variable_names(&self) -> Vec<&str> {
        self.variables.iter().map(|v| v.name.as_str()).collect()
    }
}
