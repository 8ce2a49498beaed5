//! Raw nested records, as read from a catalogue document

use crate::object::Kind;

/// A leaf element: `<tag unit="...">text</tag>`
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub tag: String,
    pub text: String,
    pub unit: Option<String>,
}

impl Field {
    pub fn new(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: text.into(),
            unit: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

/// One `system`, `binary`, `star` or `planet` element with its fields and
/// nested records in document order
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub kind: Kind,
    pub fields: Vec<Field>,
    pub children: Vec<RawRecord>,
}

impl RawRecord {
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            fields: Vec::new(),
            children: Vec::new(),
        }
    }

    /// All non-empty `name` fields, canonical name first
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| f.tag == "name")
            .map(|f| f.text.as_str())
            .filter(|name| !name.is_empty())
    }

    pub fn name(&self) -> Option<&str> {
        self.names().next()
    }

    pub fn field(&self, tag: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.tag == tag)
    }
}

// Iterative: binaries nest to any depth.
impl Drop for RawRecord {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut record) = pending.pop() {
            pending.append(&mut record.children);
        }
    }
}
