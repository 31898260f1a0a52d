use serde::{Deserialize, Serialize};

/// A selectable category: `value` is the machine key that must match a
/// product's `category` field exactly, `label` is display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub value: String,
    pub label: String,
}

impl Category {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}
