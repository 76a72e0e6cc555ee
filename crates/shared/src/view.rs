use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ResultKindError;

/// String-keyed values handed from an action to the view that renders it.
///
/// Keys are matched exactly; `"Title"` and `"title"` are different entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewData(BTreeMap<String, Value>);

impl ViewData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `key`, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Looks up `key` and returns it only when it holds a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }
}

/// "Render this view with this data."
///
/// A `None` view name defers to the default view of the action that
/// produced the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewResult {
    view_name: Option<String>,
    view_data: ViewData,
}

impl ViewResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            view_name: Some(name.into()),
            view_data: ViewData::new(),
        }
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.view_data.insert(key, value);
        self
    }

    pub fn view_name(&self) -> Option<&str> {
        self.view_name.as_deref()
    }

    pub fn view_data(&self) -> &ViewData {
        &self.view_data
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    View,
    Redirect,
    Content,
}

/// Everything a controller action may hand back to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionResult {
    View(ViewResult),
    Redirect {
        location: String,
    },
    Content {
        content_type: String,
        body: String,
    },
}

impl ActionResult {
    pub fn kind(&self) -> ResultKind {
        match self {
            Self::View(_) => ResultKind::View,
            Self::Redirect { .. } => ResultKind::Redirect,
            Self::Content { .. } => ResultKind::Content,
        }
    }

    pub fn as_view(&self) -> Option<&ViewResult> {
        match self {
            Self::View(view) => Some(view),
            _ => None,
        }
    }

    pub fn into_view(self) -> Result<ViewResult, ResultKindError> {
        match self {
            Self::View(view) => Ok(view),
            other => Err(ResultKindError {
                expected: ResultKind::View,
                actual: other.kind(),
            }),
        }
    }
}

impl From<ViewResult> for ActionResult {
    fn from(value: ViewResult) -> Self {
        Self::View(value)
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
