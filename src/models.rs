//! Dashboard Models
//!
//! Data structures matching the backend JSON contract. Every response is
//! treated as partial: optional sections default to absent rather than
//! failing the decode.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /api/process_update`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateRequest {
    pub update_text: String,
}

/// A single task as reported by the backend
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub task: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub days_old: Option<serde_json::Number>,
}

/// JSON object decoded with its keys kept in document order.
///
/// Employee groups and status summaries are displayed in the order the
/// backend emitted them, which a `HashMap` would lose.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V>(pub Vec<(String, V)>);

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> OrderedMap<V> {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

/// Response of `POST /api/process_update`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct UpdateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub tasks: Option<Vec<Task>>,
    #[serde(default)]
    pub coaching: Option<String>,
    /// Only populated when the backend runs in debug mode (otherwise `null`)
    #[serde(default)]
    pub logs: Option<Vec<String>>,
}

/// Response of `GET /api/stale_tasks`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StaleResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub has_stale: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub tasks_by_employee: Option<OrderedMap<Vec<Task>>>,
}

/// Response of `GET /api/tasks_by_category`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CategoryResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub has_tasks: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub tasks_by_employee: Option<OrderedMap<Vec<Task>>>,
    #[serde(default)]
    pub status_summary: Option<OrderedMap<serde_json::Number>>,
    #[serde(default)]
    pub insight: Option<String>,
}

/// Response of `GET /api/categories`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
}
