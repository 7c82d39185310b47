use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Single-object envelope: `{"data": T}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseObject<T> {
    pub data: T,
}

/// Paged list envelope: `{"data": [{"data": T}, ...], "pagination": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseList<T> {
    pub data: Vec<ResponseObject<T>>,
    #[serde(default)]
    pub pagination: Pagination,
}

impl<T> ResponseList<T> {
    /// Strip the per-item envelopes
    pub fn into_page(self) -> Page<T> {
        Page {
            items: self.data.into_iter().map(|item| item.data).collect(),
            pagination: self.pagination,
        }
    }
}

/// Pagination metadata echoed by the remote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub offset: u32,
    pub limit: u32,
}

/// One page of a list operation
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Short-lived signed URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadLink {
    pub url: String,
    pub expire_in: DateTime<Utc>,
}

impl DownloadLink {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expire_in
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Operation kind of a patch record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOperation {
    Add,
    Remove,
    Replace,
    Test,
}

/// One `{op, path, value}` patch record, forwarded verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchRequest {
    pub op: PatchOperation,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl PatchRequest {
    pub fn replace(path: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            op: PatchOperation::Replace,
            path: path.into(),
            value: Some(value.into()),
        }
    }

    pub fn add(path: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            op: PatchOperation::Add,
            path: path.into(),
            value: Some(value.into()),
        }
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Self {
            op: PatchOperation::Remove,
            path: path.into(),
            value: None,
        }
    }
}

/// Builds a query string list, skipping absent values
#[derive(Debug, Default)]
pub(crate) struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push<V: ToString>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.0.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Presence-only switch: sent as `key=1` when set, omitted otherwise
    pub(crate) fn flag(self, key: &str, set: bool) -> Self {
        self.push(key, set.then_some(1))
    }

    pub(crate) fn into_vec(self) -> Vec<(String, String)> {
        self.0
    }
}
