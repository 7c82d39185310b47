//! Entities and request payloads of the source files API
//!
//! All values are snapshots of server-owned state. Field names follow the
//! wire format (camelCase) through serde renames.

use chrono::{DateTime, Utc};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// `type` value the remote uses for non-translatable asset files
pub const ASSET_FILE_TYPE: &str = "assets";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Normal,
    High,
}

/// A named parallel version of a project's source tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: u64,
    pub project_id: u64,
    pub name: String,
    pub title: Option<String>,
    #[serde(default)]
    pub export_pattern: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBranchRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl AddBranchRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A folder node, optionally inside a branch and/or a parent directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Directory {
    pub id: u64,
    pub project_id: u64,
    #[serde(default)]
    pub branch_id: Option<u64>,
    /// Parent directory
    #[serde(default)]
    pub directory_id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub export_pattern: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDirectoryRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl AddDirectoryRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Fields every file kind carries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMeta {
    pub id: u64,
    pub project_id: u64,
    #[serde(default)]
    pub branch_id: Option<u64>,
    #[serde(default)]
    pub directory_id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub file_type: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub revision_id: Option<u64>,
    #[serde(default)]
    pub priority: Option<Priority>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Translatable source file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceFile {
    #[serde(flatten)]
    pub meta: FileMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser_version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_options: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_options: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_target_languages: Option<Vec<String>>,
}

/// Non-translatable asset file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFile {
    #[serde(flatten)]
    pub meta: FileMeta,
}

/// A file of any kind, resolved from the `type` field of the response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FileInfo {
    Source(SourceFile),
    Asset(AssetFile),
}

impl<'de> Deserialize<'de> for FileInfo {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let is_asset = value.get("type").and_then(Value::as_str) == Some(ASSET_FILE_TYPE);

        if is_asset {
            serde_json::from_value(value).map(FileInfo::Asset).map_err(D::Error::custom)
        } else {
            serde_json::from_value(value).map(FileInfo::Source).map_err(D::Error::custom)
        }
    }
}

impl FileInfo {
    pub fn meta(&self) -> &FileMeta {
        match self {
            FileInfo::Source(file) => &file.meta,
            FileInfo::Asset(file) => &file.meta,
        }
    }

    pub fn id(&self) -> u64 {
        self.meta().id
    }

    pub fn name(&self) -> &str {
        &self.meta().name
    }

    pub fn file_type(&self) -> &str {
        &self.meta().file_type
    }

    pub fn revision_id(&self) -> Option<u64> {
        self.meta().revision_id
    }

    pub fn is_asset(&self) -> bool {
        matches!(self, FileInfo::Asset(_))
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFileRequest {
    /// Id of previously uploaded storage content
    pub storage_id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser_version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_options: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_options: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_target_languages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attach_label_ids: Option<Vec<u64>>,
}

impl AddFileRequest {
    pub fn new(storage_id: u64, name: impl Into<String>) -> Self {
        Self {
            storage_id,
            name: name.into(),
            ..Default::default()
        }
    }
}

/// How existing translations are treated when a file's content is replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOption {
    ClearTranslationsAndApprovals,
    KeepTranslations,
    KeepTranslationsAndApprovals,
}

/// Full-replace payload: new content from storage, or a restore to a revision
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrRestoreFileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_option: Option<UpdateOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_options: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_options: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attach_label_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detach_label_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_modified_context: Option<bool>,
}

impl UpdateOrRestoreFileRequest {
    /// Replace the content with a storage upload
    pub fn update(storage_id: u64) -> Self {
        Self {
            storage_id: Some(storage_id),
            ..Default::default()
        }
    }

    /// Roll the file back to an earlier revision
    pub fn restore(revision_id: u64) -> Self {
        Self {
            revision_id: Some(revision_id),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionCounts {
    pub strings: u64,
    pub words: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionInfo {
    pub added: RevisionCounts,
    pub deleted: RevisionCounts,
    pub updated: RevisionCounts,
}

/// Immutable snapshot of a file at one revision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRevision {
    pub id: u64,
    pub project_id: u64,
    pub file_id: u64,
    #[serde(default)]
    pub restore_to_revision: Option<u64>,
    #[serde(default)]
    pub info: RevisionInfo,
    pub date: DateTime<Utc>,
}

/// Server-reported state of a reviewed strings build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BuildStatus {
    Created,
    InProgress,
    Finished,
    Failed,
    Canceled,
    /// Vocabulary this client does not know yet
    Other(String),
}

impl BuildStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BuildStatus::Created => "created",
            BuildStatus::InProgress => "inProgress",
            BuildStatus::Finished => "finished",
            BuildStatus::Failed => "failed",
            BuildStatus::Canceled => "canceled",
            BuildStatus::Other(status) => status,
        }
    }

    /// No further transitions will happen
    pub fn is_terminal(&self) -> bool {
        matches!(self, BuildStatus::Finished | BuildStatus::Failed | BuildStatus::Canceled)
    }

    /// The only state with a downloadable result
    pub fn is_finished(&self) -> bool {
        matches!(self, BuildStatus::Finished)
    }
}

impl From<String> for BuildStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "created" => BuildStatus::Created,
            "inProgress" => BuildStatus::InProgress,
            "finished" => BuildStatus::Finished,
            "failed" => BuildStatus::Failed,
            "canceled" => BuildStatus::Canceled,
            _ => BuildStatus::Other(status),
        }
    }
}

impl From<BuildStatus> for String {
    fn from(status: BuildStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildAttributes {
    #[serde(default)]
    pub branch_id: Option<u64>,
    #[serde(default)]
    pub target_language_id: Option<String>,
}

/// Asynchronous job snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewedStringsBuild {
    pub id: u64,
    pub project_id: u64,
    pub status: BuildStatus,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub attributes: BuildAttributes,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildReviewedSourceFilesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<u64>,
}
