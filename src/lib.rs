pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod params;
pub mod transport;
pub mod types;

pub use client::SourceFilesApi;
pub use config::{ClientConfig, Credentials};
pub use error::{ApiError, ErrorBody, Result};
pub use models::{
    AddBranchRequest, AddDirectoryRequest, AddFileRequest, AssetFile, Branch, BuildAttributes,
    BuildReviewedSourceFilesRequest, BuildStatus, Directory, FileInfo, FileMeta, FileRevision,
    Priority, ReviewedStringsBuild, RevisionCounts, RevisionInfo, SourceFile, UpdateOption,
    UpdateOrRestoreFileRequest,
};
pub use params::{
    ListBranchesParams, ListDirectoriesParams, ListFilesParams, ListReviewedBuildsParams,
    ListTreeParams, PageParams,
};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
pub use types::{DownloadLink, Page, Pagination, PatchOperation, PatchRequest, ResponseList, ResponseObject};
