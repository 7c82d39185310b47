use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::{
    config::{ClientConfig, Credentials},
    error::{ApiError, Result},
    models::{
        AddBranchRequest, AddDirectoryRequest, AddFileRequest, Branch,
        BuildReviewedSourceFilesRequest, Directory, FileInfo, FileRevision, ReviewedStringsBuild,
        UpdateOrRestoreFileRequest,
    },
    params::{ListBranchesParams, ListDirectoriesParams, ListFilesParams, ListReviewedBuildsParams, PageParams},
    transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport},
    types::{DownloadLink, Page, PatchRequest, ResponseList, ResponseObject},
};

/// Client for the source files section of the API
///
/// Every operation is one request against `{base}/projects/{projectId}/...`.
/// The client holds no state besides the base URL and the transport, so it is
/// cheap to clone and safe to share between tasks.
#[derive(Clone)]
pub struct SourceFilesApi {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
}

impl SourceFilesApi {
    /// Create a client backed by `reqwest` with default settings
    pub fn new(credentials: &Credentials) -> Result<Self> {
        Self::with_config(credentials, &ClientConfig::default())
    }

    pub fn with_config(credentials: &Credentials, config: &ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::with_config(credentials, config)?;
        Ok(Self::with_transport(credentials.api_url(), Arc::new(transport)))
    }

    /// Create a client over any transport
    pub fn with_transport(base_url: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, transport }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /projects/{projectId}/branches`
    pub async fn list_branches(&self, project_id: u64, params: &ListBranchesParams) -> Result<Page<Branch>> {
        let request = HttpRequest::new(HttpMethod::Get, self.url(project_id, "/branches"))
            .with_query(params.to_query());
        self.fetch_page(request).await
    }

    /// `POST /projects/{projectId}/branches`
    pub async fn add_branch(&self, project_id: u64, request: &AddBranchRequest) -> Result<Branch> {
        let request = HttpRequest::new(HttpMethod::Post, self.url(project_id, "/branches"))
            .with_body(json_body(request)?);
        self.fetch_object(request).await
    }

    /// `GET /projects/{projectId}/branches/{branchId}`
    pub async fn get_branch(&self, project_id: u64, branch_id: u64) -> Result<Branch> {
        let url = self.url(project_id, &format!("/branches/{}", branch_id));
        self.fetch_object(HttpRequest::new(HttpMethod::Get, url)).await
    }

    /// `DELETE /projects/{projectId}/branches/{branchId}`
    pub async fn delete_branch(&self, project_id: u64, branch_id: u64) -> Result<()> {
        let url = self.url(project_id, &format!("/branches/{}", branch_id));
        self.send(HttpRequest::new(HttpMethod::Delete, url)).await.map(|_| ())
    }

    /// `PATCH /projects/{projectId}/branches/{branchId}`
    pub async fn edit_branch(&self, project_id: u64, branch_id: u64, patch: &[PatchRequest]) -> Result<Branch> {
        let url = self.url(project_id, &format!("/branches/{}", branch_id));
        let request = HttpRequest::new(HttpMethod::Patch, url).with_body(json_body(&patch)?);
        self.fetch_object(request).await
    }

    /// `GET /projects/{projectId}/directories`
    pub async fn list_directories(
        &self,
        project_id: u64,
        params: &ListDirectoriesParams,
    ) -> Result<Page<Directory>> {
        let request = HttpRequest::new(HttpMethod::Get, self.url(project_id, "/directories"))
            .with_query(params.to_query());
        self.fetch_page(request).await
    }

    /// `POST /projects/{projectId}/directories`
    pub async fn add_directory(&self, project_id: u64, request: &AddDirectoryRequest) -> Result<Directory> {
        let request = HttpRequest::new(HttpMethod::Post, self.url(project_id, "/directories"))
            .with_body(json_body(request)?);
        self.fetch_object(request).await
    }

    /// `GET /projects/{projectId}/directories/{directoryId}`
    pub async fn get_directory(&self, project_id: u64, directory_id: u64) -> Result<Directory> {
        let url = self.url(project_id, &format!("/directories/{}", directory_id));
        self.fetch_object(HttpRequest::new(HttpMethod::Get, url)).await
    }

    /// `DELETE /projects/{projectId}/directories/{directoryId}`
    pub async fn delete_directory(&self, project_id: u64, directory_id: u64) -> Result<()> {
        let url = self.url(project_id, &format!("/directories/{}", directory_id));
        self.send(HttpRequest::new(HttpMethod::Delete, url)).await.map(|_| ())
    }

    /// `PATCH /projects/{projectId}/directories/{directoryId}`
    pub async fn edit_directory(
        &self,
        project_id: u64,
        directory_id: u64,
        patch: &[PatchRequest],
    ) -> Result<Directory> {
        let url = self.url(project_id, &format!("/directories/{}", directory_id));
        let request = HttpRequest::new(HttpMethod::Patch, url).with_body(json_body(&patch)?);
        self.fetch_object(request).await
    }

    /// `GET /projects/{projectId}/files`
    pub async fn list_files(&self, project_id: u64, params: &ListFilesParams) -> Result<Page<FileInfo>> {
        let request = HttpRequest::new(HttpMethod::Get, self.url(project_id, "/files"))
            .with_query(params.to_query());
        self.fetch_page(request).await
    }

    /// `POST /projects/{projectId}/files`
    pub async fn add_file(&self, project_id: u64, request: &AddFileRequest) -> Result<FileInfo> {
        let request = HttpRequest::new(HttpMethod::Post, self.url(project_id, "/files"))
            .with_body(json_body(request)?);
        self.fetch_object(request).await
    }

    /// `GET /projects/{projectId}/files/{fileId}`
    pub async fn get_file(&self, project_id: u64, file_id: u64) -> Result<FileInfo> {
        let url = self.url(project_id, &format!("/files/{}", file_id));
        self.fetch_object(HttpRequest::new(HttpMethod::Get, url)).await
    }

    /// `PUT /projects/{projectId}/files/{fileId}`
    ///
    /// Replaces the file content from storage, or restores an earlier revision
    pub async fn update_or_restore_file(
        &self,
        project_id: u64,
        file_id: u64,
        request: &UpdateOrRestoreFileRequest,
    ) -> Result<FileInfo> {
        let url = self.url(project_id, &format!("/files/{}", file_id));
        let request = HttpRequest::new(HttpMethod::Put, url).with_body(json_body(request)?);
        self.fetch_object(request).await
    }

    /// `DELETE /projects/{projectId}/files/{fileId}`
    pub async fn delete_file(&self, project_id: u64, file_id: u64) -> Result<()> {
        let url = self.url(project_id, &format!("/files/{}", file_id));
        self.send(HttpRequest::new(HttpMethod::Delete, url)).await.map(|_| ())
    }

    /// `PATCH /projects/{projectId}/files/{fileId}`
    pub async fn edit_file(&self, project_id: u64, file_id: u64, patch: &[PatchRequest]) -> Result<FileInfo> {
        let url = self.url(project_id, &format!("/files/{}", file_id));
        let request = HttpRequest::new(HttpMethod::Patch, url).with_body(json_body(&patch)?);
        self.fetch_object(request).await
    }

    /// `GET /projects/{projectId}/files/{fileId}/download`
    pub async fn download_file(&self, project_id: u64, file_id: u64) -> Result<DownloadLink> {
        let url = self.url(project_id, &format!("/files/{}/download", file_id));
        self.fetch_object(HttpRequest::new(HttpMethod::Get, url)).await
    }

    /// `GET /projects/{projectId}/files/{fileId}/revisions`
    pub async fn list_file_revisions(
        &self,
        project_id: u64,
        file_id: u64,
        params: &PageParams,
    ) -> Result<Page<FileRevision>> {
        let url = self.url(project_id, &format!("/files/{}/revisions", file_id));
        let request = HttpRequest::new(HttpMethod::Get, url).with_query(params.to_query());
        self.fetch_page(request).await
    }

    /// `GET /projects/{projectId}/files/{fileId}/revisions/{revisionId}`
    pub async fn get_file_revision(&self, project_id: u64, file_id: u64, revision_id: u64) -> Result<FileRevision> {
        let url = self.url(project_id, &format!("/files/{}/revisions/{}", file_id, revision_id));
        self.fetch_object(HttpRequest::new(HttpMethod::Get, url)).await
    }

    /// `GET /projects/{projectId}/strings/reviewed-builds`
    pub async fn list_reviewed_source_files_builds(
        &self,
        project_id: u64,
        params: &ListReviewedBuildsParams,
    ) -> Result<Page<ReviewedStringsBuild>> {
        let request = HttpRequest::new(HttpMethod::Get, self.url(project_id, "/strings/reviewed-builds"))
            .with_query(params.to_query());
        self.fetch_page(request).await
    }

    /// `POST /projects/{projectId}/strings/reviewed-builds`
    ///
    /// Enqueues the build and returns immediately. Poll
    /// [`check_reviewed_source_files_build_status`](Self::check_reviewed_source_files_build_status)
    /// until the status is terminal.
    pub async fn build_reviewed_source_files(
        &self,
        project_id: u64,
        request: &BuildReviewedSourceFilesRequest,
    ) -> Result<ReviewedStringsBuild> {
        let request = HttpRequest::new(HttpMethod::Post, self.url(project_id, "/strings/reviewed-builds"))
            .with_body(json_body(request)?);
        let build: ReviewedStringsBuild = self.fetch_object(request).await?;
        debug!(build_id = build.id, status = %build.status, "reviewed build enqueued");
        Ok(build)
    }

    /// `GET /projects/{projectId}/strings/reviewed-builds/{buildId}`
    pub async fn check_reviewed_source_files_build_status(
        &self,
        project_id: u64,
        build_id: u64,
    ) -> Result<ReviewedStringsBuild> {
        let url = self.url(project_id, &format!("/strings/reviewed-builds/{}", build_id));
        self.fetch_object(HttpRequest::new(HttpMethod::Get, url)).await
    }

    /// `GET /projects/{projectId}/strings/reviewed-builds/{buildId}/download`
    ///
    /// Only succeeds once the build has finished
    pub async fn download_reviewed_source_files(&self, project_id: u64, build_id: u64) -> Result<DownloadLink> {
        let url = self.url(project_id, &format!("/strings/reviewed-builds/{}/download", build_id));
        self.fetch_object(HttpRequest::new(HttpMethod::Get, url)).await
    }

    fn url(&self, project_id: u64, path: &str) -> String {
        format!("{}/projects/{}{}", self.base_url, project_id, path)
    }

    /// Execute the request and turn any non-2xx status into an error
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let method = request.method;
        let url = request.url.clone();
        debug!(method = method.as_str(), url = %url, query = ?request.query, "sending request");

        let response = self.transport.execute(request).await?;
        if response.is_success() {
            return Ok(response);
        }

        warn!(method = method.as_str(), url = %url, status = response.status, "request failed");
        Err(ApiError::from_status(response.status, &response.body))
    }

    async fn fetch_object<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T> {
        let response = self.send(request).await?;
        let envelope: ResponseObject<T> = serde_json::from_slice(&response.body)?;
        Ok(envelope.data)
    }

    async fn fetch_page<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<Page<T>> {
        let response = self.send(request).await?;
        let envelope: ResponseList<T> = serde_json::from_slice(&response.body)?;
        Ok(envelope.into_page())
    }
}

impl std::fmt::Debug for SourceFilesApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFilesApi")
            .field("base_url", &self.base_url)
            .field("transport", &self.transport.identifier())
            .finish()
    }
}

fn json_body<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BuildStatus;
    use crate::params::ListTreeParams;
    use async_trait::async_trait;
    use bytes::Bytes;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Records every request and replays canned responses in order
    struct MockTransport {
        requests: Mutex<Vec<HttpRequest>>,
        responses: Mutex<VecDeque<HttpResponse>>,
    }

    impl MockTransport {
        fn new(responses: Vec<(u16, serde_json::Value)>) -> Arc<Self> {
            let responses = responses
                .into_iter()
                .map(|(status, body)| HttpResponse {
                    status,
                    body: if body.is_null() {
                        Bytes::new()
                    } else {
                        Bytes::from(body.to_string())
                    },
                })
                .collect();
            Arc::new(Self {
                requests: Mutex::new(Vec::new()),
                responses: Mutex::new(responses),
            })
        }

        fn last_request(&self) -> HttpRequest {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl HttpTransport for MockTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
            self.requests.lock().unwrap().push(request);
            Ok(self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("no canned response left"))
        }

        fn identifier(&self) -> String {
            "mock".to_string()
        }
    }

    fn client(transport: Arc<MockTransport>) -> SourceFilesApi {
        SourceFilesApi::with_transport("https://api.example.com/api/v2/", transport)
    }

    fn branch_json(id: u64, name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "projectId": 1,
            "name": name,
            "title": "Main branch",
            "createdAt": "2019-09-16T13:48:04+00:00",
            "updatedAt": "2019-09-19T13:25:27+00:00"
        })
    }

    fn empty_list() -> serde_json::Value {
        json!({"data": [], "pagination": {"offset": 0, "limit": 25}})
    }

    #[tokio::test]
    async fn test_list_branches_omits_unset_params() {
        let transport = MockTransport::new(vec![(200, empty_list())]);
        let api = client(transport.clone());

        let page = api.list_branches(1, &ListBranchesParams::default()).await.unwrap();

        assert!(page.is_empty());
        assert_eq!(page.pagination.limit, 25);
        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "https://api.example.com/api/v2/projects/1/branches");
        assert!(req.query.is_empty());
        assert!(req.body.is_none());
    }

    #[tokio::test]
    async fn test_list_branches_sends_supplied_params_once() {
        let list = json!({
            "data": [{"data": branch_json(34, "develop")}],
            "pagination": {"offset": 5, "limit": 10}
        });
        let transport = MockTransport::new(vec![(200, list)]);
        let api = client(transport.clone());

        let params = ListBranchesParams {
            name: Some("develop".into()),
            limit: Some(10),
            offset: Some(5),
        };
        let page = api.list_branches(1, &params).await.unwrap();

        assert_eq!(page.items[0].name, "develop");
        let req = transport.last_request();
        assert_eq!(
            req.query,
            vec![
                ("name".to_string(), "develop".to_string()),
                ("limit".to_string(), "10".to_string()),
                ("offset".to_string(), "5".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_edit_branch_forwards_patch_in_order() {
        let transport = MockTransport::new(vec![(200, json!({"data": branch_json(34, "develop")}))]);
        let api = client(transport.clone());

        let patch = vec![
            PatchRequest::replace("/name", "develop"),
            PatchRequest::replace("/title", "Development"),
        ];
        api.edit_branch(1, 34, &patch).await.unwrap();

        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Patch);
        assert!(req.url.ends_with("/projects/1/branches/34"));
        assert_eq!(
            req.body.unwrap(),
            json!([
                {"op": "replace", "path": "/name", "value": "develop"},
                {"op": "replace", "path": "/title", "value": "Development"}
            ])
        );
    }

    #[tokio::test]
    async fn test_edit_directory_forwards_patch_in_order() {
        let directory = json!({"data": {
            "id": 4, "projectId": 1, "name": "docs", "title": "Documentation",
            "createdAt": "2019-09-19T14:14:00+00:00"
        }});
        let transport = MockTransport::new(vec![(200, directory)]);
        let api = client(transport.clone());

        let patch = vec![
            PatchRequest::replace("/name", "docs"),
            PatchRequest::replace("/title", "Documentation"),
            PatchRequest::remove("/exportPattern"),
        ];
        let edited = api.edit_directory(1, 4, &patch).await.unwrap();

        assert_eq!(edited.name, "docs");
        assert_eq!(edited.title.as_deref(), Some("Documentation"));
        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.url, "https://api.example.com/api/v2/projects/1/directories/4");
        assert!(req.query.is_empty());
        assert_eq!(
            req.body.unwrap(),
            json!([
                {"op": "replace", "path": "/name", "value": "docs"},
                {"op": "replace", "path": "/title", "value": "Documentation"},
                {"op": "remove", "path": "/exportPattern"}
            ])
        );
    }

    #[tokio::test]
    async fn test_empty_patch_sent_as_empty_array() {
        let transport = MockTransport::new(vec![(200, json!({"data": branch_json(34, "develop")}))]);
        let api = client(transport.clone());

        let branch = api.edit_branch(1, 34, &[]).await.unwrap();

        assert_eq!(branch.name, "develop");
        assert_eq!(transport.last_request().body.unwrap(), json!([]));
    }

    #[tokio::test]
    async fn test_delete_accepts_empty_body() {
        let transport = MockTransport::new(vec![(204, serde_json::Value::Null)]);
        let api = client(transport.clone());

        api.delete_directory(1, 4).await.unwrap();

        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Delete);
        assert!(req.url.ends_with("/projects/1/directories/4"));
    }

    #[tokio::test]
    async fn test_error_statuses_map_to_taxonomy() {
        let transport = MockTransport::new(vec![
            (400, json!({"errors": [{"error": {"key": "limit"}}]})),
            (404, json!({"error": {"code": 404, "message": "Branch Not Found"}})),
        ]);
        let api = client(transport);

        let params = ListBranchesParams {
            limit: Some(1000),
            ..Default::default()
        };
        let err = api.list_branches(1, &params).await.unwrap_err();
        assert!(matches!(err, ApiError::BadRequest { status: 400, .. }));

        let err = api.delete_branch(1, 999).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_files_recursive_query() {
        let transport = MockTransport::new(vec![(200, empty_list())]);
        let api = client(transport.clone());

        let params = ListTreeParams {
            filter: Some("strings".into()),
            ..ListTreeParams::in_directory(4).recursive()
        };
        api.list_files(1, &params).await.unwrap();

        let req = transport.last_request();
        assert!(req.url.ends_with("/projects/1/files"));
        assert_eq!(req.query_param("directoryId"), Some("4"));
        assert_eq!(req.query_param("filter"), Some("strings"));
        assert_eq!(req.query_param("recursion"), Some("1"));
        assert_eq!(req.query_param("branchId"), None);
    }

    #[tokio::test]
    async fn test_update_or_restore_file_uses_put() {
        let file = json!({"data": {
            "id": 44, "projectId": 1, "name": "app.json", "type": "json",
            "revisionId": 3, "createdAt": "2019-09-19T15:10:43+00:00"
        }});
        let transport = MockTransport::new(vec![(200, file)]);
        let api = client(transport.clone());

        let updated = api
            .update_or_restore_file(1, 44, &UpdateOrRestoreFileRequest::restore(2))
            .await
            .unwrap();

        assert_eq!(updated.revision_id(), Some(3));
        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.body.unwrap(), json!({"revisionId": 2}));
    }

    #[tokio::test]
    async fn test_file_revision_urls() {
        let revision = json!({"data": {
            "id": 2, "projectId": 1, "fileId": 44, "restoreToRevision": null,
            "info": {
                "added": {"strings": 10, "words": 32},
                "deleted": {"strings": 0, "words": 0},
                "updated": {"strings": 1, "words": 4}
            },
            "date": "2019-09-20T09:04:29+00:00"
        }});
        let transport = MockTransport::new(vec![(200, empty_list()), (200, revision)]);
        let api = client(transport.clone());

        api.list_file_revisions(1, 44, &PageParams::new(10, 0)).await.unwrap();
        assert!(transport.last_request().url.ends_with("/projects/1/files/44/revisions"));
        assert_eq!(transport.last_request().query_param("limit"), Some("10"));

        let rev = api.get_file_revision(1, 44, 2).await.unwrap();
        assert_eq!(rev.info.added.words, 32);
        assert!(transport.last_request().url.ends_with("/projects/1/files/44/revisions/2"));
    }

    #[tokio::test]
    async fn test_reviewed_build_requests() {
        let build = json!({"data": {
            "id": 7, "projectId": 1, "status": "created", "progress": 0,
            "attributes": {"branchId": 5, "targetLanguageId": null},
            "createdAt": "2023-09-01T10:00:00+00:00"
        }});
        let link = json!({"data": {
            "url": "https://storage.example.com/build.zip",
            "expireIn": "2099-01-01T00:00:00+00:00"
        }});
        let transport = MockTransport::new(vec![(201, build), (200, link)]);
        let api = client(transport.clone());

        let request = BuildReviewedSourceFilesRequest { branch_id: Some(5) };
        let build = api.build_reviewed_source_files(1, &request).await.unwrap();
        assert_eq!(build.status, BuildStatus::Created);
        assert_eq!(build.attributes.branch_id, Some(5));
        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Post);
        assert!(req.url.ends_with("/projects/1/strings/reviewed-builds"));
        assert_eq!(req.body.unwrap(), json!({"branchId": 5}));

        let link = api.download_reviewed_source_files(1, build.id).await.unwrap();
        assert!(!link.is_expired());
        assert!(transport
            .last_request()
            .url
            .ends_with("/projects/1/strings/reviewed-builds/7/download"));
    }

    #[tokio::test]
    async fn test_remaining_operations_hit_expected_endpoints() {
        let directory = json!({"data": {
            "id": 4, "projectId": 1, "branchId": 34, "directoryId": null,
            "name": "main", "createdAt": "2019-09-19T14:14:00+00:00"
        }});
        let asset = json!({"data": {
            "id": 45, "projectId": 1, "name": "logo.png", "type": "assets",
            "createdAt": "2019-09-19T15:10:43+00:00"
        }});
        let link = json!({"data": {
            "url": "https://storage.example.com/app.json",
            "expireIn": "2099-01-01T00:00:00+00:00"
        }});
        let transport = MockTransport::new(vec![
            (201, directory.clone()),
            (200, directory),
            (201, asset.clone()),
            (200, asset),
            (200, link),
            (200, empty_list()),
        ]);
        let api = client(transport.clone());
        let base = "https://api.example.com/api/v2/projects/1";

        let dir = api
            .add_directory(1, &AddDirectoryRequest { branch_id: Some(34), ..AddDirectoryRequest::new("main") })
            .await
            .unwrap();
        assert_eq!(dir.branch_id, Some(34));
        let req = transport.last_request();
        assert_eq!((req.method, req.url.as_str()), (HttpMethod::Post, format!("{}/directories", base).as_str()));
        assert_eq!(req.body.unwrap(), json!({"name": "main", "branchId": 34}));

        api.get_directory(1, 4).await.unwrap();
        assert_eq!(transport.last_request().url, format!("{}/directories/4", base));

        let file = api.add_file(1, &AddFileRequest::new(61, "logo.png")).await.unwrap();
        assert!(file.is_asset());
        assert_eq!(transport.last_request().url, format!("{}/files", base));

        api.get_file(1, 45).await.unwrap();
        assert_eq!(transport.last_request().url, format!("{}/files/45", base));

        let link = api.download_file(1, 45).await.unwrap();
        assert_eq!(link.url, "https://storage.example.com/app.json");
        assert_eq!(transport.last_request().url, format!("{}/files/45/download", base));

        let params = ListReviewedBuildsParams {
            branch_id: Some(5),
            ..Default::default()
        };
        api.list_reviewed_source_files_builds(1, &params).await.unwrap();
        let req = transport.last_request();
        assert_eq!(req.url, format!("{}/strings/reviewed-builds", base));
        assert_eq!(req.query, vec![("branchId".to_string(), "5".to_string())]);
    }

    #[tokio::test]
    async fn test_malformed_body_is_serialization_error() {
        let transport = MockTransport::new(vec![(200, json!({"unexpected": true}))]);
        let api = client(transport);

        let err = api.get_branch(1, 34).await.unwrap_err();
        assert!(matches!(err, ApiError::Serialization(_)));
    }
}
