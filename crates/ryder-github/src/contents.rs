//! `GET /repos/{owner}/{repo}/contents/{path}` for directories and files.

use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    ContentSource, DirEntry, EntryKind, FileContent, GitHubClient, RateLimitMode, RepoRef,
    error::GitHubError, http::check_response,
};

const ACCEPT: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";

/// The endpoint answers with an array for directories and an object for
/// everything else.
#[derive(Deserialize)]
#[serde(untagged)]
enum ContentsResponse {
    Listing(Vec<RawEntry>),
    Single(RawEntry),
}

#[derive(Deserialize)]
struct RawEntry {
    name: String,
    path: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    encoding: Option<String>,
}

impl GitHubClient {
    fn contents_url(&self, repo: &RepoRef, path: &str) -> String {
        let encoded_path = path
            .trim_matches('/')
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        format!(
            "{}/repos/{}/{}/contents/{encoded_path}",
            self.api_base_url,
            urlencoding::encode(&repo.owner),
            urlencoding::encode(&repo.repo),
        )
    }

    async fn get_contents(&self, repo: &RepoRef, path: &str) -> Result<ContentsResponse, GitHubError> {
        let url = self.contents_url(repo, path);
        tracing::debug!(%repo, path, "fetching contents");

        let mut request = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, ACCEPT)
            .header("X-GitHub-Api-Version", API_VERSION);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let resp = check_response(request.send().await?, path).await?;
        let body = resp.text().await?;
        parse_contents(&body)
    }
}

fn parse_contents(body: &str) -> Result<ContentsResponse, GitHubError> {
    serde_json::from_str(body).map_err(|e| GitHubError::Parse(e.to_string()))
}

fn into_listing(response: ContentsResponse, path: &str) -> Result<Vec<DirEntry>, GitHubError> {
    match response {
        ContentsResponse::Listing(entries) => Ok(entries
            .into_iter()
            .filter_map(|raw| {
                let Some(kind) = EntryKind::from_api(&raw.kind) else {
                    tracing::debug!(path = %raw.path, kind = %raw.kind, "skipping unknown entry kind");
                    return None;
                };
                Some(DirEntry {
                    name: raw.name,
                    path: raw.path,
                    kind,
                })
            })
            .collect()),
        ContentsResponse::Single(_) => Err(GitHubError::NotADirectory {
            path: path.to_string(),
        }),
    }
}

fn into_file(response: ContentsResponse, path: &str) -> Result<FileContent, GitHubError> {
    match response {
        ContentsResponse::Single(raw) if raw.kind == "file" => Ok(FileContent {
            path: raw.path,
            encoding: raw.encoding.unwrap_or_else(|| String::from("none")),
            content: raw.content.unwrap_or_default(),
        }),
        _ => Err(GitHubError::NotAFile {
            path: path.to_string(),
        }),
    }
}

#[async_trait]
impl ContentSource for GitHubClient {
    async fn list_directory(
        &self,
        repo: &RepoRef,
        path: &str,
    ) -> Result<Vec<DirEntry>, GitHubError> {
        let response = self.get_contents(repo, path).await?;
        into_listing(response, path)
    }

    async fn get_file(&self, repo: &RepoRef, path: &str) -> Result<FileContent, GitHubError> {
        let response = self.get_contents(repo, path).await?;
        into_file(response, path)
    }

    fn rate_limit_mode(&self) -> RateLimitMode {
        self.mode()
    }
}
