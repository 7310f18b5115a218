//! Recent commit history for tracked source-code repositories.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use tracing::instrument;

use assetdesk_core::SourceCodeId;
use assetdesk_core::model::GitCommit;

use crate::error::ClientError;
use crate::http::{ApiClient, decode};

const COMMITS_PER_PAGE: u32 = 50;
const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Owner and name of a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

fn repo_url_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"github\.com[/:]([^/]+)/([^/]+?)(?:\.git)?$").ok())
        .as_ref()
}

/// Extract owner/repo from an https or ssh GitHub URL.
///
/// The repository must be the last path element; a trailing `.git` is
/// dropped. Anything else yields `None`.
pub fn parse_repo_url(url: &str) -> Option<RepoRef> {
    let caps = repo_url_pattern()?.captures(url.trim())?;
    Some(RepoRef {
        owner: caps.get(1)?.as_str().to_string(),
        repo: caps.get(2)?.as_str().to_string(),
    })
}

#[derive(Deserialize)]
struct CommitEnvelope {
    sha: String,
    html_url: String,
    commit: CommitBody,
}

#[derive(Deserialize)]
struct CommitBody {
    message: String,
    author: CommitAuthor,
}

#[derive(Deserialize)]
struct CommitAuthor {
    name: String,
    date: String,
}

impl From<CommitEnvelope> for GitCommit {
    fn from(c: CommitEnvelope) -> Self {
        GitCommit {
            sha: c.sha,
            author: c.commit.author.name,
            message: c.commit.message.lines().next().unwrap_or_default().to_string(),
            date: c.commit.author.date,
            url: c.html_url,
        }
    }
}

impl ApiClient {
    /// The latest commits of a source-code record's repository.
    ///
    /// `Ok(None)` means "nothing to show": the record has no URL, the URL is
    /// not a GitHub repository, or GitHub could not be reached. Only a failed
    /// lookup of the record itself is an error.
    #[instrument(skip(self), err)]
    pub async fn recent_commits(&self, id: SourceCodeId) -> Result<Option<Vec<GitCommit>>, ClientError> {
        let source = self.source_codes().get(id).await?;
        let Some(url) = source.url.as_deref().filter(|u| !u.trim().is_empty()) else {
            return Ok(None);
        };
        let Some(repo) = parse_repo_url(url) else {
            tracing::debug!(url, "source url is not a github repository");
            return Ok(None);
        };

        match self.github_commits(&repo).await {
            Ok(commits) => Ok(Some(commits)),
            Err(err) => {
                tracing::error!(owner = %repo.owner, repo = %repo.repo, error = %err, "github fetch failed");
                Ok(None)
            }
        }
    }

    async fn github_commits(&self, repo: &RepoRef) -> Result<Vec<GitCommit>, ClientError> {
        let url = format!(
            "{}/repos/{}/{}/commits",
            self.config().github_api_url.trim_end_matches('/'),
            repo.owner,
            repo.repo
        );
        let request = self
            .http()
            .get(url)
            .query(&[("per_page", COMMITS_PER_PAGE)])
            .header(reqwest::header::ACCEPT, GITHUB_ACCEPT)
            .header(reqwest::header::USER_AGENT, "assetdesk-client");
        let commits: Vec<CommitEnvelope> = decode(request).await?;
        Ok(commits.into_iter().map(GitCommit::from).collect())
    }
}
