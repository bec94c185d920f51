use anyhow::Context;
use ryder_config::RyderConfig;
use ryder_content::ContentLibrary;
use ryder_github::{GitHubClient, RepoRef};

/// Shared state for repository-backed commands.
pub struct AppContext {
    pub library: ContentLibrary<GitHubClient>,
}

impl AppContext {
    /// Load configuration and build the GitHub-backed content library.
    pub fn init() -> anyhow::Result<Self> {
        let config = RyderConfig::load_with_dotenv().context("failed to load ryder configuration")?;
        let client =
            GitHubClient::new(&config.github).context("failed to build GitHub client")?;
        let repo = RepoRef::from_config(&config.github);
        tracing::debug!(%repo, base_path = %config.content.base_path, "content library ready");

        Ok(Self {
            library: ContentLibrary::new(client, repo, config.content),
        })
    }
}
