use serde::Serialize;

use ryder_core::entities::Article;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::context::AppContext;

pub mod articles;
pub mod leaderboard;
pub mod schema;
pub mod search;
pub mod tags;
pub mod verify;

/// Dispatch a parsed command to its handler.
///
/// Configuration is loaded only for commands that read the repository, so
/// `schema` and `doc-link` work without a configured token or repo.
pub async fn dispatch(command: Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    let ctx = AppContext::init;
    match command {
        Commands::Schema(args) => schema::handle(&args, flags),
        Commands::DocLink(args) => leaderboard::handle_doc_link(&args, flags),
        Commands::Categories => articles::handle_categories(&ctx()?, flags).await,
        Commands::Articles(args) => articles::handle_list(&args, &ctx()?, flags).await,
        Commands::Article(args) => articles::handle_show(&args, &ctx()?, flags).await,
        Commands::Tags(args) => tags::handle_list(&args, &ctx()?, flags).await,
        Commands::Tag(args) => tags::handle_tag(&args, &ctx()?, flags).await,
        Commands::Related(args) => tags::handle_related(&args, &ctx()?, flags).await,
        Commands::Leaderboard => leaderboard::handle(&ctx()?, flags).await,
        Commands::Search(args) => search::handle(&args, &ctx()?, flags).await,
        Commands::Verify => verify::handle(&ctx()?, flags).await,
    }
}

/// One line of an article listing in table output.
#[derive(Debug, Serialize)]
pub struct ArticleRow {
    pub address: String,
    pub title: String,
    pub status: String,
    pub updated: String,
    pub tags: Vec<String>,
}

impl From<&Article> for ArticleRow {
    fn from(article: &Article) -> Self {
        Self {
            address: article.address(),
            title: article.title.clone(),
            status: article.status.label().to_string(),
            updated: article.updated.format("%Y-%m-%d").to_string(),
            tags: article.tags.clone(),
        }
    }
}

pub fn article_rows(articles: &[Article]) -> Vec<ArticleRow> {
    articles.iter().map(ArticleRow::from).collect()
}

/// Fetch an article by category name and slug, failing when absent.
pub async fn require_article(ctx: &AppContext, category: &str, slug: &str) -> anyhow::Result<Article> {
    ctx.library
        .find_article_by_name(category, slug)
        .await?
        .ok_or_else(|| anyhow::anyhow!("article not found: /{category}/{slug}"))
}
