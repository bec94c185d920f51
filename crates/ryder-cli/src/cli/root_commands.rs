use clap::{Args, Subcommand, ValueEnum};
use ryder_core::enums::Category;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Article counts for every category.
    Categories,
    /// List articles, optionally for one category.
    Articles(ArticlesArgs),
    /// Show one article with its table of contents and related articles.
    Article(ArticleArgs),
    /// List every tag in use.
    Tags(TagsArgs),
    /// Articles carrying a tag.
    Tag(TagArgs),
    /// Articles sharing tags with the given one.
    Related(RelatedArgs),
    /// Grouped leaderboard with totals.
    Leaderboard,
    /// Resolve a leaderboard doc link to an article route.
    DocLink(DocLinkArgs),
    /// Approximate search over titles, tags and content.
    Search(SearchArgs),
    /// Run the full pipeline and report health checks.
    Verify,
    /// Print the JSON Schema of an entity.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ArticlesArgs {
    /// Restrict to one category (models, tools, skills, repos, agents, projects).
    #[arg(short, long)]
    pub category: Option<Category>,
}

#[derive(Clone, Debug, Args)]
pub struct ArticleArgs {
    pub category: String,
    pub slug: String,
}

#[derive(Clone, Debug, Args)]
pub struct TagsArgs {
    /// Print normalised tag slugs instead of the original spellings.
    #[arg(long)]
    pub slugs: bool,
}

#[derive(Clone, Debug, Args)]
pub struct TagArgs {
    pub slug: String,
}

#[derive(Clone, Debug, Args)]
pub struct RelatedArgs {
    pub category: String,
    pub slug: String,
    /// Maximum number of related articles.
    #[arg(short, long, default_value_t = ryder_content::tags::DEFAULT_RELATED_LIMIT)]
    pub limit: usize,
}

#[derive(Clone, Debug, Args)]
pub struct DocLinkArgs {
    /// Link as written in the leaderboard data file, e.g. ../tools/cursor.md
    pub link: String,
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    pub query: String,
    /// Maximum number of hits.
    #[arg(short, long, default_value_t = 10)]
    pub limit: usize,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub entity: SchemaEntity,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaEntity {
    Article,
    Frontmatter,
    LeaderboardEntry,
}
