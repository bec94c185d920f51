use schemars::schema_for;

use ryder_core::entities::{Article, ArticleFrontmatter, LeaderboardEntry};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaEntity};
use crate::output::output;

/// Handle `ryder schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.entity {
        SchemaEntity::Article => schema_for!(Article),
        SchemaEntity::Frontmatter => schema_for!(ArticleFrontmatter),
        SchemaEntity::LeaderboardEntry => schema_for!(LeaderboardEntry),
    };
    output(&schema, flags.format)
}
