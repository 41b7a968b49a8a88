use anyhow::Context;
use graphql_engine::ast;
use graphql_engine::GraphQLError;
use graphql_engine::Source;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

pub(crate) const DEFAULT_GRAPHQL_FILE_EXTS: [&str; 3] = ["graphql", "graphqls", "gql"];

#[derive(Debug, Default)]
pub(crate) struct FoundFiles {
    pub paths: Vec<PathBuf>,
    pub num_skipped: usize,
}

/// Finds every GraphQL file at or under each of `roots`.
pub(crate) fn find_graphql_files(
    roots: &[PathBuf],
    graphql_file_exts: &[String],
) -> anyhow::Result<FoundFiles> {
    // Normalize the set of file extensions to filter with
    let graphql_file_exts: HashSet<&str> =
        graphql_file_exts.iter()
            .map(|ext| ext.trim_start_matches('.'))
            .collect();

    log::debug!("Scanning {} input paths...", roots.len());
    let mut found = FoundFiles::default();
    for root in roots {
        for entry in WalkDir::new(root.as_path()).follow_links(true) {
            let entry = entry.with_context(|| format!(
                "Encountered an error while iterating recursive filesystem \
                entities at/under {root:#?}."
            ))?;
            let path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {path:#?}.");
                continue;
            }
            let has_graphql_ext = path
                .extension()
                .is_some_and(|ext| graphql_file_exts.contains(&*ext.to_string_lossy()));
            if has_graphql_ext {
                log::trace!("Found GraphQL file at {path:#?}.");
                found.paths.push(canonicalize(path)?);
            } else {
                log::trace!("Skipping non-graphql file: {path:#?}.");
                found.num_skipped += 1;
            }
        }
    }

    // A single file path given explicitly is loaded as GraphQL even if its
    // extension doesn't match one of `graphql_file_exts`.
    if found.paths.is_empty()
        && roots.len() == 1
        && let Some(first_root) = roots.first()
        && first_root.is_file() {
        let first_root = canonicalize(first_root)?;
        log::warn!(
            "Proceeding to load {first_root:#?} even though it doesn't match \
            any of the --graphql-file-exts ({}).",
            graphql_file_exts.iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.num_skipped = found.num_skipped.saturating_sub(1);
        found.paths.push(first_root);
    }

    log::debug!("Found {} GraphQL files.", found.paths.len());
    Ok(found)
}

fn canonicalize(path: &Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve {path:#?}."))
}

/// Reads and parses one GraphQL file. Syntax errors are rendered with a
/// snippet of the file.
pub(crate) fn parse_file(path: &Path) -> anyhow::Result<ast::Document> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {path:#?}."))?;
    let source = Source::with_name(body, path.display().to_string());
    graphql_engine::parse(source).map_err(|error: GraphQLError| anyhow::anyhow!("{error}"))
}
