//! Entry point that validates input, picks a walker and prints the tree

use std::fs;
use std::path::Path;
use std::rc::Rc;

use termcolor::NoColor;
use tracing::debug;

use crate::error::{Result, TreeError};
use crate::output::{OutputConfig, StreamingFormatter, TreeOutput};
use crate::search::PatternMatcher;
use crate::tree::{FilteredWalker, Node, PlainWalker, TreeSummary, WalkContext};

/// Check that `path` can be displayed with the given pattern.
///
/// A missing path is reported first. A file with no pattern has nothing to
/// list and nothing to search, so it is rejected too.
pub fn validate_inputs(path: &Path, pattern: Option<&str>) -> Result<()> {
    if !path.exists() {
        return Err(TreeError::path_not_found(path));
    }
    if path.is_file() && pattern.is_none_or(str::is_empty) {
        return Err(TreeError::invalid_input(path));
    }
    Ok(())
}

/// Print the tree for `path` to stdout and return the summary counts.
pub fn build_tree(path: &Path, pattern: Option<&str>) -> Result<TreeSummary> {
    let mut formatter = StreamingFormatter::stdout(&OutputConfig::default());
    build_tree_with(path, pattern, &mut formatter)
}

/// Walk `path` and feed every node, then the summary, to `output`.
///
/// With a non-empty pattern only matching files and their ancestors are
/// shown; otherwise every entry is. Each call starts from a fresh
/// `WalkContext`.
pub fn build_tree_with<O: TreeOutput>(
    path: &Path,
    pattern: Option<&str>,
    output: &mut O,
) -> Result<TreeSummary> {
    let pattern = pattern.filter(|p| !p.is_empty());
    validate_inputs(path, pattern)?;

    let root = fs::canonicalize(path)?;
    let mut context = WalkContext::new();

    match pattern {
        Some(pattern) => {
            let matcher = PatternMatcher::new(pattern)?;
            debug!("searching {} for '{}'", root.display(), matcher.as_str());
            emit(FilteredWalker::new(root, &matcher, &mut context), output)?;
        }
        None if root.is_dir() => {
            debug!("listing {}", root.display());
            emit(PlainWalker::new(root, &mut context), output)?;
        }
        None => {}
    }

    let summary = context.summary();
    output.finish(&summary)?;
    Ok(summary)
}

/// Render the tree to a string without colors.
pub fn render_tree(path: &Path, pattern: Option<&str>) -> Result<String> {
    let mut formatter = StreamingFormatter::new(NoColor::new(Vec::new()));
    build_tree_with(path, pattern, &mut formatter)?;
    let bytes = formatter.into_inner().into_inner();
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn emit<O: TreeOutput>(nodes: impl Iterator<Item = Rc<Node>>, output: &mut O) -> Result<()> {
    for node in nodes {
        output.output_node(&node)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDir;

    fn scenario() -> TestDir {
        let dir = TestDir::new();
        dir.add_file("root/a.txt", "cat");
        dir.add_file("root/sub/b.txt", "dog");
        dir
    }

    #[test]
    fn test_search_prunes_tree() {
        let dir = scenario();
        let text = render_tree(&dir.path().join("root"), Some("cat")).unwrap();
        assert_eq!(text, "root/\n├── a.txt (1)\n\n0 directories, 1 files\n");
    }

    #[test]
    fn test_plain_listing() {
        let dir = scenario();
        let text = render_tree(&dir.path().join("root"), None).unwrap();
        assert_eq!(
            text,
            "root/\n├── a.txt\n└── sub/\n    └── b.txt\n\n1 directories, 2 files\n"
        );
    }

    #[test]
    fn test_file_without_pattern_is_invalid() {
        let dir = scenario();
        let file = dir.path().join("root/a.txt");

        let err = render_tree(&file, None).unwrap_err();
        assert!(matches!(err, TreeError::InvalidInput(_)));
        let err = render_tree(&file, Some("")).unwrap_err();
        assert!(matches!(err, TreeError::InvalidInput(_)));
    }

    #[test]
    fn test_missing_path_is_not_found() {
        let dir = TestDir::new();
        let missing = dir.path().join("does/not/exist");

        let err = render_tree(&missing, None).unwrap_err();
        assert!(matches!(err, TreeError::PathNotFound(ref p) if p == &missing));
        let err = render_tree(&missing, Some("cat")).unwrap_err();
        assert!(matches!(err, TreeError::PathNotFound(_)));
    }

    #[test]
    fn test_count_is_non_overlapping() {
        let dir = TestDir::new();
        dir.add_file("root/a.txt", "aaaa");
        let text = render_tree(&dir.path().join("root"), Some("aa")).unwrap();
        assert!(text.contains("└── a.txt (2)"), "{text}");
    }

    #[test]
    fn test_empty_pattern_lists_everything() {
        let dir = scenario();
        let root = dir.path().join("root");
        assert_eq!(
            render_tree(&root, Some("")).unwrap(),
            render_tree(&root, None).unwrap()
        );
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let dir = scenario();
        let err = render_tree(&dir.path().join("root"), Some("[oops")).unwrap_err();
        assert!(matches!(err, TreeError::InvalidPattern { .. }));
    }

    #[test]
    fn test_file_root_with_pattern() {
        let dir = scenario();
        let text = render_tree(&dir.path().join("root/a.txt"), Some("CAT")).unwrap();
        assert_eq!(text, "a.txt\n\n0 directories, 1 files\n");
    }

    #[test]
    fn test_repeated_calls_start_fresh() {
        let dir = scenario();
        let root = dir.path().join("root");
        let mut first = StreamingFormatter::new(NoColor::new(Vec::new()));
        let mut second = StreamingFormatter::new(NoColor::new(Vec::new()));

        let a = build_tree_with(&root, Some("cat"), &mut first).unwrap();
        let b = build_tree_with(&root, Some("cat"), &mut second).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, TreeSummary { directories: 0, files: 1 });
        assert_eq!(
            first.into_inner().into_inner(),
            second.into_inner().into_inner()
        );
    }

    #[test]
    fn test_relative_path_is_resolved() {
        let dir = scenario();
        let nested = dir.path().join("root/sub/../sub");
        let text = render_tree(&nested, None).unwrap();
        assert!(text.starts_with("sub/\n"), "{text}");
        assert!(text.ends_with("0 directories, 1 files\n"));
    }
}
