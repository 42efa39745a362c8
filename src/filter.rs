//! Ignore-token matching.
//!
//! Tokens are matched against root-relative, forward-slash paths by plain
//! segment and substring comparison. There is no glob syntax and no negation:
//! a token such as `build` excludes any file or directory named `build` at any
//! depth.

use std::path::{Component, Path};

/// Tokens that are always ignored.
pub const DEFAULT_IGNORES: &[&str] = &[
    "node_modules",
    ".git",
    ".hg",
    ".svn",
    "dist",
    "build",
    "out",
    ".next",
    ".cache",
    ".turbo",
    ".vercel",
    "coverage",
    "__pycache__",
    "venv",
    ".venv",
];

#[derive(Debug, Clone)]
struct Token {
    exact: String,
    prefix: String,
    inner: String,
    suffix: String,
}
impl Token {
    fn new(raw: &str) -> Option<Self> {
        let normalized = raw.trim().replace('\\', "/");
        let exact = normalized.trim_end_matches('/');
        if exact.is_empty() {
            return None;
        }
        Some(Self {
            exact: exact.to_string(),
            prefix: format!("{exact}/"),
            inner: format!("/{exact}/"),
            suffix: format!("/{exact}"),
        })
    }
    fn matches(&self, path: &str, basename: &str) -> bool {
        path == self.exact
            || path.starts_with(&self.prefix)
            || path.contains(&self.inner)
            || path.ends_with(&self.suffix)
            || basename == self.exact
    }
}

/// The effective ignore set of one run: defaults, user tokens and the output
/// file's own root-relative path.
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    tokens: Vec<Token>,
}
impl IgnoreSet {
    pub fn new(user_tokens: &[String], root: &Path, output: Option<&Path>) -> Self {
        let mut raw: Vec<String> = DEFAULT_IGNORES.iter().map(|t| t.to_string()).collect();
        raw.extend(user_tokens.iter().cloned());
        if let Some(rel) = output.and_then(|out| out.strip_prefix(root).ok()) {
            raw.push(slash_path(rel));
        }
        let mut tokens: Vec<Token> = Vec::with_capacity(raw.len());
        for token in raw.iter().filter_map(|t| Token::new(t)) {
            if !tokens.iter().any(|t| t.exact == token.exact) {
                tokens.push(token);
            }
        }
        Self { tokens }
    }
    /// Returns true when `path` (root-relative, `/`-separated) is excluded.
    pub fn is_ignored(&self, path: &str) -> bool {
        let basename = path.rsplit('/').next().unwrap_or(path);
        self.tokens.iter().any(|t| t.matches(path, basename))
    }
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.exact.as_str())
    }
}

/// Joins the normal components of `path` with `/` regardless of the host
/// separator.
pub(crate) fn slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
