//! Per-account storage locations

use std::path::PathBuf;

/// Directory name under the user's data directory
pub const APP_DIR_NAME: &str = "viewer-data";

/// Resolves where per-account files live.
///
/// Layout: `<root>/<account>/<file>`, where `root` defaults to
/// `dirs::data_dir()/viewer-data`.
#[derive(Debug, Clone)]
pub struct AccountPaths {
    root: PathBuf,
    account: String,
}

impl AccountPaths {
    /// Paths under the platform data directory.
    /// Returns `None` when the platform has no such directory.
    pub fn new(account: &str) -> Option<Self> {
        let root = dirs::data_dir()?.join(APP_DIR_NAME);
        Some(Self::with_root(root, account))
    }

    /// Paths under an explicit root (tests, portable installs)
    pub fn with_root(root: impl Into<PathBuf>, account: &str) -> Self {
        Self {
            root: root.into(),
            account: sanitize_account(account),
        }
    }

    /// Directory holding this account's files
    pub fn account_dir(&self) -> PathBuf {
        self.root.join(&self.account)
    }

    /// Full path of a file in the account directory
    pub fn account_file(&self, name: &str) -> PathBuf {
        self.account_dir().join(name)
    }

    /// Full path of a file shared by all accounts
    pub fn shared_file(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

/// Account names become directory names: lowercase, spaces to underscores,
/// anything outside `[a-z0-9_.-]` dropped.
fn sanitize_account(account: &str) -> String {
    let cleaned: String = account
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();

    match cleaned.trim_matches('.') {
        "" => "default".to_string(),
        name => name.to_string(),
    }
}
