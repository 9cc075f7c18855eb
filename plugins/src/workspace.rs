use std::path::Path;

use taskpick_core::api::WorkspaceInfo;

/// Workspace layout taken from a snapshot's folder list.
#[derive(Debug, Clone, Default)]
pub struct SnapshotWorkspace {
    folders: Vec<String>,
    home: Option<String>,
}

impl SnapshotWorkspace {
    pub fn new(folders: Vec<String>) -> Self {
        let home = std::env::var("HOME").ok().filter(|h| !h.trim().is_empty());
        Self { folders, home }
    }

    pub fn with_home(mut self, home: Option<String>) -> Self {
        self.home = home;
        self
    }

    fn folder_for(&self, scope: &str) -> Option<&str> {
        self.folders
            .iter()
            .find(|f| {
                f.as_str() == scope
                    || Path::new(f).file_name().is_some_and(|name| name == scope)
            })
            .map(String::as_str)
    }

    fn tildify(&self, path: &str) -> String {
        let rest = self
            .home
            .as_deref()
            .and_then(|home| path.strip_prefix(home))
            .filter(|rest| rest.is_empty() || rest.starts_with('/'));
        match rest {
            Some(rest) => format!("~{rest}"),
            None => path.to_string(),
        }
    }
}

impl WorkspaceInfo for SnapshotWorkspace {
    fn is_multi_root(&self) -> bool {
        self.folders.len() != 1
    }

    fn scope_long_name(&self, scope: &str) -> String {
        self.tildify(self.folder_for(scope).unwrap_or(scope))
    }
}
