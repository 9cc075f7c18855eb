use std::path::Path;

use url::Url;

/// Short display name for a source path: its last component, or the path
/// itself when it has none (`/`, `..`, provider ids without separators).
pub fn path_display_name(source: &str) -> String {
    let trimmed = source.trim_end_matches(['/', '\\']);
    Path::new(trimmed)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.to_string())
}

/// Path part of a scope. Scopes are either plain paths or URIs
/// (`file:///ws/app`, `vscode-remote://host/ws/app`); a URI contributes only
/// its path. Windows drive letters are not mistaken for a scheme.
pub fn scope_path(scope: &str) -> String {
    let url = match Url::parse(scope) {
        Ok(url) if url.scheme().len() > 1 && !url.cannot_be_a_base() => url,
        _ => return scope.to_string(),
    };
    if url.scheme() == "file" {
        if let Ok(path) = url.to_file_path() {
            return path.to_string_lossy().into_owned();
        }
    }
    match url.path() {
        "" => "/".to_string(),
        path => path.to_string(),
    }
}
