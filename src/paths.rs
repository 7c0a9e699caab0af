//! Filesystem locations used by indra-tui.

use std::path::PathBuf;

/// Path to the debug log file, in the OS temp directory.
#[must_use]
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("indra-tui.log")
}

/// Resolve the local application data directory for the current platform.
///
/// Returns `None` when none of the relevant environment variables are set.
#[must_use]
#[cfg(windows)]
pub fn data_local_dir() -> Option<PathBuf> {
    std::env::var_os("LOCALAPPDATA")
        .or_else(|| std::env::var_os("APPDATA"))
        .map(PathBuf::from)
}

/// Resolve the local application data directory for the current platform.
///
/// Follows the XDG convention, falling back to `~/.local/share` (or the
/// macOS application-support directory).
#[must_use]
#[cfg(not(windows))]
pub fn data_local_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var_os("HOME").map(|home| {
                #[cfg(target_os = "macos")]
                {
                    PathBuf::from(home)
                        .join("Library")
                        .join("Application Support")
                }

                #[cfg(not(target_os = "macos"))]
                {
                    PathBuf::from(home).join(".local").join("share")
                }
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_suffix() {
        assert!(log_path().ends_with("indra-tui.log"));
    }

    #[test]
    fn test_data_local_dir_matches_env_presence() {
        let has_env = std::env::var_os("XDG_DATA_HOME").is_some()
            || std::env::var_os("HOME").is_some()
            || std::env::var_os("LOCALAPPDATA").is_some()
            || std::env::var_os("APPDATA").is_some();
        assert_eq!(data_local_dir().is_some(), has_env);
    }
}
