// File system utilities

use std::io;
use std::path::Path;

/// Create `path` and any missing ancestors. An existing directory is not an error;
/// an existing non-directory is.
pub fn ensure_directory_exists(path: &Path) -> io::Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(path)
}
