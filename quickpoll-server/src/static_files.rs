use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

const ENTRY_DOCUMENT: &str = "index.html";

/// Serves the UI bundle. Anything that is not a file gets the entry document
/// so client-side routes resolve.
pub fn service(static_dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join(ENTRY_DOCUMENT)))
}
