//! Test utilities for the bookstore crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`). Only
//! compiled for tests or with the `test-support` feature.

pub mod cap_fs {
    //! Capability-safe filesystem helpers for tests.

    use std::ffi::OsString;
    use std::io;
    use std::path::Path;

    use cap_std::{ambient_authority, fs::Dir};

    /// Write bytes to a file through `cap_std`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bookstore::test_support::cap_fs::write_file;
    ///
    /// let path = std::env::temp_dir().join("bookstore-cap-fs-write-example.json");
    /// write_file(&path, br#"{"books": []}"#)?;
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn write_file(path: &Path, contents: &[u8]) -> io::Result<()> {
        let (parent, file_name) = parent_and_file_name(path)?;
        let directory = Dir::open_ambient_dir(parent, ambient_authority())?;
        directory.write(Path::new(&file_name), contents)
    }

    fn parent_and_file_name(path: &Path) -> io::Result<(&Path, OsString)> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        let file_name = path.file_name().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "path must include a file name")
        })?;
        Ok((parent, file_name.to_os_string()))
    }
}

pub mod http {
    //! HTTP state wired to a process-local store.

    use std::sync::Arc;

    use crate::domain::{BookCommandService, BookQueryService};
    use crate::inbound::http::render::HtmlPageRenderer;
    use crate::inbound::http::state::HttpState;
    use crate::outbound::memory::InMemoryBookRepository;

    /// Real services and renderer over `store`.
    pub fn in_memory_http_state(store: Arc<InMemoryBookRepository>) -> HttpState {
        HttpState::new(
            Arc::new(BookQueryService::new(store.clone())),
            Arc::new(BookCommandService::new(store)),
            Arc::new(HtmlPageRenderer),
        )
    }
}
