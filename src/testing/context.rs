use std::path::{Path, PathBuf};
use tempfile::TempDir;
pub use test_context::{TestContext, test_context};

/// A scratch directory for SQL script fixtures, removed on teardown.
pub struct ScriptDir {
    pub dir: TempDir,
}

impl ScriptDir {
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `name` inside the directory and return its path.
    pub fn script(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write script fixture");
        path
    }
}

impl TestContext for ScriptDir {
    fn setup() -> Self {
        crate::testing::common_init();
        Self {
            dir: tempfile::tempdir().expect("Failed to create script directory"),
        }
    }

    fn teardown(self) {
        self.dir
            .close()
            .expect("Failed to remove script directory");
    }
}
