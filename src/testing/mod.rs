#![cfg(test)]
crate::reexport!(context);
pub use rstest::*;

pub(in crate::testing) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}

mod script_dir_tests {
    use super::{super::*, *};

    #[test_context(ScriptDir)]
    #[test]
    fn writes_scripts_inside_the_directory(ctx: &mut ScriptDir) {
        let path = ctx.script("a.sql", "SELECT 1;\n");
        assert!(path.starts_with(ctx.path()));
        assert_eq!(std::fs::read_to_string(path).expect("fixture readable"), "SELECT 1;\n");
    }

    #[test_context(ScriptDir)]
    #[test]
    fn missing_script_is_reported_with_its_path(ctx: &mut ScriptDir) {
        let path = ctx.path().join("missing.sql");
        match load_file(&path) {
            Err(Error::SourceUnavailable { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected SourceUnavailable, got {other:?}"),
        }
    }
}
