//! Whitespace-insensitive equality assertions for sequences of SQL queries,
//! plus a delimiter-aware splitter for multi-statement SQL scripts.
//!
//! ```rust
//! use sqleq::*;
//!
//! assert!(compare("SELECT *\nFROM `t1`", "SELECT * FROM `t1`;").is_ok());
//! assert!(compare(vec!["A", "B"], vec!["B", "A"]).is_err());
//! ```

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}

reexport!(testing, test);
reexport!(error);
reexport!(config);
pub mod sql;
#[allow(ambiguous_glob_reexports)]
pub use sql::*;
reexport!(query);
mod compare;
pub use compare::*;
reexport!(driver);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};
