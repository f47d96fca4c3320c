//! `tracker-lib` — In-process issue tracking core.
//!
//! Owns the record store and the list-query pipeline. No HTTP, no I/O:
//! the request surface lives in the `tracker_rust` binary crate and
//! hands this library snapshots and parsed parameters.
//!
//! # Quick Start
//!
//! ```
//! use tracker_lib::{IssueStore, NewIssue};
//! use tracker_lib::query::{self, ListQuery};
//!
//! let mut store = IssueStore::new();
//!
//! // Create
//! let issue = store
//!     .create(&NewIssue { title: Some("New task".into()), ..Default::default() })
//!     .unwrap();
//! assert_eq!(issue.status, "Open");
//!
//! // List
//! let page = query::execute(&store.snapshot(), &ListQuery::default());
//! assert_eq!(page.total, 1);
//! ```

pub mod error;
pub mod model;
pub mod query;
pub mod store;
pub mod util;

pub use error::{Result, TrackerError};
pub use model::{Issue, NewIssue, UpdateIssue};
pub use query::{ListQuery, QueryPage, SortOrder};
pub use store::IssueStore;
