//! End-to-end autocomplete scenarios
//!
//! Mirrors the intended bulk-load-then-query deployment: a corpus of
//! popular Maven coordinates is indexed once at depth 3 and then shared
//! read-only across test threads.
//!
//! ## Running
//!
//! ```bash
//! cargo test --test autocomplete_scenarios
//! ```

mod corpus_queries;
