pub mod facets;
pub mod grouping;
pub mod search;
pub mod submission;

pub use facets::{facet_values, ALL_SENTINEL};
pub use grouping::{group_by_category, CategoryGroup};
pub use search::{filter_indices, Searchable};
pub use submission::{build_issue_url, resolve_repo_slug, DatasetForm};
