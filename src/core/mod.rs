// Pure list-processing core: filtering, sorting, comparison selection and
// learning-plan progress math. Stateless and synchronous; all state lives
// with the caller and every function returns a new sequence.

pub mod filter;
pub mod progress;
pub mod selection;
pub mod sort;

pub use filter::{filter_careers, filter_jobs, CareerFilter, JobFilter};
pub use selection::SelectionSet;
pub use sort::{sort_careers, SortKey, SortOrder, SortState};
