//! Paged collection browsing: query building, filters, generation-tagged
//! loading and the table that ties them together.

pub mod columns;
pub mod filter_set;
pub mod live_table;
pub mod query;
pub mod remote_list;

pub use columns::{CellFormat, Column};
pub use filter_set::{Comparator, Filter, FilterSet};
pub use live_table::LiveTable;
pub use query::{append_query, ListQuery, ListTab};
pub use remote_list::RemoteListModel;
