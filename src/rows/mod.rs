//! Row axis: hierarchy grouping and row pagination

mod group;
mod paginate;

pub use group::{group_rows, HierarchyGroup, HierarchyGroups};
pub use paginate::{RowPage, RowPaginator};
