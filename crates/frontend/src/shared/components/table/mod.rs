pub mod selection_checkbox;
pub mod sortable_header_cell;

pub use selection_checkbox::{HeaderSelectionCheckbox, RowSelectionCheckbox};
pub use sortable_header_cell::SortableHeaderCell;
