pub mod confirm_dialog;
pub mod data_table;
pub mod page_header;
pub mod pagination_controls;
pub mod search_input;
pub mod stat_card;
pub mod ui;

pub use confirm_dialog::ConfirmDialog;
pub use data_table::{ColumnDef, DataTable};
pub use page_header::PageHeader;
pub use search_input::SearchInput;
pub use stat_card::StatCard;
