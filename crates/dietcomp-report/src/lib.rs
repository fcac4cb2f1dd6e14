pub mod preview;
pub mod template;
pub mod writer;

pub use preview::preview_table;
pub use template::{TEMPLATE_COLUMNS, write_cvas_template};
pub use writer::{ReportPaths, write_bundle, write_table_csv};
