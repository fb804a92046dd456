pub mod dynamic_record;
pub mod paged;

pub use dynamic_record::DynamicRecord;
pub use paged::{PageQuery, PagedResponse};
