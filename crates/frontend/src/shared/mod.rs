pub mod api_client;
pub mod api_error;
pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod dynamic_columns;
pub mod export;
pub mod icons;
pub mod list_query;
pub mod modal;
pub mod page_frame;
pub mod paged_data;
pub mod request_sequencer;
