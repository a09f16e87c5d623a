pub mod api_error;
pub mod loose;
pub mod maid_filter;
pub mod range_slider;
pub mod search;
