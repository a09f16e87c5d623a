pub mod checkbox_group;
pub mod filter_panel;
pub mod form_field;
pub mod range_slider;
pub mod table;
