pub mod display;
pub mod icons;

pub use display::{
    display_categories, display_decomposition, display_entries, display_filtered_out,
    format_decomposition, format_entry, format_filtered_out,
};
