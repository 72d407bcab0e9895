//! HTML head rendering and document injection.

pub mod common;
pub mod head;
pub mod processor;

pub use head::{render_head_fragment, write_head_content};
pub use processor::process_html;
