mod markdown;
mod sidebar_vm;

pub use markdown::{markdown_to_html, sanitize_html};
pub use sidebar_vm::{DayGroupVm, SessionLinkVm, map_day_groups};
