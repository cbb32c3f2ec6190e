mod dashboard;
mod novels;

pub use dashboard::load_dashboard;
pub use novels::{load_novel_list, load_novel_stats};
