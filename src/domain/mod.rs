pub mod errors;
pub mod formatting;
pub mod grouping;
pub mod ids;
pub mod novels;
pub mod repositories;
pub mod series;
pub mod statistics;

// Re-exports
pub use errors::FetchError;
pub use grouping::{Grouping, group};
pub use ids::{AuthorId, NovelId};
pub use novels::{NovelDetail, NovelRecord};
pub use repositories::NovelSource;
pub use series::{Series, SeriesPoint, derive_series};
pub use statistics::{MetricKey, StatSnapshot};
