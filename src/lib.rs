pub mod app;
pub mod calendar;
pub mod config;
pub mod errors;
pub mod grouping;
pub mod handlers;
pub mod models;
pub mod palette;
pub mod quantile;
pub mod scale;
pub mod stats;
pub mod storage;
pub mod state;
pub mod ticks;

pub use app::router;
pub use calendar::{group_by_month, group_by_weekday};
pub use config::Config;
pub use errors::{AnalyticsError, AppError};
pub use grouping::{group_and_sum, Grouped};
pub use quantile::quantile;
pub use scale::{make_color_scale, with_zero_sentinel, ThresholdScale};
pub use state::AppState;
pub use storage::load_data;
