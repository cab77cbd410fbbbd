//! SDK service implementations
//!
//! One service per area of the admin API.

mod ranking;
mod review_logs;
mod reviews;
mod session;
mod stats;
mod users;

pub use ranking::RankingService;
pub use review_logs::ReviewLogService;
pub use reviews::ReviewService;
pub use session::SessionService;
pub use stats::StatsService;
pub use users::UserService;
