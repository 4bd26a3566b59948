//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod session;

pub use init::InitService;
pub use manage_config::ConfigService;
pub use session::{
    Clock, DashboardView, Export, FixedClock, MoodSession, Notice, NoticeLevel, Refresh,
    SessionState, SystemClock,
};
