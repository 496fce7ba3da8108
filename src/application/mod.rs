//! Application layer - Use cases and orchestration

pub mod center;
pub mod init;
pub mod manage_config;

pub use center::CenterService;
pub use manage_config::ConfigService;
