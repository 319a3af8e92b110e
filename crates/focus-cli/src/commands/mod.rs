//! Command implementations.

pub mod analyze;
pub mod health;
pub mod logs;
pub mod track;
pub mod visit;

pub use self::analyze::execute_analyze;
pub use self::health::execute_health;
pub use self::logs::execute_logs;
pub use self::track::execute_track;
pub use self::visit::execute_visit;
