pub mod env;
pub mod log;
pub mod units;

pub use units::format_wei;
pub use units::parse_wei;
