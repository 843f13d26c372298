mod format;
mod parse;
mod unit;
mod wei;

pub use format::format_wei;
pub use format::FormatWeiError;
pub use format::FormattedQuantity;

pub use parse::parse_wei;
pub use parse::FractionTooPrecise;
pub use parse::ParseWeiError;
pub use parse::ParsedQuantity;

pub use unit::multiplier_for;
pub use unit::Unit;
pub use unit::UnknownUnitError;

pub use wei::WeiAmount;
pub use wei::WEI_PER_ETH;
pub use wei::WEI_PER_GWEI;
