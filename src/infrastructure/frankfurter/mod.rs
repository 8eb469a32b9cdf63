mod rate_source;

pub use rate_source::{
    DEFAULT_BASE_URL, FrankfurterRateSource, FrankfurterRateSourceBuilder, parse_rate_history,
};
