// Exchange-rate series domain
pub mod comparison;
pub mod period;
pub mod rate_point;
pub mod week;
