// Rate series processing modules
pub mod aggregator;
pub mod comparator;
pub mod session;
