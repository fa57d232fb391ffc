pub mod logger;
pub mod tlc_engine;
