pub mod error;
pub mod logging;
pub mod normalize;
pub mod storage;
pub mod types;
