pub mod storage;
pub mod utils;
