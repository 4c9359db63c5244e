pub mod models;
pub mod shopping;
pub mod storage;
pub mod store;
