pub mod config;
pub mod db;
pub mod http;
pub mod repositories;
pub mod request_id;
pub mod storage;
