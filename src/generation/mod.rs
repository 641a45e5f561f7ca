pub mod client;
pub mod download;
