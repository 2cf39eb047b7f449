//! Data Transfer Objects for API requests and responses.
//!
//! Field names follow the public JSON contract (`originalUrl`, `URLID`,
//! `shortUrl`, `shortid`), not Rust naming.

pub mod health;
pub mod shorten;
pub mod url_list;
