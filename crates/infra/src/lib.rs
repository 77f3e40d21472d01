pub mod availability;
pub mod card;
pub mod db;
pub mod models;
pub mod pagination;
pub mod repos;
pub mod slug;
pub mod snapshot;
pub mod status;
pub mod timeline;
pub mod username;
