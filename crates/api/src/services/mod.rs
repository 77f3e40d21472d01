pub mod username_repair;

pub use username_repair::spawn_username_repair;
