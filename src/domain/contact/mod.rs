pub mod entity;
pub mod repository;

pub use entity::{ContactMessage, NewContactMessage};
pub use repository::ContactMessageRepository;
