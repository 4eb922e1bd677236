pub mod articles;
pub mod session;
