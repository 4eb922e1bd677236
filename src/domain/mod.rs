pub mod article;
pub mod contact;
pub mod email;
pub mod errors;
pub mod subscription;
pub mod user;
