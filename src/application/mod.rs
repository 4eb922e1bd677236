pub mod commands;
pub mod dto;
pub mod error;
pub mod forms;
pub mod gate;
pub mod ports;
pub mod queries;
pub mod services;
pub mod session;

pub use error::ApplicationResult;
