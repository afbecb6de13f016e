//! HTTP Routes

pub mod catalog;
pub mod chat;
pub mod predictions;
