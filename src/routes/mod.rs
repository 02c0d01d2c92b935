//! Route modules for LexView Server

pub mod files;
pub mod health;
pub mod question;
pub mod upload;
