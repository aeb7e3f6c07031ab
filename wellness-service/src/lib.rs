//! wellness-service: AI journaling companion, supportive chat and daily tips
//! backed by a Gemini completion provider.
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
