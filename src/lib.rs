//! Nexly - Social networking backend with a mental-wellness companion
//!
//! This crate implements the Nexly community platform: moderated posts,
//! a depression-screening questionnaire with guardian reports, a daily
//! mood-tracking quiz, and an LLM-backed support chat.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
