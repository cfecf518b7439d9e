//! Vibes desktop feed.
//!
//! This crate provides a Dioxus desktop application that shows a feed of
//! posts with animated like, bookmark, and emoji reaction toggles.

pub mod components;
pub mod config;
pub mod feed_source;
pub mod logging;
pub mod state;
