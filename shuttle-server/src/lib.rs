//! Shuttle trip planner server.
//!
//! Answers: "can I get from here to there on a single campus shuttle,
//! and when will I arrive?"

pub mod cache;
pub mod catalog;
pub mod config;
pub mod directions;
pub mod domain;
pub mod planner;
pub mod web;
