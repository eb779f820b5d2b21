//! Station proximity and line-status engine for an AR tube spotter.
//!
//! Given a stream of location fixes, decides which stations are close
//! enough to mark, and for each one which lines serve it and how those
//! lines are running right now.

pub mod cache;
pub mod catalog;
pub mod content;
pub mod domain;
pub mod markers;
pub mod proximity;
pub mod resolver;
pub mod tfl;
pub mod web;
