//! Metro route planner server.
//!
//! Loads a metro network from CSV and answers two questions between any
//! pair of stations: which route is shortest, and which needs the fewest
//! line changes.

pub mod cache;
pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
