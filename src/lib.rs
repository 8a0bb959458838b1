//! PTO planner with per-country public holidays
//!
//! This crate tracks an employee's paid time off against an annual allotment,
//! skipping weekends and the public holidays of their country, and records
//! trips whose spans are booked as time off.

#![warn(missing_docs)]

pub mod accounting;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod planner;
pub mod store;
