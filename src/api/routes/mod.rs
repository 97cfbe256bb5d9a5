//! API Routes
//!
//! Route handlers organized by view.

pub mod pages;
pub mod weather;
