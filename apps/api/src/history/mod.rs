// Saved posts, profile optimizations and the dashboard summary.

pub mod handlers;
pub mod repository;
