//! trip-planner core
//!
//! Plans walk / drive / walk trip legs over a shared vehicle fleet and
//! estimates their cost under per-kilometer and per-minute pricing.

pub mod error;
pub mod haversine;
pub mod model;
pub mod planner;
pub mod polygon;
pub mod poppy;
pub mod pricing;
pub mod router;
pub mod selector;
pub mod traits;
