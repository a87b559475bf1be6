//! Services that wire form validation, the store, and aggregation together.

pub mod services;
