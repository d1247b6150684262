// Domain layer - Records, buckets and page identity
pub mod calendar;
pub mod dashboard;
pub mod equipment;
pub mod error;
pub mod maintenance;
pub mod page;
pub mod production;
