// Application layer - Use cases and ports
pub mod aggregation;
pub mod data_loader;
pub mod dataset_source;
pub mod page_service;
