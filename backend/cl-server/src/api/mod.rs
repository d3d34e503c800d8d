pub mod authorization;
pub mod checklists;
pub mod error;
pub mod extractors;
pub mod response_format;
