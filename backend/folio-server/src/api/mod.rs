pub mod contacts;
pub mod error;
pub mod extractors;
pub mod projects;
pub mod seed;
pub mod sponsors;
