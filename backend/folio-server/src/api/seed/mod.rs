pub mod seed;
pub mod seed_response;
pub mod showcase;
