mod error;
mod extractors;
mod showcase;
