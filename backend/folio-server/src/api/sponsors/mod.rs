pub mod sponsor_dto;
pub mod sponsors;
