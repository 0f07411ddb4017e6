pub mod contact_dto;
pub mod contacts;
