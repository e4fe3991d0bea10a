pub mod response_dto;
pub mod validation;
