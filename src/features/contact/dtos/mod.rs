pub mod contact_dto;

pub use contact_dto::{AboutDto, ContactMessageResponseDto, CreateContactMessageDto};
