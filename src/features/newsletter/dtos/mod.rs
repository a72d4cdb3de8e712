pub mod newsletter_dto;

pub use newsletter_dto::{SubscribeRequestDto, SubscribeResponseDto, SubscriberResponseDto};
