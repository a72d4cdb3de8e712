pub mod account_dto;

pub use account_dto::{
    LoginRequestDto, LoginResponseDto, ProfileResponseDto, RegisterRequestDto, SessionStateDto,
    UpdateProfileRequestDto, VerifyAdminRequestDto,
};
