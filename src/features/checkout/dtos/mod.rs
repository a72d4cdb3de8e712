pub mod checkout_dto;

pub use checkout_dto::{
    CheckoutPreviewDto, CheckoutQuery, CheckoutRecordDto, CheckoutRequestDto, CheckoutResultDto,
    PaymentPageDto,
};
