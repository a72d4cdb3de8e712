pub mod cart_dto;

pub use cart_dto::{CartAddResponseDto, CartLineDto, CartMutationDto, CartSnippetDto, CartViewDto};
