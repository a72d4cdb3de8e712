pub mod catalog_dto;

pub use catalog_dto::{
    CourseResponseDto, HomeDto, InstructorResponseDto, SearchQuery, SearchSuggestionDto,
};
