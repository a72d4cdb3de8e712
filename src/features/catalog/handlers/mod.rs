pub mod catalog_handler;

pub use catalog_handler::{
    __path_get_course, __path_get_instructor, __path_home, __path_list_courses,
    __path_list_instructors, __path_search_redirect, __path_search_suggestions, get_course,
    get_instructor, home, list_courses, list_instructors, search_redirect, search_suggestions,
};
