pub mod admin_handler;

pub use admin_handler::{
    __path_create_course, __path_create_instructor, __path_delete_course,
    __path_delete_instructor, __path_list_messages, __path_list_subscribers,
    __path_update_course, create_course, create_instructor, delete_course, delete_instructor,
    list_messages, list_subscribers, update_course,
};
