pub mod contact_handler;

pub use contact_handler::{
    __path_about, __path_create_contact_message, about, create_contact_message,
};
