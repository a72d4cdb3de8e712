pub mod newsletter_handler;

pub use newsletter_handler::{__path_subscribe, subscribe};
