pub mod cart_handler;

pub use cart_handler::{
    __path_add_to_cart, __path_cart_snippet, __path_remove_from_cart, __path_view_cart,
    add_to_cart, cart_snippet, remove_from_cart, view_cart,
};
