pub mod checkout_handler;

pub use checkout_handler::{
    __path_checkout_history, __path_checkout_preview, __path_payment_failed,
    __path_payment_success, __path_place_checkout, checkout_history, checkout_preview,
    payment_failed, payment_success, place_checkout,
};
