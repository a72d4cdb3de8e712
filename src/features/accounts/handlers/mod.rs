pub mod account_handler;

pub use account_handler::{
    __path_get_profile, __path_login, __path_logout, __path_me, __path_register,
    __path_session_state, __path_update_profile, __path_verify_admin, get_profile, login, logout,
    me, register, session_state, update_profile, verify_admin,
};
