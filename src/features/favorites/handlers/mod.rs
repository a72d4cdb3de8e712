pub mod favorite_handler;

pub use favorite_handler::{
    __path_list_favorites, __path_remove_favorite, __path_toggle_favorite, list_favorites,
    remove_favorite, toggle_favorite,
};
