pub mod favorite_dto;

pub use favorite_dto::{
    FavoriteDto, FavoriteRemoveDto, FavoriteToggleDto, RemoveStatus, ToggleStatus,
};
