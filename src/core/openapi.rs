use utoipa::{Modify, OpenApi};

use crate::core::session::{Notice, NoticeLevel, ReopenModal, SessionAccount};
use crate::features::accounts::{dtos as accounts_dtos, handlers as accounts_handlers};
use crate::features::admin::{dtos as admin_dtos, handlers as admin_handlers};
use crate::features::cart::{dtos as cart_dtos, handlers as cart_handlers};
use crate::features::catalog::{
    dtos as catalog_dtos, handlers as catalog_handlers, models as catalog_models,
};
use crate::features::checkout::{
    dtos as checkout_dtos, handlers as checkout_handlers, models as checkout_models,
};
use crate::features::contact::{dtos as contact_dtos, handlers as contact_handlers};
use crate::features::favorites::{dtos as favorites_dtos, handlers as favorites_handlers};
use crate::features::newsletter::{dtos as newsletter_dtos, handlers as newsletter_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Accounts
        accounts_handlers::register,
        accounts_handlers::login,
        accounts_handlers::logout,
        accounts_handlers::verify_admin,
        accounts_handlers::me,
        accounts_handlers::session_state,
        accounts_handlers::get_profile,
        accounts_handlers::update_profile,
        // Catalog (public)
        catalog_handlers::home,
        catalog_handlers::list_courses,
        catalog_handlers::get_course,
        catalog_handlers::list_instructors,
        catalog_handlers::get_instructor,
        catalog_handlers::search_suggestions,
        catalog_handlers::search_redirect,
        // Cart
        cart_handlers::add_to_cart,
        cart_handlers::view_cart,
        cart_handlers::remove_from_cart,
        cart_handlers::cart_snippet,
        // Favorites
        favorites_handlers::toggle_favorite,
        favorites_handlers::list_favorites,
        favorites_handlers::remove_favorite,
        // Checkout
        checkout_handlers::checkout_preview,
        checkout_handlers::place_checkout,
        checkout_handlers::checkout_history,
        checkout_handlers::payment_success,
        checkout_handlers::payment_failed,
        // Contact (public)
        contact_handlers::create_contact_message,
        contact_handlers::about,
        // Newsletter (public)
        newsletter_handlers::subscribe,
        // Admin
        admin_handlers::create_course,
        admin_handlers::update_course,
        admin_handlers::delete_course,
        admin_handlers::create_instructor,
        admin_handlers::delete_instructor,
        admin_handlers::list_messages,
        admin_handlers::list_subscribers,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Session
            SessionAccount,
            Notice,
            NoticeLevel,
            ReopenModal,
            // Accounts
            accounts_dtos::RegisterRequestDto,
            accounts_dtos::LoginRequestDto,
            accounts_dtos::VerifyAdminRequestDto,
            accounts_dtos::UpdateProfileRequestDto,
            accounts_dtos::ProfileResponseDto,
            accounts_dtos::LoginResponseDto,
            accounts_dtos::SessionStateDto,
            ApiResponse<accounts_dtos::ProfileResponseDto>,
            ApiResponse<accounts_dtos::LoginResponseDto>,
            ApiResponse<accounts_dtos::SessionStateDto>,
            ApiResponse<SessionAccount>,
            // Catalog
            catalog_models::Category,
            catalog_models::Subcategory,
            catalog_dtos::CourseResponseDto,
            catalog_dtos::InstructorResponseDto,
            catalog_dtos::HomeDto,
            catalog_dtos::SearchSuggestionDto,
            ApiResponse<catalog_dtos::HomeDto>,
            ApiResponse<Vec<catalog_dtos::CourseResponseDto>>,
            ApiResponse<catalog_dtos::CourseResponseDto>,
            ApiResponse<Vec<catalog_dtos::InstructorResponseDto>>,
            ApiResponse<catalog_dtos::InstructorResponseDto>,
            ApiResponse<Vec<catalog_dtos::SearchSuggestionDto>>,
            // Cart
            cart_dtos::CartLineDto,
            cart_dtos::CartViewDto,
            cart_dtos::CartAddResponseDto,
            cart_dtos::CartMutationDto,
            cart_dtos::CartSnippetDto,
            ApiResponse<cart_dtos::CartViewDto>,
            ApiResponse<cart_dtos::CartAddResponseDto>,
            ApiResponse<cart_dtos::CartMutationDto>,
            ApiResponse<cart_dtos::CartSnippetDto>,
            // Favorites
            favorites_dtos::FavoriteDto,
            favorites_dtos::ToggleStatus,
            favorites_dtos::FavoriteToggleDto,
            favorites_dtos::RemoveStatus,
            favorites_dtos::FavoriteRemoveDto,
            ApiResponse<Vec<favorites_dtos::FavoriteDto>>,
            ApiResponse<favorites_dtos::FavoriteToggleDto>,
            ApiResponse<favorites_dtos::FavoriteRemoveDto>,
            // Checkout
            checkout_models::PaymentMethod,
            checkout_dtos::CheckoutRequestDto,
            checkout_dtos::CheckoutPreviewDto,
            checkout_dtos::CheckoutResultDto,
            checkout_dtos::CheckoutRecordDto,
            checkout_dtos::PaymentPageDto,
            ApiResponse<checkout_dtos::CheckoutPreviewDto>,
            ApiResponse<checkout_dtos::CheckoutResultDto>,
            ApiResponse<Vec<checkout_dtos::CheckoutRecordDto>>,
            ApiResponse<checkout_dtos::PaymentPageDto>,
            // Contact
            contact_dtos::CreateContactMessageDto,
            contact_dtos::ContactMessageResponseDto,
            contact_dtos::AboutDto,
            ApiResponse<contact_dtos::ContactMessageResponseDto>,
            ApiResponse<contact_dtos::AboutDto>,
            ApiResponse<Vec<contact_dtos::ContactMessageResponseDto>>,
            // Newsletter
            newsletter_dtos::SubscribeRequestDto,
            newsletter_dtos::SubscribeResponseDto,
            newsletter_dtos::SubscriberResponseDto,
            ApiResponse<newsletter_dtos::SubscribeResponseDto>,
            ApiResponse<Vec<newsletter_dtos::SubscriberResponseDto>>,
            // Admin
            admin_dtos::CourseInputDto,
            admin_dtos::InstructorInputDto,
        )
    ),
    tags(
        (name = "accounts", description = "Registration, login and profiles"),
        (name = "catalog", description = "Course and instructor browsing"),
        (name = "cart", description = "Shopping cart"),
        (name = "favorites", description = "Favorite courses"),
        (name = "checkout", description = "Checkout and purchase history"),
        (name = "contact", description = "Contact form and about page"),
        (name = "newsletter", description = "Newsletter subscriptions"),
        (name = "admin", description = "Catalog management (verified admins)"),
    )
)]
pub struct ApiDoc;

/// Applies the configured title/version/description to the generated doc
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
