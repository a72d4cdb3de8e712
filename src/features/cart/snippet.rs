//! Server-rendered HTML fragment for the header cart widget.

use std::sync::OnceLock;

use minijinja::{context, Environment};

use crate::core::error::{AppError, Result};
use crate::features::cart::dtos::CartViewDto;

static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.add_template(
            "cart_snippet",
            include_str!("../../../templates/cart_snippet.html"),
        )
        .expect("cart snippet template is valid");
        env
    })
}

pub fn render_cart_snippet(view: &CartViewDto) -> Result<String> {
    let tmpl = environment()
        .get_template("cart_snippet")
        .map_err(|e| AppError::Internal(format!("Cart snippet template missing: {}", e)))?;

    tmpl.render(context! { items => view.items, total => view.total })
        .map_err(|e| AppError::Internal(format!("Failed to render cart snippet: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::cart::dtos::CartLineDto;
    use chrono::Utc;

    #[test]
    fn test_render_empty_cart() {
        let view = CartViewDto {
            items: vec![],
            total: 0.0,
        };

        let html = render_cart_snippet(&view).unwrap();
        assert!(html.contains("Your cart is empty"));
    }

    #[test]
    fn test_render_cart_lines() {
        let view = CartViewDto {
            items: vec![CartLineDto {
                id: 1,
                course_id: 7,
                course_title: "Rust Fundamentals".to_string(),
                price: 29.0,
                added_at: Utc::now(),
            }],
            total: 29.0,
        };

        let html = render_cart_snippet(&view).unwrap();
        assert!(html.contains("Rust Fundamentals"));
        assert!(html.contains("29"));
    }
}
