use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Accepted payment method labels. No gateway is called; the label is
/// stored on the purchase record as-is.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum PaymentMethod {
    Upi,
    Paytm,
    Phonepe,
    Card,
}
