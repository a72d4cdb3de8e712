//! Typed session state.
//!
//! The session carries three independent pieces of state, each under its own
//! key: the logged-in account summary, a queue of one-shot notices drained on
//! the next page load, and an optional flag telling the client which auth
//! modal to reopen.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use utoipa::ToSchema;

use crate::core::error::Result;
use crate::shared::constants::{SESSION_ACCOUNT_KEY, SESSION_MODAL_KEY, SESSION_NOTICES_KEY};

/// Account summary stored in the session while a user is logged in.
///
/// `admin_verified` is true immediately for regular users; superusers start
/// unverified and must pass the admin-key step before it flips.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionAccount {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub is_superuser: bool,
    pub admin_verified: bool,
}

impl SessionAccount {
    pub fn is_verified_admin(&self) -> bool {
        self.is_superuser && self.admin_verified
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// One-shot notice shown to the user on the next page load.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Which auth modal the client should reopen after a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReopenModal {
    Login,
    Register,
}

/// Wrapper over the raw session exposing the typed state.
pub struct SessionState {
    session: Session,
}

impl SessionState {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub async fn account(&self) -> Result<Option<SessionAccount>> {
        Ok(self.session.get(SESSION_ACCOUNT_KEY).await?)
    }

    pub async fn set_account(&self, account: &SessionAccount) -> Result<()> {
        self.session.insert(SESSION_ACCOUNT_KEY, account).await?;
        Ok(())
    }

    /// Destroys the whole session (logout).
    pub async fn clear(&self) -> Result<()> {
        self.session.flush().await?;
        Ok(())
    }

    pub async fn push_notice(&self, notice: Notice) -> Result<()> {
        let mut notices: Vec<Notice> = self
            .session
            .get(SESSION_NOTICES_KEY)
            .await?
            .unwrap_or_default();
        notices.push(notice);
        self.session.insert(SESSION_NOTICES_KEY, &notices).await?;
        Ok(())
    }

    /// Drains the queued notices; each notice is returned exactly once.
    pub async fn take_notices(&self) -> Result<Vec<Notice>> {
        let notices: Option<Vec<Notice>> = self.session.remove(SESSION_NOTICES_KEY).await?;
        Ok(notices.unwrap_or_default())
    }

    pub async fn set_modal(&self, modal: ReopenModal) -> Result<()> {
        self.session.insert(SESSION_MODAL_KEY, modal).await?;
        Ok(())
    }

    pub async fn take_modal(&self) -> Result<Option<ReopenModal>> {
        Ok(self.session.remove(SESSION_MODAL_KEY).await?)
    }
}
