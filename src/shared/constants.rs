/// Default page size for paginated admin listings
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// How many courses the home payload carries
pub const HOME_COURSE_COUNT: i64 = 4;

/// How many instructors the home payload carries
pub const HOME_INSTRUCTOR_COUNT: i64 = 4;

// =============================================================================
// SESSION KEYS
// =============================================================================

/// Session key holding the logged-in account summary
pub const SESSION_ACCOUNT_KEY: &str = "account";

/// Session key holding the queued one-shot notices
pub const SESSION_NOTICES_KEY: &str = "notices";

/// Session key holding the reopen-modal flag
pub const SESSION_MODAL_KEY: &str = "open_modal";
