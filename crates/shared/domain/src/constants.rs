//! Domain-level constants.
//!
//! These constants define publishing states, query defaults and the
//! default values of a freshly materialized settings record.

// =============================================================================
// Publishing
// =============================================================================

/// Status of content visible on the public site
pub const STATUS_PUBLISHED: &str = "published";

/// Status of content still being edited
pub const STATUS_DRAFT: &str = "draft";

/// All known content status values
pub const CONTENT_STATUSES: &[&str] = &[STATUS_PUBLISHED, STATUS_DRAFT];

/// Check if a content status value is known
pub fn is_valid_status(status: &str) -> bool {
    CONTENT_STATUSES.contains(&status)
}

// =============================================================================
// Inbox
// =============================================================================

/// Status given to a freshly submitted contact message
pub const MESSAGE_STATUS_NEW: &str = "new";

/// Status of a message that has been answered
pub const MESSAGE_STATUS_REPLIED: &str = "replied";

/// Status of a message moved out of the inbox
pub const MESSAGE_STATUS_ARCHIVED: &str = "archived";

// =============================================================================
// Query defaults
// =============================================================================

/// Column used for default ordering
pub const DEFAULT_ORDER_COLUMN: &str = "created_at";

/// Number of featured projects shown on the landing page
pub const DEFAULT_FEATURED_LIMIT: u64 = 6;

/// Number of rows returned by "recent" queries
pub const DEFAULT_RECENT_LIMIT: u64 = 10;

// =============================================================================
// Analytics
// =============================================================================

/// Trailing window, in days, used by analytics aggregates
pub const DEFAULT_ANALYTICS_WINDOW_DAYS: i64 = 30;

/// Number of rows in the top pages ranking
pub const DEFAULT_TOP_PAGES_LIMIT: u64 = 10;

/// Device label for phones and tablets
pub const DEVICE_MOBILE: &str = "mobile";

/// Device label for everything else
pub const DEVICE_DESKTOP: &str = "desktop";

/// Label used when no browser or OS signature matches
pub const LABEL_OTHER: &str = "Other";

/// Visitor identifier recorded when the caller has no address
pub const UNKNOWN_VISITOR_IP: &str = "0.0.0.0";

// =============================================================================
// Settings defaults
// =============================================================================

/// Default display theme
pub const DEFAULT_THEME: &str = "light";

/// Default interface language
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default timezone
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Default date format
pub const DEFAULT_DATE_FORMAT: &str = "Y-m-d";

/// Default admin list page size
pub const DEFAULT_ITEMS_PER_PAGE: i32 = 10;

/// Default idle session timeout in minutes
pub const DEFAULT_SESSION_TIMEOUT_MINUTES: i32 = 120;
