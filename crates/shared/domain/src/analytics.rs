//! Page visit events, visitor classification and aggregate rows.

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{DEVICE_DESKTOP, DEVICE_MOBILE, LABEL_OTHER, UNKNOWN_VISITOR_IP};

static MOBILE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)mobile|android|iphone|ipad|ipod|tablet|blackberry|opera mini|iemobile")
        .expect("valid mobile pattern")
});

/// Browser signatures, tested in order. First match wins.
static BROWSER_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)chrome", "Chrome"),
        (r"(?i)firefox", "Firefox"),
        (r"(?i)safari", "Safari"),
        (r"(?i)edge?/", "Edge"),
    ]
    .into_iter()
    .map(|(pattern, label)| (Regex::new(pattern).expect("valid browser pattern"), label))
    .collect()
});

/// Operating system signatures, tested in order. First match wins.
static OS_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)windows", "Windows"),
        (r"(?i)macintosh", "macOS"),
        (r"(?i)linux", "Linux"),
        (r"(?i)android", "Android"),
        (r"(?i)iphone|ipad|ipod|ios", "iOS"),
    ]
    .into_iter()
    .map(|(pattern, label)| (Regex::new(pattern).expect("valid os pattern"), label))
    .collect()
});

fn first_match(patterns: &[(Regex, &'static str)], user_agent: &str) -> &'static str {
    patterns
        .iter()
        .find(|(pattern, _)| pattern.is_match(user_agent))
        .map(|(_, label)| *label)
        .unwrap_or(LABEL_OTHER)
}

/// "mobile" for phone/tablet user agents, "desktop" otherwise
pub fn classify_device(user_agent: &str) -> &'static str {
    if MOBILE_PATTERN.is_match(user_agent) {
        DEVICE_MOBILE
    } else {
        DEVICE_DESKTOP
    }
}

pub fn classify_browser(user_agent: &str) -> &'static str {
    first_match(&BROWSER_PATTERNS, user_agent)
}

pub fn classify_os(user_agent: &str) -> &'static str {
    first_match(&OS_PATTERNS, user_agent)
}

/// Immutable record of a single page visit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub id: i32,
    pub visitor_ip: String,
    pub user_agent: Option<String>,
    pub page_url: String,
    pub referrer: Option<String>,
    pub device_type: String,
    pub browser: String,
    pub os: String,
    pub country: Option<String>,
    pub city: Option<String>,
    pub visited_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Request data supplied by the caller when recording a visit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitContext {
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub url: String,
    pub referrer: Option<String>,
}

/// Partial visit data. Every `None` is derived from the context or
/// from the user agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewVisit {
    pub visitor_ip: Option<String>,
    pub user_agent: Option<String>,
    pub page_url: Option<String>,
    pub referrer: Option<String>,
    pub device_type: Option<String>,
    pub browser: Option<String>,
    pub os: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub visited_at: Option<DateTime<Utc>>,
}

/// Fully resolved visit, ready to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub visitor_ip: String,
    pub user_agent: Option<String>,
    pub page_url: String,
    pub referrer: Option<String>,
    pub device_type: String,
    pub browser: String,
    pub os: String,
    pub country: Option<String>,
    pub city: Option<String>,
    pub visited_at: DateTime<Utc>,
}

impl NewVisit {
    /// Fill omitted fields from `context`, then from user agent classification.
    pub fn resolve(self, context: VisitContext, now: DateTime<Utc>) -> Visit {
        let user_agent = self.user_agent.or(context.user_agent);
        let ua = user_agent.as_deref().unwrap_or_default();

        Visit {
            visitor_ip: self
                .visitor_ip
                .or(context.ip)
                .unwrap_or_else(|| UNKNOWN_VISITOR_IP.to_string()),
            page_url: self.page_url.unwrap_or(context.url),
            referrer: self.referrer.or(context.referrer),
            device_type: self
                .device_type
                .unwrap_or_else(|| classify_device(ua).to_string()),
            browser: self
                .browser
                .unwrap_or_else(|| classify_browser(ua).to_string()),
            os: self.os.unwrap_or_else(|| classify_os(ua).to_string()),
            country: self.country,
            city: self.city,
            visited_at: self.visited_at.unwrap_or(now),
            user_agent,
        }
    }
}

/// Label and count pair (top pages, device/browser/os breakdowns)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountEntry {
    pub label: String,
    pub count: i64,
}

/// Distinct visitors on one calendar day (UTC)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: i64,
}
