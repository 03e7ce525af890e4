mod support;

use chrono::Utc;

use content_service_lib::repository::{AnalyticsRepository, AnalyticsStore, ReadRepository};
use domain::{
    CountEntry, NewVisit, VisitContext, DEFAULT_ANALYTICS_WINDOW_DAYS, DEVICE_DESKTOP,
    DEVICE_MOBILE, UNKNOWN_VISITOR_IP,
};
use support::{days_ago, setup};

const ANDROID_CHROME: &str = "Mozilla/5.0 (Android 13; Mobile) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/100.0.4896.127 Mobile Safari/537.36";
const WINDOWS_FIREFOX: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:120.0) Gecko/20100101 Firefox/120.0";

fn context(ip: &str, url: &str) -> VisitContext {
    VisitContext {
        ip: Some(ip.to_string()),
        user_agent: Some(WINDOWS_FIREFOX.to_string()),
        url: url.to_string(),
        referrer: None,
    }
}

/// Visit from `ip` to `url`, `age` days ago
async fn visit(store: &AnalyticsStore, ip: &str, url: &str, age: i64) {
    let data = NewVisit {
        visited_at: Some(days_ago(age)),
        ..Default::default()
    };
    store.track_visit(context(ip, url), data).await.unwrap();
}

fn entry(label: &str, count: i64) -> CountEntry {
    CountEntry {
        label: label.to_string(),
        count,
    }
}

#[tokio::test]
async fn test_track_visit_classifies_android_chrome() {
    let store = AnalyticsStore::new(setup().await);
    let data = NewVisit {
        user_agent: Some(ANDROID_CHROME.to_string()),
        ..Default::default()
    };

    let event = store
        .track_visit(context("203.0.113.9", "/work"), data)
        .await
        .unwrap();

    assert_eq!(event.device_type, DEVICE_MOBILE);
    assert_eq!(event.browser, "Chrome");
    assert_eq!(event.os, "Android");
    assert_eq!(event.user_agent.as_deref(), Some(ANDROID_CHROME));
}

#[tokio::test]
async fn test_track_visit_falls_back_to_context() {
    let store = AnalyticsStore::new(setup().await);

    let before = Utc::now();
    let event = store
        .track_visit(context("198.51.100.4", "/contact"), NewVisit::default())
        .await
        .unwrap();

    assert_eq!(event.visitor_ip, "198.51.100.4");
    assert_eq!(event.page_url, "/contact");
    assert_eq!(event.device_type, DEVICE_DESKTOP);
    assert_eq!(event.browser, "Firefox");
    assert_eq!(event.os, "Windows");
    assert!(event.visited_at >= before);

    let anonymous = VisitContext {
        url: "/".to_string(),
        ..Default::default()
    };
    let event = store
        .track_visit(anonymous, NewVisit::default())
        .await
        .unwrap();
    assert_eq!(event.visitor_ip, UNKNOWN_VISITOR_IP);
    assert_eq!(event.browser, "Other");
    assert_eq!(store.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_visitors_count_is_distinct_and_monotonic() {
    let store = AnalyticsStore::new(setup().await);
    visit(&store, "10.0.0.1", "/", 0).await;
    visit(&store, "10.0.0.1", "/about", 0).await;
    visit(&store, "10.0.0.2", "/", 2).await;
    visit(&store, "10.0.0.3", "/", 20).await;
    visit(&store, "10.0.0.4", "/", 60).await;

    assert_eq!(store.get_visitors_count(1).await.unwrap(), 1);
    assert_eq!(store.get_visitors_count(7).await.unwrap(), 2);
    assert_eq!(
        store
            .get_visitors_count(DEFAULT_ANALYTICS_WINDOW_DAYS)
            .await
            .unwrap(),
        3
    );
    assert_eq!(store.get_visitors_count(90).await.unwrap(), 4);

    let mut previous = 0;
    for days in [0, 1, 3, 7, 30, 90, 365] {
        let count = store.get_visitors_count(days).await.unwrap();
        assert!(count >= previous, "window {} shrank the count", days);
        previous = count;
    }
}

#[tokio::test]
async fn test_page_views_count_every_event_in_window() {
    let store = AnalyticsStore::new(setup().await);
    visit(&store, "10.0.0.1", "/", 0).await;
    visit(&store, "10.0.0.1", "/", 0).await;
    visit(&store, "10.0.0.2", "/", 45).await;

    assert_eq!(store.get_page_views(30).await.unwrap(), 2);
    assert_eq!(store.get_page_views(60).await.unwrap(), 3);
}

#[tokio::test]
async fn test_top_pages_rank_by_views_within_window() {
    let store = AnalyticsStore::new(setup().await);
    for _ in 0..3 {
        visit(&store, "10.0.0.1", "/work", 1).await;
    }
    visit(&store, "10.0.0.2", "/about", 1).await;
    visit(&store, "10.0.0.2", "/blog", 1).await;
    for _ in 0..5 {
        visit(&store, "10.0.0.3", "/old", 40).await;
    }

    let top = store.get_top_pages(2, 30).await.unwrap();
    assert_eq!(top, vec![entry("/work", 3), entry("/about", 1)]);

    let wide = store.get_top_pages(1, 60).await.unwrap();
    assert_eq!(wide, vec![entry("/old", 5)]);
}

#[tokio::test]
async fn test_visitors_by_date_is_ascending_and_distinct_per_day() {
    let store = AnalyticsStore::new(setup().await);
    visit(&store, "10.0.0.1", "/", 2).await;
    visit(&store, "10.0.0.1", "/about", 2).await;
    visit(&store, "10.0.0.2", "/", 2).await;
    visit(&store, "10.0.0.1", "/", 0).await;

    let series = store.get_visitors_by_date(7).await.unwrap();
    assert_eq!(series.len(), 2);
    assert!(series[0].date < series[1].date);
    assert_eq!(series[0].date, days_ago(2).date_naive());
    assert_eq!(series[0].count, 2);
    assert_eq!(series[1].count, 1);
}

#[tokio::test]
async fn test_breakdowns_group_by_classification() {
    let store = AnalyticsStore::new(setup().await);
    visit(&store, "10.0.0.1", "/", 0).await;
    visit(&store, "10.0.0.2", "/", 0).await;
    store
        .track_visit(
            context("10.0.0.3", "/"),
            NewVisit {
                user_agent: Some(ANDROID_CHROME.to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let devices = store.get_device_stats(30).await.unwrap();
    assert_eq!(
        devices,
        vec![entry(DEVICE_DESKTOP, 2), entry(DEVICE_MOBILE, 1)]
    );

    let browsers = store.get_browser_stats(30).await.unwrap();
    assert_eq!(browsers, vec![entry("Firefox", 2), entry("Chrome", 1)]);

    let systems = store.get_os_stats(30).await.unwrap();
    assert_eq!(systems, vec![entry("Windows", 2), entry("Android", 1)]);
}

#[tokio::test]
async fn test_huge_window_covers_every_visit() {
    let store = AnalyticsStore::new(setup().await);
    visit(&store, "10.0.0.1", "/", 0).await;
    visit(&store, "10.0.0.2", "/about", 400).await;

    for days in [1_000_000_000, i64::MAX] {
        assert_eq!(store.get_visitors_count(days).await.unwrap(), 2);
        assert_eq!(store.get_page_views(days).await.unwrap(), 2);
        assert_eq!(store.get_top_pages(5, days).await.unwrap().len(), 2);
        assert_eq!(store.get_visitors_by_date(days).await.unwrap().len(), 2);
        assert_eq!(store.get_device_stats(days).await.unwrap().len(), 1);
    }
}
