//! Generic repository behavior, exercised through the content stores.

mod support;

use sea_orm::{DbErr, Set};
use tokio_test::assert_ok;

use common::{AppError, PaginationParams};
use content_service_lib::repository::entities::{blog_post, project, service, team_member};
use content_service_lib::repository::relations::{CLIENT, PROJECTS, TESTIMONIALS};
use content_service_lib::repository::{
    BlogPostStore, ClientStore, Criteria, DeleteRepository, ProjectStore, QueryOptions,
    ReadRepository, ServiceStore, TeamMemberStore, TestimonialStore, WriteRepository,
};
use support::{new_client, new_project, new_testimonial, setup};

#[tokio::test]
async fn test_create_then_find_round_trip() {
    let store = ProjectStore::new(setup().await);

    let created = assert_ok!(store.create(new_project("Harbor Portal", true)).await);
    let found = store
        .find(created.id, &QueryOptions::default())
        .await
        .unwrap()
        .expect("stored project");

    assert_eq!(found, created);
    assert_eq!(found.title, "Harbor Portal");
    assert_eq!(found.description, "About Harbor Portal");
    assert_eq!(found.technologies, "Rust, PostgreSQL");
    assert_eq!(found.slug, "harbor-portal");
    assert!(found.created_at <= found.updated_at);
}

#[tokio::test]
async fn test_find_missing_is_none() {
    let store = ProjectStore::new(setup().await);
    let found = store.find(42, &QueryOptions::default()).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_update_missing_returns_false_without_writing() {
    let store = ProjectStore::new(setup().await);
    store.create(new_project("Existing", true)).await.unwrap();

    let changes = project::ActiveModel {
        title: Set("Ghost".to_string()),
        ..Default::default()
    };
    assert!(!store.update(999, changes).await.unwrap());

    let all = store.all(&QueryOptions::default()).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "Existing");
}

#[tokio::test]
async fn test_update_merges_supplied_fields_only() {
    let store = ProjectStore::new(setup().await);
    let created = store.create(new_project("Atlas", false)).await.unwrap();

    let changes = project::ActiveModel {
        title: Set("Atlas v2".to_string()),
        featured: Set(true),
        ..Default::default()
    };
    assert!(store.update(created.id, changes).await.unwrap());

    let updated = store
        .find(created.id, &QueryOptions::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "Atlas v2");
    assert!(updated.featured);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.status, created.status);
    // Slugs are only derived on insert
    assert_eq!(updated.slug, "atlas");
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn test_empty_update_is_a_successful_noop() {
    let store = ProjectStore::new(setup().await);
    let created = store.create(new_project("Still", true)).await.unwrap();

    assert!(store
        .update(created.id, project::ActiveModel::default())
        .await
        .unwrap());

    let after = store
        .find(created.id, &QueryOptions::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after, created);
}

#[tokio::test]
async fn test_delete_reports_whether_a_row_went_away() {
    let store = ProjectStore::new(setup().await);
    let created = store.create(new_project("Doomed", true)).await.unwrap();

    assert!(store.delete(created.id).await.unwrap());
    assert!(!store.delete(created.id).await.unwrap());
    assert!(store
        .find(created.id, &QueryOptions::default())
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_duplicate_slug_propagates_unique_violation() {
    let store = ProjectStore::new(setup().await);
    store.create(new_project("Twin", true)).await.unwrap();

    let err = store.create(new_project("Twin", true)).await.unwrap_err();
    assert!(matches!(err, AppError::Database(_)));
    assert!(err.is_unique_violation());
}

#[tokio::test]
async fn test_paginate_reports_totals() {
    let store = ProjectStore::new(setup().await);
    for title in ["A", "B", "C", "D", "E"] {
        store.create(new_project(title, true)).await.unwrap();
    }

    let options = QueryOptions::new().oldest("title");
    let page = store
        .paginate(&PaginationParams::new(3, 2), &options)
        .await
        .unwrap();

    assert_eq!(page.meta.total, 5);
    assert_eq!(page.meta.total_pages, 3);
    assert_eq!(page.meta.page, 3);
    assert_eq!(page.meta.per_page, 2);
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].title, "E");
}

#[tokio::test]
async fn test_ordering_is_per_call() {
    let store = ProjectStore::new(setup().await);
    for title in ["Beta", "Alpha", "Gamma"] {
        store.create(new_project(title, true)).await.unwrap();
    }

    let ascending = store
        .all(&QueryOptions::new().oldest("title"))
        .await
        .unwrap();
    let descending = store
        .all(&QueryOptions::new().latest("title"))
        .await
        .unwrap();

    let titles = |records: &[domain::Project]| {
        records.iter().map(|p| p.title.clone()).collect::<Vec<_>>()
    };
    assert_eq!(titles(&ascending), ["Alpha", "Beta", "Gamma"]);
    assert_eq!(titles(&descending), ["Gamma", "Beta", "Alpha"]);
}

#[tokio::test]
async fn test_unknown_order_column_is_a_datastore_error() {
    let store = ProjectStore::new(setup().await);
    let result = store.all(&QueryOptions::new().latest("popularity")).await;
    assert!(matches!(result, Err(AppError::Database(DbErr::Custom(_)))));
}

#[tokio::test]
async fn test_find_where_combines_equality_and_membership() {
    let store = ProjectStore::new(setup().await);
    store.create(new_project("One", true)).await.unwrap();
    store.create(new_project("Two", false)).await.unwrap();
    store.create(new_project("Three", true)).await.unwrap();

    let criteria = Criteria::new()
        .where_eq("status", "published")
        .where_in("title", ["One", "Two"]);
    let found = store
        .find_where(&criteria, &QueryOptions::default())
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "One");
}

#[tokio::test]
async fn test_find_by_returns_first_match() {
    let store = ProjectStore::new(setup().await);
    store.create(new_project("Zeta", true)).await.unwrap();
    store.create(new_project("Eta", true)).await.unwrap();

    let first = store
        .find_by("category", "web".into(), &QueryOptions::new().oldest("title"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first.title, "Eta");

    let none = store
        .find_by("slug", "missing".into(), &QueryOptions::default())
        .await
        .unwrap();
    assert!(none.is_none());
}

#[tokio::test]
async fn test_eager_loads_project_client() {
    let db = setup().await;
    let clients = ClientStore::new(db.clone());
    let projects = ProjectStore::new(db);

    let acme = clients.create(new_client("Acme")).await.unwrap();
    let mut attributes = new_project("Rebrand", true);
    attributes.client_id = Set(Some(acme.id));
    let created = projects.create(attributes).await.unwrap();
    projects.create(new_project("Solo", true)).await.unwrap();

    let plain = projects
        .find(created.id, &QueryOptions::default())
        .await
        .unwrap()
        .unwrap();
    assert!(plain.client.is_none());

    let loaded = projects
        .all(&QueryOptions::new().with([CLIENT]).oldest("title"))
        .await
        .unwrap();
    assert_eq!(loaded[0].client.as_ref().map(|c| c.name.as_str()), Some("Acme"));
    assert!(loaded[1].client.is_none());
}

#[tokio::test]
async fn test_unknown_relation_is_rejected() {
    let store = ProjectStore::new(setup().await);
    store.create(new_project("Any", true)).await.unwrap();

    let result = store.all(&QueryOptions::new().with(["author"])).await;
    match result {
        Err(AppError::Database(DbErr::Custom(msg))) => assert!(msg.contains("[author]")),
        other => panic!("expected undefined relation, got {:?}", other),
    }
}

#[tokio::test]
async fn test_client_loads_projects_and_testimonials() {
    let db = setup().await;
    let clients = ClientStore::new(db.clone());
    let projects = ProjectStore::new(db.clone());
    let testimonials = TestimonialStore::new(db);

    let acme = clients.create(new_client("Acme")).await.unwrap();
    let other = clients.create(new_client("Globex")).await.unwrap();

    let mut attributes = new_project("Storefront", true);
    attributes.client_id = Set(Some(acme.id));
    projects.create(attributes).await.unwrap();
    testimonials
        .create(new_testimonial("Wile E.", Some(acme.id)))
        .await
        .unwrap();

    let options = QueryOptions::new().with([PROJECTS, TESTIMONIALS]);
    let loaded = clients.find(acme.id, &options).await.unwrap().unwrap();
    assert_eq!(loaded.projects.len(), 1);
    assert_eq!(loaded.projects[0].title, "Storefront");
    assert_eq!(loaded.testimonials.len(), 1);

    let empty = clients.find(other.id, &options).await.unwrap().unwrap();
    assert!(empty.projects.is_empty());
    assert!(empty.testimonials.is_empty());

    let with_client = testimonials
        .all(&QueryOptions::new().with([CLIENT]))
        .await
        .unwrap();
    assert_eq!(with_client[0].client.as_ref().map(|c| c.id), Some(acme.id));
}

#[tokio::test]
async fn test_simple_stores_derive_slugs() {
    let db = setup().await;

    let post = BlogPostStore::new(db.clone())
        .create(blog_post::ActiveModel {
            title: Set("Shipping Rust in Production".to_string()),
            content: Set("...".to_string()),
            status: Set("draft".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(post.slug, "shipping-rust-in-production");

    let offering = ServiceStore::new(db.clone())
        .create(service::ActiveModel {
            title: Set("Web Apps".to_string()),
            description: Set("Full stack builds".to_string()),
            sort_order: Set(1),
            is_active: Set(true),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(offering.slug, "web-apps");

    let members = TeamMemberStore::new(db);
    let member = members
        .create(team_member::ActiveModel {
            name: Set("Ada Lovelace".to_string()),
            position: Set("Engineer".to_string()),
            sort_order: Set(0),
            is_active: Set(true),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(member.slug, "ada-lovelace");
    assert_eq!(members.count().await.unwrap(), 1);
}
