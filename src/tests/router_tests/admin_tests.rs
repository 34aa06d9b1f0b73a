use super::{assert_redirects_to, body_of, get, post_form};
use crate::domain::{Priority, Status};
use crate::errors::ServerError;
use crate::tests::utils::{complaint, scripted_state, Op};

#[test]
fn first_admin_visit_loads_once() {
    let (store, state) = scripted_state();

    let body = body_of(get("/admin", &state).expect("handler failed"));
    assert!(body.contains("Billing issue"));
    assert!(body.contains("Late delivery"));
    assert!(body.contains("ada@example.com"));
    assert!(!body.contains("Use Refresh to try again."));

    get("/admin", &state).expect("handler failed");
    assert_eq!(store.calls(), vec![Op::List]);
}

#[test]
fn failed_load_shows_error_notice_and_empty_state() {
    let (store, state) = scripted_state();
    store.fail_on(Op::List);

    let body = body_of(get("/admin", &state).expect("handler failed"));
    assert!(body.contains("Failed to load complaints"));
    assert!(body.contains("Use Refresh to try again."));
    assert!(!body.contains("No complaints have been submitted yet."));

    // Notices are shown once.
    let body = body_of(get("/admin", &state).expect("handler failed"));
    assert!(!body.contains("Failed to load complaints"));
}

#[test]
fn query_filters_narrow_the_list_and_persist() {
    let (_store, state) = scripted_state();

    let body = body_of(get("/admin?status=Resolved&priority=all&q=", &state).expect("handler failed"));
    assert!(body.contains("Late delivery"));
    assert!(!body.contains("Billing issue"));

    let body = body_of(get("/admin", &state).expect("handler failed"));
    assert!(!body.contains("Billing issue"), "filters survive a bare visit");
}

#[test]
fn fragment_returns_only_the_list() {
    let (store, state) = scripted_state();
    get("/admin", &state).expect("handler failed");

    let resp = get("/admin/complaints?status=all&priority=all&q=CHARGED", &state)
        .expect("handler failed");
    assert_eq!(
        resp.headers().get("Cache-Control").unwrap().to_str().unwrap(),
        "no-store"
    );

    let body = body_of(resp);
    assert!(!body.contains("<html"));
    assert!(body.contains("Billing issue"));
    assert!(!body.contains("Late delivery"));
    assert_eq!(store.calls(), vec![Op::List], "filtering stays local");
}

#[test]
fn no_matches_suggests_adjusting_filters() {
    let (_store, state) = scripted_state();
    get("/admin", &state).expect("handler failed");

    let body = body_of(get("/admin/complaints?q=nothing+like+this", &state).expect("handler failed"));
    assert!(body.contains("No complaints found"));
    assert!(body.contains("Try adjusting your filters or search terms."));
}

#[test]
fn status_change_updates_store_and_cache() {
    let (store, state) = scripted_state();
    get("/admin", &state).expect("handler failed");

    let resp = post_form("/admin/complaints/1/status", "status=In+Progress", &state)
        .expect("handler failed");
    assert_redirects_to(&resp, "/admin");
    assert_eq!(store.rows()[0].status, Status::InProgress);

    let list = state.list().unwrap();
    assert_eq!(list.cache()[0].status, Status::InProgress);
    assert_eq!(list.cache()[1].status, Status::Resolved);
    drop(list);

    let body = body_of(get("/admin", &state).expect("handler failed"));
    assert!(body.contains("Complaint status changed to In Progress"));
}

#[test]
fn failed_status_change_keeps_cache() {
    let (store, state) = scripted_state();
    get("/admin", &state).expect("handler failed");
    store.fail_on(Op::Update);

    let resp = post_form("/admin/complaints/1/status", "status=Resolved", &state)
        .expect("handler failed");
    assert_redirects_to(&resp, "/admin");
    assert_eq!(state.list().unwrap().cache()[0].status, Status::Pending);

    let body = body_of(get("/admin", &state).expect("handler failed"));
    assert!(body.contains("Update Failed"));
}

#[test]
fn unknown_status_is_a_bad_request() {
    let (store, state) = scripted_state();

    let err = post_form("/admin/complaints/1/status", "status=Closed", &state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
    assert!(!store.calls().contains(&Op::Update));
}

#[test]
fn delete_without_confirmation_asks_first() {
    let (store, state) = scripted_state();
    get("/admin", &state).expect("handler failed");

    let resp = post_form("/admin/complaints/2/delete", "confirmed=", &state).expect("handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_of(resp);
    assert!(body.contains("Delete complaint?"));
    assert!(body.contains("Late delivery"));
    assert!(!store.calls().contains(&Op::Delete));
}

#[test]
fn confirmed_delete_removes_one_row() {
    let (store, state) = scripted_state();
    get("/admin", &state).expect("handler failed");

    let resp = post_form("/admin/complaints/2/delete", "confirmed=yes", &state)
        .expect("handler failed");
    assert_redirects_to(&resp, "/admin");

    assert_eq!(store.rows().len(), 1);
    let ids: Vec<_> = state
        .list()
        .unwrap()
        .cache()
        .iter()
        .map(|c| c.id.to_string())
        .collect();
    assert_eq!(ids, vec!["1"]);

    let body = body_of(get("/admin", &state).expect("handler failed"));
    assert!(body.contains("Complaint Deleted"));
    assert!(!body.contains("Late delivery"));
}

#[test]
fn failed_delete_keeps_the_row() {
    let (store, state) = scripted_state();
    get("/admin", &state).expect("handler failed");
    store.fail_on(Op::Delete);

    post_form("/admin/complaints/2/delete", "confirmed=yes", &state).expect("handler failed");

    assert_eq!(state.list().unwrap().cache().len(), 2);
    let body = body_of(get("/admin", &state).expect("handler failed"));
    assert!(body.contains("Delete Failed"));
    assert!(body.contains("Late delivery"));
}

#[test]
fn refresh_reloads_from_the_store() {
    let (store, state) = scripted_state();
    get("/admin", &state).expect("handler failed");

    store.push_row(complaint("3", Status::Pending, Priority::Medium, "Rude agent"));
    let resp = post_form("/admin/refresh", "", &state).expect("handler failed");
    assert_redirects_to(&resp, "/admin");

    let body = body_of(get("/admin", &state).expect("handler failed"));
    assert!(body.contains("Rude agent"));
    assert_eq!(store.calls(), vec![Op::List, Op::List]);
}

#[test]
fn unknown_routes_are_not_found() {
    let (_store, state) = scripted_state();

    let err = get("/admin/users", &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
    assert_eq!(err.status(), 404);
}

#[test]
fn stylesheet_is_served() {
    let (_store, state) = scripted_state();

    let resp = get("/static/main.css", &state).expect("handler failed");
    assert_eq!(resp.status(), 200);
    assert!(body_of(resp).contains(".toast"));
}

#[test]
fn admin_failures_are_not_consumed_by_public_pages() {
    let (store, state) = scripted_state();
    get("/admin", &state).expect("handler failed");
    store.fail_on(Op::Update);

    post_form("/admin/complaints/1/status", "status=Resolved", &state).expect("handler failed");

    let public = body_of(get("/", &state).expect("handler failed"));
    assert!(!public.contains("Update Failed"));
    let public = body_of(
        post_form("/complaints", "title=x&category=&description=", &state)
            .expect("handler failed"),
    );
    assert!(!public.contains("Update Failed"));

    let admin = body_of(get("/admin", &state).expect("handler failed"));
    assert!(admin.contains("Update Failed"));
}

#[test]
fn fragment_before_any_visit_loads_the_list() {
    let (store, state) = scripted_state();

    let body = body_of(get("/admin/complaints?q=", &state).expect("handler failed"));
    assert!(body.contains("Billing issue"));
    assert!(body.contains("Late delivery"));

    get("/admin/complaints?q=late", &state).expect("handler failed");
    assert_eq!(store.calls(), vec![Op::List]);
}

#[test]
fn fragment_after_failed_load_does_not_claim_an_empty_table() {
    let (store, state) = scripted_state();
    store.fail_on(Op::List);

    let body = body_of(get("/admin/complaints", &state).expect("handler failed"));
    assert!(body.contains("Use Refresh to try again."));
    assert!(!body.contains("No complaints have been submitted yet."));

    let page = body_of(get("/admin", &state).expect("handler failed"));
    assert!(page.contains("Failed to load complaints"));
}

#[test]
fn ids_with_reserved_characters_round_trip_through_actions() {
    let (store, state) = scripted_state();
    store.push_row(complaint("a/b c", Status::Pending, Priority::Low, "Odd id"));

    let body = body_of(get("/admin", &state).expect("handler failed"));
    assert!(body.contains(r#"action="/admin/complaints/a%2Fb%20c/status""#));
    assert!(body.contains(r#"action="/admin/complaints/a%2Fb%20c/delete""#));

    let resp = post_form("/admin/complaints/a%2Fb%20c/status", "status=Resolved", &state)
        .expect("handler failed");
    assert_redirects_to(&resp, "/admin");
    assert_eq!(store.rows()[0].status, Status::Resolved);

    let confirm = body_of(get("/admin/complaints/a%2Fb%20c/delete", &state).expect("handler failed"));
    assert!(confirm.contains("Odd id"));
    assert!(confirm.contains(r#"action="/admin/complaints/a%2Fb%20c/delete""#));
}
