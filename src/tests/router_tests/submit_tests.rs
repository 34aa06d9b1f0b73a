use super::{body_of, get, post_form};
use crate::domain::{Category, Priority, Status};
use crate::tests::utils::{scripted_state, Op};

const VALID_FORM: &str = "title=Broken+charger&user_email=sam%40example.com\
    &category=Product&priority=High&description=Stopped+working+after+a+week";

#[test]
fn submit_page_renders_the_empty_form() {
    let (store, state) = scripted_state();

    let resp = get("/", &state).expect("handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_of(resp);
    assert!(body.contains("We Value Your Feedback"));
    assert!(body.contains(r#"action="/complaints""#));
    assert!(body.contains("Select a category"));
    assert!(store.calls().is_empty(), "viewing the form must not hit the store");
}

#[test]
fn valid_submission_is_stored_and_form_is_cleared() {
    let (store, state) = scripted_state();

    let resp = post_form("/complaints", VALID_FORM, &state).expect("handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_of(resp);
    assert!(body.contains("Complaint Submitted"));
    assert!(!body.contains("Broken charger"), "draft should be reset");

    assert_eq!(store.calls(), vec![Op::Insert]);
    let stored = &store.rows()[0];
    assert_eq!(stored.title, "Broken charger");
    assert_eq!(stored.category, Category::Product);
    assert_eq!(stored.priority, Priority::High);
    assert_eq!(stored.status, Status::Pending);
    assert_eq!(stored.user_email.as_deref(), Some("sam@example.com"));
}

#[test]
fn missing_fields_keep_input_and_skip_the_store() {
    let (store, state) = scripted_state();

    let resp = post_form(
        "/complaints",
        "title=Half+done&user_email=&category=&priority=Low&description=",
        &state,
    )
    .expect("handler failed");

    let body = body_of(resp);
    assert!(body.contains("Missing Information"));
    assert!(body.contains(r#"value="Half done""#), "title should be kept");
    assert!(store.calls().is_empty());
    assert_eq!(store.rows().len(), 2);
}

#[test]
fn store_failure_reports_and_keeps_input() {
    let (store, state) = scripted_state();
    store.fail_on(Op::Insert);

    let body = body_of(post_form("/complaints", VALID_FORM, &state).expect("handler failed"));

    assert!(body.contains("Submission Failed"));
    assert!(body.contains("Broken charger"));
    assert_eq!(store.rows().len(), 2);
}

#[test]
fn submitted_complaint_shows_up_after_admin_refresh() {
    let (_store, state) = scripted_state();

    // First visit loads the two seeded rows.
    get("/admin", &state).expect("handler failed");
    post_form("/complaints", VALID_FORM, &state).expect("handler failed");

    let before = body_of(get("/admin", &state).expect("handler failed"));
    assert!(!before.contains("Broken charger"), "no live sync between views");

    post_form("/admin/refresh", "", &state).expect("handler failed");
    let after = body_of(get("/admin", &state).expect("handler failed"));
    assert!(after.contains("Broken charger"));
}
