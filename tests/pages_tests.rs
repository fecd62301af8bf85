mod common;

use clubadmin::backend::{Method, MockBackend};
use clubadmin::core::pages::{CreatePage, EditPage, IndexPage, Outcome, fetch_one, summarize};
use clubadmin::errors::AppError;
use clubadmin::models::catalog::{HELP_REQUESTS, ORGANIZATIONS, RESTAURANTS};
use clubadmin::models::Record;
use common::{admin, as_json, help_requests, member, organizations, records};
use serde_json::{Value, json};

fn sky_params() -> Record {
    Record::new()
        .with("orgCode", "SKY")
        .with("orgTranslationShort", "Skydiving Club")
        .with("orgTranslation", "Skydiving Club at UCSB")
        .with("inactive", false)
}

#[test]
fn test_create_posts_query_params_and_navigates_to_index() {
    let backend = MockBackend::new();
    backend.reply(Method::Post, "/api/ucsborganizations/post", 200, sky_params().into_value());

    let mut page = CreatePage::new(&backend, &ORGANIZATIONS).unwrap();
    assert_eq!(page.heading(), "Create New UCSB Organization");

    let form = page.form_mut();
    form.set("orgCode", "SKY").unwrap();
    form.set("orgTranslationShort", "Skydiving Club").unwrap();
    form.set("orgTranslation", "Skydiving Club at UCSB").unwrap();
    form.set("inactive", "false").unwrap();

    let outcome = page.submit().unwrap();

    let posts = backend.requests(Method::Post);
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].url, "/api/ucsborganizations/post");
    assert_eq!(posts[0].params, sky_params());
    assert!(posts[0].data.is_none());

    assert_eq!(
        outcome,
        Outcome::Navigate {
            to: "/ucsborganizations".into(),
            toast: "New UCSB Organization Created - orgCode: SKY".into(),
        }
    );
}

#[test]
fn test_create_with_invalid_form_sends_nothing() {
    let backend = MockBackend::new();
    let mut page = CreatePage::new(&backend, &ORGANIZATIONS).unwrap();

    let err = page.submit().unwrap_err();

    assert!(matches!(err, AppError::Validation(ref e) if e.len() == 4));
    assert!(backend.history().is_empty());
    assert_eq!(page.form().errors().get("orgCode"), Some("OrgCode is required."));
}

#[test]
fn test_create_failure_stays_without_toast() {
    let backend = MockBackend::new();
    backend.reply(Method::Post, "/api/ucsborganizations/post", 500, json!({}));

    let mut page = CreatePage::new(&backend, &ORGANIZATIONS).unwrap();
    let form = page.form_mut();
    for (f, v) in [
        ("orgCode", "SKY"),
        ("orgTranslationShort", "Skydiving Club"),
        ("orgTranslation", "Skydiving Club at UCSB"),
        ("inactive", "false"),
    ] {
        form.set(f, v).unwrap();
    }

    assert_eq!(page.submit().unwrap(), Outcome::Stay);
    assert_eq!(backend.requests(Method::Post).len(), 1);
}

#[test]
fn test_edit_loads_record_and_puts_body_with_numeric_key() {
    let backend = MockBackend::new();
    let original = json!({ "id": 17, "name": "Freebirds", "description": "Burritos" });
    backend.reply_with_params(
        Method::Get,
        "/api/restaurants",
        Record::new().with("id", 17),
        200,
        original,
    );
    backend.reply(
        Method::Put,
        "/api/restaurants",
        200,
        json!({ "id": 17, "name": "Freebirds World Burrito", "description": "Burritos" }),
    );

    let mut page = EditPage::load(&backend, &RESTAURANTS, "17");
    assert_eq!(page.heading(), "Edit Restaurant");

    let form = page.form_mut().expect("record loaded");
    assert_eq!(form.button_label(), "Update");
    assert_eq!(form.value("id"), Some("17"));
    form.set("name", "Freebirds World Burrito").unwrap();

    let outcome = page.submit().unwrap();

    let puts = backend.requests(Method::Put);
    assert_eq!(puts.len(), 1);
    assert_eq!(puts[0].params, Record::new().with("id", 17));
    assert_eq!(
        puts[0].data,
        Some(json!({ "name": "Freebirds World Burrito", "description": "Burritos" }))
    );
    assert_eq!(
        outcome,
        Outcome::Navigate {
            to: "/restaurants".into(),
            toast: "Restaurant Updated - id: 17 name: Freebirds World Burrito".into(),
        }
    );
}

#[test]
fn test_edit_with_empty_reply_summarizes_submitted_values() {
    let backend = MockBackend::new();
    backend.reply(
        Method::Get,
        "/api/restaurants",
        200,
        json!({ "id": 17, "name": "Freebirds", "description": "Burritos" }),
    );
    backend.reply(Method::Put, "/api/restaurants", 200, Value::Null);

    let mut page = EditPage::load(&backend, &RESTAURANTS, "17");
    page.form_mut().unwrap().set("name", "Freebirds 2").unwrap();

    assert_eq!(
        page.submit().unwrap(),
        Outcome::Navigate {
            to: "/restaurants".into(),
            toast: "Restaurant Updated - id: 17 name: Freebirds 2".into(),
        }
    );
}

#[test]
fn test_index_skips_records_without_key() {
    let backend = MockBackend::new();
    let mut list = as_json(&organizations());
    list.as_array_mut()
        .unwrap()
        .insert(1, json!({ "orgTranslationShort": "NO CODE", "inactive": false }));
    backend.reply(Method::Get, "/api/ucsborganizations/all", 200, list);

    let page = IndexPage::load(&backend, &ORGANIZATIONS, Some(&admin()));
    assert_eq!(page.records().len(), 3);
    assert_eq!(page.row_of("SKY"), Some(1));
    assert_eq!(page.table().cell(1, "orgCode"), Some("SKY"));
}

#[test]
fn test_edit_with_natural_key_keeps_key_out_of_body() {
    let backend = MockBackend::new();
    backend.reply(
        Method::Get,
        "/api/ucsborganizations",
        200,
        json!({
            "orgCode": "RAN",
            "orgTranslationShort": "Rock and Neon",
            "orgTranslation": "Rock and Neon Club",
            "inactive": false
        }),
    );
    backend.reply(Method::Put, "/api/ucsborganizations", 200, json!({ "orgCode": "RAN" }));

    let mut page = EditPage::load(&backend, &ORGANIZATIONS, "RAN");
    page.form_mut().unwrap().set("inactive", "true").unwrap();
    page.submit().unwrap();

    let put = &backend.requests(Method::Put)[0];
    assert_eq!(put.params, Record::new().with("orgCode", "RAN"));
    let body = put.data.as_ref().unwrap();
    assert!(body.get("orgCode").is_none());
    assert_eq!(body["inactive"], json!(true));
}

#[test]
fn test_edit_load_timeout_leaves_no_form() {
    let backend = MockBackend::new();
    backend.timeout(Method::Get, "/api/restaurants");

    let mut page = EditPage::load(&backend, &RESTAURANTS, "17");

    assert_eq!(page.key(), "17");
    assert!(page.form().is_none());
    assert!(page.submit().is_err());
    assert!(backend.requests(Method::Put).is_empty());
}

#[test]
fn test_index_lists_records_and_gates_create_link() {
    let backend = MockBackend::new();
    backend.reply(Method::Get, "/api/ucsborganizations/all", 200, as_json(&organizations()));

    let adm = admin();
    let page = IndexPage::load(&backend, &ORGANIZATIONS, Some(&adm));
    assert_eq!(page.heading(), "UCSB Organizations");
    assert_eq!(page.records().len(), 3);
    assert_eq!(
        page.create_link(),
        Some((
            "Create UCSB Organization".to_string(),
            "/ucsborganizations/create".to_string()
        ))
    );
    assert!(page.table().has_actions());

    let user = member();
    let page = IndexPage::load(&backend, &ORGANIZATIONS, Some(&user));
    assert!(page.create_link().is_none());
    assert!(!page.table().has_actions());
}

#[test]
fn test_index_load_failure_shows_empty_table() {
    let backend = MockBackend::new();
    backend.reply(Method::Get, "/api/helprequests/all", 500, json!({}));

    let page = IndexPage::load(&backend, &HELP_REQUESTS, Some(&admin()));
    assert!(page.records().is_empty());
    assert!(page.table().rows().is_empty());
}

#[test]
fn test_delete_sends_key_then_refetches() {
    let backend = MockBackend::new();
    let all = help_requests();
    backend.reply(Method::Get, "/api/helprequests/all", 200, as_json(&all));
    backend.reply(
        Method::Delete,
        "/api/helprequests",
        200,
        json!({ "message": "HelpRequest with id 2 deleted" }),
    );

    let mut page = IndexPage::load(&backend, &HELP_REQUESTS, Some(&admin()));
    let row = page.row_of("2").expect("row for id 2");
    assert_eq!(row, 1);

    // the backend list no longer has id 2
    let remaining = vec![all[0].clone(), all[2].clone()];
    backend.reply(Method::Get, "/api/helprequests/all", 200, as_json(&remaining));
    backend.reset_history();

    let outcome = page.delete(row).unwrap();

    let history = backend.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].method, Method::Delete);
    assert_eq!(history[0].params, Record::new().with("id", 2));
    assert_eq!(history[1].method, Method::Get);
    assert_eq!(history[1].url, "/api/helprequests/all");

    assert_eq!(
        outcome,
        Outcome::Refreshed {
            toast: Some("HelpRequest with id 2 deleted".into())
        }
    );
    assert_eq!(page.records(), records(&remaining).as_slice());
}

#[test]
fn test_delete_failure_keeps_list() {
    let backend = MockBackend::new();
    backend.reply(Method::Get, "/api/ucsborganizations/all", 200, as_json(&organizations()));
    backend.reply(Method::Delete, "/api/ucsborganizations", 500, json!({}));

    let mut page = IndexPage::load(&backend, &ORGANIZATIONS, Some(&admin()));
    let outcome = page.delete(0).unwrap();

    assert_eq!(outcome, Outcome::Stay);
    assert_eq!(page.records().len(), 3);
    assert_eq!(backend.requests(Method::Get).len(), 1);
}

#[test]
fn test_delete_without_admin_sends_nothing() {
    let backend = MockBackend::new();
    backend.reply(Method::Get, "/api/ucsborganizations/all", 200, as_json(&organizations()));

    let mut page = IndexPage::load(&backend, &ORGANIZATIONS, Some(&member()));
    assert!(page.delete(0).is_err());
    assert!(backend.requests(Method::Delete).is_empty());
}

#[test]
fn test_fetch_one_and_summary() {
    let backend = MockBackend::new();
    backend.reply(Method::Get, "/api/helprequests", 200, as_json(&help_requests()[..1]));

    // a list where an object is expected is a malformed payload
    assert!(fetch_one(&backend, &HELP_REQUESTS, "1").is_err());

    let one = records(&help_requests()).remove(0);
    backend.reply(Method::Get, "/api/helprequests", 200, one.clone().into_value());
    let got = fetch_one(&backend, &HELP_REQUESTS, "1").unwrap();
    assert_eq!(got, one);
    assert_eq!(
        summarize(&HELP_REQUESTS, &got),
        "id: 1 requesterEmail: cgaucho@ucsb.edu"
    );
}
