mod common;

use clubadmin::backend::Method;
use clubadmin::cli::parser::Commands;
use clubadmin::config::Config;
use clubadmin::dispatch_with;
use clubadmin::errors::AppError;
use clubadmin::models::catalog::{ORGANIZATIONS, RESTAURANTS};
use clubadmin::models::entities::{Entity, Restaurant, UcsbOrganization};
use common::{admin, as_json, backend_for, member, organizations};

#[test]
fn test_delete_as_plain_user_is_denied_before_anything_is_sent() {
    let backend = backend_for(Some(&member()));
    backend.reply(Method::Get, "/api/ucsborganizations/all", 200, as_json(&organizations()));

    let cmd = Commands::Delete {
        entity: "organizations".into(),
        key: "SKY".into(),
        yes: false,
    };
    let err = dispatch_with(&cmd, &Config::default(), &backend).unwrap_err();

    assert!(matches!(err, AppError::Forbidden(_, ref role) if role == "ROLE_ADMIN"));
    assert!(backend.requests(Method::Delete).is_empty());
    assert!(
        backend
            .history()
            .iter()
            .all(|r| r.url != "/api/ucsborganizations/all")
    );
}

#[test]
fn test_delete_as_admin_with_yes_sends_delete() {
    let backend = backend_for(Some(&admin()));
    backend.reply(Method::Get, "/api/ucsborganizations/all", 200, as_json(&organizations()));
    backend.reply(
        Method::Delete,
        "/api/ucsborganizations",
        200,
        serde_json::json!({ "message": "UCSBOrganization with id SKY deleted" }),
    );

    let cmd = Commands::Delete {
        entity: "organizations".into(),
        key: "SKY".into(),
        yes: true,
    };
    dispatch_with(&cmd, &Config::default(), &backend).unwrap();

    let deletes = backend.requests(Method::Delete);
    assert_eq!(deletes.len(), 1);
    assert_eq!(deletes[0].params.text("orgCode").as_deref(), Some("SKY"));
}

#[test]
fn test_entity_structs_know_their_kind() {
    assert_eq!(Restaurant::kind(), &RESTAURANTS);
    assert_eq!(UcsbOrganization::kind(), &ORGANIZATIONS);

    let r = Restaurant {
        id: 17,
        name: "Freebirds".into(),
        description: "Burritos".into(),
    };
    let record = r.to_record().unwrap();
    assert_eq!(record.key(Restaurant::kind()).as_deref(), Some("17"));
    assert_eq!(Restaurant::from_record(&record).unwrap(), r);
}

#[test]
fn test_entity_with_blank_key_is_rejected() {
    let org = UcsbOrganization {
        org_code: " ".into(),
        org_translation_short: "NO CODE".into(),
        org_translation: "NO CODE".into(),
        inactive: false,
    };
    assert!(org.to_record().is_err());
}
