mod common;

use common::{cli, temp_out};
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn test_entities_lists_catalog() {
    cli()
        .args(["--test", "entities"])
        .assert()
        .success()
        .stdout(contains("organizations"))
        .stdout(contains("/api/ucsbdiningcommonsmenuitem"))
        .stdout(contains("helprequests"));
}

#[test]
fn test_entities_describes_fields() {
    cli()
        .args(["--test", "entities", "dates"])
        .assert()
        .success()
        .stdout(contains("quarterYYYYQ"))
        .stdout(contains("YYYYQ"))
        .stdout(contains("max 30"));
}

#[test]
fn test_unknown_entity_fails() {
    cli()
        .args(["--test", "entities", "spaceships"])
        .assert()
        .failure()
        .stderr(contains("Unknown entity: spaceships"));
}

#[test]
fn test_validate_empty_form_reports_required_fields() {
    cli()
        .args(["--test", "validate", "organizations"])
        .assert()
        .failure()
        .stdout(contains("OrgCode is required."))
        .stdout(contains("Inactive is required."))
        .stderr(contains("Validation failed"));
}

#[test]
fn test_validate_reports_format_and_length_errors() {
    cli()
        .args([
            "--test",
            "validate",
            "helprequests",
            "--set",
            "requesterEmail=cgaucho@ucsb.edu",
            "--set",
            "teamId=this-team-id-is-far-too-long-to-be-accepted",
            "--set",
            "tableOrBreakoutRoom=7",
            "--set",
            "requestTime=yesterday",
            "--set",
            "explanation=help",
            "--set",
            "solved=maybe",
        ])
        .assert()
        .failure()
        .stdout(contains("Max length 30 characters"))
        .stdout(contains("RequestTime must be in ISO format, e.g. 2022-01-02T12:00"))
        .stdout(contains("\"true\" or \"false\" required"))
        .stdout(contains("RequesterEmail is required.").not());
}

#[test]
fn test_validate_valid_create_prints_post() {
    cli()
        .args([
            "--test",
            "validate",
            "organizations",
            "--set",
            "orgCode=SKY",
            "--set",
            "orgTranslationShort=Skydiving Club",
            "--set",
            "orgTranslation=Skydiving Club at UCSB",
            "--set",
            "inactive=false",
        ])
        .assert()
        .success()
        .stdout(contains("POST /api/ucsborganizations/post?orgCode=SKY"))
        .stdout(contains("inactive=false"));
}

#[test]
fn test_validate_edit_prints_put_with_body() {
    cli()
        .args([
            "--test",
            "validate",
            "restaurants",
            "--key",
            "17",
            "--set",
            "name=Freebirds",
            "--set",
            "description=Burritos",
        ])
        .assert()
        .success()
        .stdout(contains("PUT /api/restaurants?id=17"))
        .stdout(contains("\"description\": \"Burritos\""))
        .stdout(contains("\"id\"").not());
}

#[test]
fn test_validate_rejects_key_change_on_edit() {
    cli()
        .args([
            "--test", "validate", "restaurants", "--key", "17", "--set", "id=18",
        ])
        .assert()
        .failure()
        .stderr(contains("read-only"));
}

#[test]
fn test_bad_assignment_syntax() {
    cli()
        .args(["--test", "validate", "restaurants", "--set", "name"])
        .assert()
        .failure()
        .stderr(contains("expected FIELD=VALUE"));
}

#[test]
fn test_routes_for_admin_role() {
    cli()
        .args(["--test", "routes", "--role", "ROLE_ADMIN"])
        .assert()
        .success()
        .stdout(contains("/ucsborganizations/create"))
        .stdout(contains("/restaurants/edit/:id"))
        .stdout(contains("/admin/users"));
}

#[test]
fn test_routes_for_plain_user() {
    cli()
        .args(["--test", "routes", "--role", "ROLE_USER"])
        .assert()
        .success()
        .stdout(contains("/ucsborganizations"))
        .stdout(contains("/create").not())
        .stdout(contains("/admin/users").not());
}

#[test]
fn test_list_without_session_is_denied() {
    // nothing listens on the discard port, so the session stays anonymous
    cli()
        .args([
            "--test",
            "--server",
            "http://127.0.0.1:9",
            "list",
            "organizations",
        ])
        .assert()
        .failure()
        .stderr(contains("Access denied"));
}

#[test]
fn test_init_in_test_mode() {
    cli()
        .args(["--test", "--server", "http://example.org:8080/", "init"])
        .assert()
        .success()
        .stdout(contains("http://example.org:8080"))
        .stdout(contains("clubadmin.conf"));
}

#[test]
fn test_format_requires_file() {
    cli()
        .args(["--test", "list", "organizations", "--format", "csv"])
        .assert()
        .failure();
}

#[test]
fn test_file_requires_format() {
    let out = temp_out("list_file_only", "csv");
    cli()
        .args(["--test", "list", "organizations", "--file"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(contains("--format"));
    assert!(!out.exists());
}
