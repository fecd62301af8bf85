#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use clubadmin::backend::{Method, MockBackend};
use clubadmin::models::entities::{Entity, HelpRequest, UcsbOrganization};
use clubadmin::models::user::{ROLE_ADMIN, ROLE_USER};
use clubadmin::models::{CurrentUser, Record};
use serde_json::{Value, json};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn cli() -> Command {
    cargo_bin_cmd!("clubadmin")
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_clubadmin_out.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

pub fn admin() -> CurrentUser {
    CurrentUser::new(1, "admin@ucsb.edu", [ROLE_ADMIN, ROLE_USER])
}

pub fn member() -> CurrentUser {
    CurrentUser::new(2, "user@ucsb.edu", [ROLE_USER])
}

/// `GET /api/currentUser` payload as the backend sends it.
pub fn current_user_json(user: &CurrentUser) -> Value {
    let roles: Vec<Value> = user
        .roles
        .iter()
        .map(|r| json!({ "authority": r }))
        .collect();
    json!({
        "user": { "id": user.id, "email": user.email },
        "roles": roles,
    })
}

/// Backend that knows who is logged in (or answers 403 when nobody is).
pub fn backend_for(user: Option<&CurrentUser>) -> MockBackend {
    let backend = MockBackend::new();
    match user {
        Some(u) => backend.reply(Method::Get, "/api/currentUser", 200, current_user_json(u)),
        None => backend.reply(Method::Get, "/api/currentUser", 403, json!({})),
    };
    backend.reply(
        Method::Get,
        "/api/systemInfo",
        200,
        json!({ "springH2ConsoleEnabled": false, "showSwaggerUiLink": true }),
    );
    backend
}

pub fn organizations() -> Vec<UcsbOrganization> {
    vec![
        UcsbOrganization {
            org_code: "ZPR".into(),
            org_translation_short: "ZETA PHI RHO".into(),
            org_translation: "ZETA PHI RHO".into(),
            inactive: false,
        },
        UcsbOrganization {
            org_code: "SKY".into(),
            org_translation_short: "SKYDIVING CLUB".into(),
            org_translation: "SKYDIVING CLUB AT UCSB".into(),
            inactive: false,
        },
        UcsbOrganization {
            org_code: "OSLI".into(),
            org_translation_short: "STUDENT LIFE".into(),
            org_translation: "OFFICE OF STUDENT LIFE".into(),
            inactive: true,
        },
    ]
}

pub fn help_requests() -> Vec<HelpRequest> {
    vec![
        HelpRequest {
            id: 1,
            requester_email: "cgaucho@ucsb.edu".into(),
            team_id: "s22-5pm-3".into(),
            table_or_breakout_room: "7".into(),
            request_time: "2022-04-20T17:35".into(),
            explanation: "Cannot connect to the database".into(),
            solved: false,
        },
        HelpRequest {
            id: 2,
            requester_email: "ldelplaya@ucsb.edu".into(),
            team_id: "s22-6pm-4".into(),
            table_or_breakout_room: "11".into(),
            request_time: "2022-04-20T18:31".into(),
            explanation: "Merge conflict".into(),
            solved: true,
        },
        HelpRequest {
            id: 3,
            requester_email: "pdg@ucsb.edu".into(),
            team_id: "s22-5pm-3".into(),
            table_or_breakout_room: "7".into(),
            request_time: "2022-04-21T14:15".into(),
            explanation: "Deploy fails on dokku".into(),
            solved: false,
        },
    ]
}

pub fn records<E: Entity>(items: &[E]) -> Vec<Record> {
    items
        .iter()
        .map(|e| e.to_record().expect("entity serializes to an object"))
        .collect()
}

pub fn as_json<E: Entity>(items: &[E]) -> Value {
    serde_json::to_value(items).expect("entities serialize")
}
