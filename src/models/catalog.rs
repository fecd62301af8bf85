//! The entity types this client administers.

use super::entity_kind::{EntityKind, KeyKind};
use super::field_spec::{FieldSpec, Format};
use crate::errors::{AppError, AppResult};

const ID: FieldSpec = FieldSpec::integer("id", "Id");

pub static ORGANIZATIONS: EntityKind = EntityKind {
    name: "organizations",
    display: "UCSB Organization",
    plural: "UCSB Organizations",
    api: "ucsborganizations",
    route: "ucsborganizations",
    test_id_prefix: "UCSBOrganizations",
    key: FieldSpec::text("orgCode", "OrgCode").required(),
    key_kind: KeyKind::Natural,
    fields: &[
        FieldSpec::text("orgTranslationShort", "OrgTranslationShort").required(),
        FieldSpec::text("orgTranslation", "OrgTranslation").required(),
        FieldSpec::boolean("inactive", "Inactive").required(),
    ],
    summary: &["orgCode"],
};

pub static HELP_REQUESTS: EntityKind = EntityKind {
    name: "helprequests",
    display: "Help Request",
    plural: "Help Requests",
    api: "helprequests",
    route: "helprequests",
    test_id_prefix: "HelpRequest",
    key: ID,
    key_kind: KeyKind::Generated,
    fields: &[
        FieldSpec::text("requesterEmail", "RequesterEmail")
            .required()
            .max_length(30),
        FieldSpec::text("teamId", "TeamId").required().max_length(30),
        FieldSpec::text("tableOrBreakoutRoom", "TableOrBreakoutRoom")
            .required()
            .max_length(30),
        FieldSpec::timestamp("requestTime", "RequestTime").required(),
        FieldSpec::text("explanation", "Explanation").required(),
        FieldSpec::boolean("solved", "Solved").required(),
    ],
    summary: &["id", "requesterEmail"],
};

pub static RECOMMENDATION_REQUESTS: EntityKind = EntityKind {
    name: "recommendationrequests",
    display: "Recommendation Request",
    plural: "Recommendation Requests",
    api: "recommendationrequests",
    route: "recommendationrequests",
    test_id_prefix: "RecRequest",
    key: ID,
    key_kind: KeyKind::Generated,
    fields: &[
        FieldSpec::text("requesterEmail", "Requester Email").required(),
        FieldSpec::text("professorEmail", "Professor Email").required(),
        FieldSpec::text("explanation", "Explanation").required(),
        FieldSpec::timestamp("dateRequested", "Date Requested").required(),
        FieldSpec::timestamp("dateNeeded", "Date Needed").required(),
        FieldSpec::boolean("done", "Done").required(),
    ],
    summary: &["id", "requesterEmail", "professorEmail"],
};

pub static MENU_ITEMS: EntityKind = EntityKind {
    name: "menuitems",
    display: "Menu Item",
    plural: "UCSB Dining Commons Menu Items",
    api: "ucsbdiningcommonsmenuitem",
    route: "ucsbdiningcommonsmenuitem",
    test_id_prefix: "UCSBDiningCommonsMenuItem",
    key: ID,
    key_kind: KeyKind::Generated,
    fields: &[
        FieldSpec::text("diningCommonsCode", "Dining Commons Code").required(),
        FieldSpec::text("name", "Name").required(),
        FieldSpec::text("station", "Station").required(),
    ],
    summary: &["id", "name"],
};

pub static ARTICLES: EntityKind = EntityKind {
    name: "articles",
    display: "Article",
    plural: "Articles",
    api: "articles",
    route: "articles",
    test_id_prefix: "Articles",
    key: ID,
    key_kind: KeyKind::Generated,
    fields: &[
        FieldSpec::text("title", "Title").required(),
        FieldSpec::text("url", "URL").required(),
        FieldSpec::text("explanation", "Explanation").required(),
        FieldSpec::text("email", "Email").required(),
        FieldSpec::timestamp("dateAdded", "DateAdded").required(),
    ],
    summary: &["id", "title"],
};

pub static UCSB_DATES: EntityKind = EntityKind {
    name: "dates",
    display: "UCSB Date",
    plural: "UCSB Dates",
    api: "ucsbdates",
    route: "ucsbdates",
    test_id_prefix: "UCSBDate",
    key: ID,
    key_kind: KeyKind::Generated,
    fields: &[
        FieldSpec::text("quarterYYYYQ", "QuarterYYYYQ")
            .required()
            .format(Format::QuarterYYYYQ),
        FieldSpec::text("name", "Name").required().max_length(30),
        FieldSpec::timestamp("localDateTime", "LocalDateTime").required(),
    ],
    summary: &["id", "quarterYYYYQ", "name"],
};

pub static RESTAURANTS: EntityKind = EntityKind {
    name: "restaurants",
    display: "Restaurant",
    plural: "Restaurants",
    api: "restaurants",
    route: "restaurants",
    test_id_prefix: "Restaurant",
    key: ID,
    key_kind: KeyKind::Generated,
    fields: &[
        FieldSpec::text("name", "Name").required().max_length(30),
        FieldSpec::text("description", "Description").required(),
    ],
    summary: &["id", "name"],
};

pub static ALL: [&EntityKind; 7] = [
    &UCSB_DATES,
    &RESTAURANTS,
    &MENU_ITEMS,
    &ORGANIZATIONS,
    &HELP_REQUESTS,
    &RECOMMENDATION_REQUESTS,
    &ARTICLES,
];

/// Resolve a command-line entity name. Accepts the short name, the API
/// segment or the route segment, case-insensitively.
pub fn find(name: &str) -> AppResult<&'static EntityKind> {
    let wanted = name.trim().to_lowercase();
    ALL.iter()
        .copied()
        .find(|k| k.name == wanted || k.api == wanted || k.route == wanted)
        .ok_or_else(|| AppError::UnknownEntity(name.to_string()))
}
