//! Typed views of the records, one struct per entity kind.

use super::catalog;
use super::entity_kind::EntityKind;
use super::record::Record;
use crate::errors::{AppError, AppResult};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A typed entity that converts to and from the generic [`Record`].
pub trait Entity: Serialize + DeserializeOwned {
    fn kind() -> &'static EntityKind;

    /// Fails when the serialized entity has a blank key field.
    fn to_record(&self) -> AppResult<Record> {
        let record = Record::from_value(serde_json::to_value(self)?)?;
        let kind = Self::kind();
        if record.key(kind).is_none_or(|k| k.trim().is_empty()) {
            return Err(AppError::Other(format!(
                "{} has no {}",
                kind.display, kind.key.name
            )));
        }
        Ok(record)
    }

    fn from_record(record: &Record) -> AppResult<Self> {
        Ok(serde_json::from_value(record.clone().into_value())?)
    }
}

macro_rules! entity {
    ($ty:ident, $kind:expr) => {
        impl Entity for $ty {
            fn kind() -> &'static EntityKind {
                &$kind
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UcsbOrganization {
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}
entity!(UcsbOrganization, catalog::ORGANIZATIONS);

#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequest {
    pub id: i64,
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    pub request_time: String,
    pub explanation: String,
    pub solved: bool,
}
entity!(HelpRequest, catalog::HELP_REQUESTS);

#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub id: i64,
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    pub date_requested: String,
    pub date_needed: String,
    pub done: bool,
}
entity!(RecommendationRequest, catalog::RECOMMENDATION_REQUESTS);

#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: i64,
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}
entity!(MenuItem, catalog::MENU_ITEMS);

#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub explanation: String,
    pub email: String,
    pub date_added: String,
}
entity!(Article, catalog::ARTICLES);

#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UcsbDate {
    pub id: i64,
    #[serde(rename = "quarterYYYYQ")]
    pub quarter_yyyyq: String,
    pub name: String,
    pub local_date_time: String,
}
entity!(UcsbDate, catalog::UCSB_DATES);

#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub description: String,
}
entity!(Restaurant, catalog::RESTAURANTS);
