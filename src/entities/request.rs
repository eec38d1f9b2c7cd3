//! Request entity - A client's ask for a service, tracked through a status.
//!
//! The status column only ever holds one of the three [`RequestStatus`] literals.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::errors::Error;

/// Lifecycle of a request. Any status may follow any other.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum RequestStatus {
    /// Freshly created, nobody is working on it yet
    #[sea_orm(string_value = "Pending")]
    #[serde(rename = "Pending")]
    #[default]
    Pending,
    /// Someone is on it
    #[sea_orm(string_value = "In Process")]
    #[serde(rename = "In Process")]
    InProcess,
    /// Finished
    #[sea_orm(string_value = "Done")]
    #[serde(rename = "Done")]
    Done,
}

impl RequestStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProcess, Self::Done];

    /// The literal stored in the database and sent by the status form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProcess => "In Process",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact match only: no trimming, no case folding.
impl FromStr for RequestStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::validation(format!("unknown request status {s:?}")))
    }
}

/// Request database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "requests")]
pub struct Model {
    /// Unique identifier for the request
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the client who asked
    pub client_id: i64,
    /// ID of the requested service
    pub service_id: i64,
    /// Current status
    pub status: RequestStatus,
}

/// Defines relationships between Request and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each request belongs to one client
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id"
    )]
    Client,
    /// Each request is for one service
    #[sea_orm(
        belongs_to = "super::service::Entity",
        from = "Column::ServiceId",
        to = "super::service::Column::Id"
    )]
    Service,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Service.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
