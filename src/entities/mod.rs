//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod client;
pub mod request;
pub mod service;

// Re-export specific types to avoid conflicts
pub use client::{Column as ClientColumn, Entity as Client, Model as ClientModel};
pub use request::{
    Column as RequestColumn, Entity as Request, Model as RequestModel, RequestStatus,
};
pub use service::{Column as ServiceColumn, Entity as Service, Model as ServiceModel};
