/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Certificate authority templates
pub mod ca_service;
/// Certificate listing, retrieval and import
pub mod certificate_service;
/// Configuration object CRUD
pub mod config_service;
/// Caller identity
pub mod identity_service;
/// Policy folders
pub mod policy_service;
/// Certificate vault
pub mod vault_service;

pub use crate::application::interfaces::*;
