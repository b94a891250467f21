/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Certificate authority templates
pub mod ca;
/// Certificate listing, retrieval and import
pub mod certificate;
/// Configuration object CRUD
pub mod config;
/// Caller identity
pub mod identity;
/// Policy folders
pub mod policy;
/// Certificate vault
pub mod vault;

pub use ca::CaService;
pub use certificate::CertificateService;
pub use config::ConfigService;
pub use identity::IdentityService;
pub use policy::PolicyService;
pub use vault::VaultService;
