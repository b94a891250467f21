/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Certificate authority template models
pub mod ca;
/// Serialization helpers for TPP wire values
pub mod serialization;
/// Certificate records and retrieval/import models
pub mod certificate;
/// Configuration object models
pub mod config;
/// Identity models
pub mod identity;
/// Certificate vault models
pub mod vault;

pub use ca::*;
pub use certificate::*;
pub use config::*;
pub use identity::*;
pub use vault::*;
