/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Login request/response models and the cached session
pub mod auth;
/// Result envelopes and paged responses
pub mod envelope;
/// Authenticated request pipeline
pub mod http;
/// Request bodies for API calls
pub mod requests;
/// Response payloads from API calls
pub mod responses;
/// Result code enumerations
pub mod result_codes;
