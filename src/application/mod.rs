/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Session credential cache and login exchange
pub mod auth;
/// Client facade
pub mod client;
/// Client configuration
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Service implementations for [`client::Client`]
pub mod services;
