/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use crate::presentation::config::ConfigObject;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Interface for the configuration object service (`/vedsdk/Config/*`)
#[async_trait]
pub trait ConfigService: Send + Sync {
    /// Creates an object of class `class` at `dn`
    ///
    /// # Arguments
    /// * `dn` - DN of the new object
    /// * `class` - Object class, e.g. `Policy`
    /// * `seed` - Optional single-valued attributes set at creation
    ///
    /// # Returns
    /// * The created object as reported by the server
    async fn create(
        &self,
        dn: &str,
        class: &str,
        seed: Option<&BTreeMap<String, String>>,
    ) -> Result<ConfigObject, AppError>;

    /// Looks an object up by DN or GUID
    async fn is_valid(&self, dn: Option<&str>, guid: Option<&str>)
    -> Result<ConfigObject, AppError>;

    /// Whether an object exists at `dn`; any failure counts as absent
    async fn exists(&self, dn: &str) -> bool;

    /// Retrieves the object at `dn`
    async fn retrieve(&self, dn: &str) -> Result<ConfigObject, AppError>;

    /// Gets the default DN of the tree
    async fn default_dn(&self) -> Result<String, AppError>;

    /// Deletes the object at `dn`, with its children when `recursive`
    async fn delete(&self, dn: &str, recursive: bool) -> Result<(), AppError>;

    /// Lists the children of `dn`, optionally filtered by a name pattern
    async fn enumerate(
        &self,
        dn: &str,
        recursive: bool,
        pattern: Option<&str>,
    ) -> Result<Vec<ConfigObject>, AppError>;

    /// Appends a value to a multi-valued attribute
    async fn add_value(&self, dn: &str, name: &str, value: &str) -> Result<(), AppError>;

    /// Removes every value of an attribute
    async fn clear_attribute(&self, dn: &str, name: &str) -> Result<(), AppError>;

    /// Reads the values of one attribute
    async fn read(&self, dn: &str, name: &str) -> Result<Vec<String>, AppError>;

    /// Reads every attribute of an object
    async fn read_all(&self, dn: &str) -> Result<BTreeMap<String, Vec<String>>, AppError>;

    /// Writes multi-valued attributes, replacing their current values
    async fn write(&self, dn: &str, attributes: &BTreeMap<String, Vec<String>>)
    -> Result<(), AppError>;
}
