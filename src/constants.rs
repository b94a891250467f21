/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

/// User agent string used in HTTP requests to identify this client to TPP
pub const USER_AGENT: &str = concat!("tpp-client/", env!("CARGO_PKG_VERSION"));
/// Header carrying the session API key on every authenticated request
pub const API_KEY_HEADER: &str = "X-Venafi-Api-Key";
/// Login endpoint
pub const AUTHORIZE_PATH: &str = "/vedsdk/authorize/";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default page size for list endpoints
pub const DEFAULT_PAGE_SIZE: u32 = 100;
/// Iteration count for PBKDF2 when encrypting private keys
pub const PBKDF2_ITERATIONS: u32 = 2048;
/// Status code used by TPP to carry structured (domain) errors
pub const DOMAIN_ERROR_STATUS: u16 = 400;

/// Configuration object class names
pub mod class {
    /// Certificate object
    pub const X509_CERTIFICATE: &str = "X509 Certificate";
    /// Policy folder
    pub const POLICY: &str = "Policy";
    /// OpenSSL-backed CA template
    pub const OPENSSL_CA: &str = "OpenSSL CA";
    /// Self signed CA template
    pub const SELF_SIGNED_CA: &str = "Self Signed CA";
}

/// CA driver names
pub mod driver {
    /// Driver for self signed CA templates
    pub const SELF_SIGNED: &str = "caselfsigned";
    /// Driver for OpenSSL CA templates
    pub const OPENSSL: &str = "caopenssl";
}

/// Signing algorithms accepted by CA templates
pub mod algorithm {
    /// SHA-1
    pub const SHA1: &str = "SHA1";
    /// SHA-256
    pub const SHA256: &str = "SHA256";
}

/// Vault protection keys
pub mod protection_key {
    /// Software default key
    pub const DEFAULT: &str = "Software:Default";
    /// No protection
    pub const NULL: &str = "Null:Null";
}

/// REST endpoint paths
pub mod path {
    /// Creates a configuration object
    pub const CONFIG_CREATE: &str = "/vedsdk/Config/Create";
    /// Looks up an object by DN or GUID
    pub const CONFIG_IS_VALID: &str = "/vedsdk/Config/IsValid";
    /// Default policy root (GET)
    pub const CONFIG_DEFAULT_DN: &str = "/vedsdk/Config/DefaultDn";
    /// Deletes an object
    pub const CONFIG_DELETE: &str = "/vedsdk/Config/Delete";
    /// Lists the children of an object
    pub const CONFIG_ENUMERATE: &str = "/vedsdk/Config/Enumerate";
    /// Appends an attribute value
    pub const CONFIG_ADD_VALUE: &str = "/vedsdk/Config/AddValue";
    /// Removes every value of an attribute
    pub const CONFIG_CLEAR_ATTRIBUTE: &str = "/vedsdk/Config/ClearAttribute";
    /// Reads one attribute
    pub const CONFIG_READ: &str = "/vedsdk/Config/Read";
    /// Reads every attribute
    pub const CONFIG_READ_ALL: &str = "/vedsdk/Config/ReadAll";
    /// Replaces attribute values
    pub const CONFIG_WRITE: &str = "/vedsdk/Config/Write";

    /// Paged certificate listing (GET)
    pub const CERTIFICATES: &str = "/vedsdk/certificates/";
    /// Downloads a certificate, optionally with chain and key
    pub const CERTIFICATES_RETRIEVE: &str = "/vedsdk/certificates/Retrieve";
    /// Imports a certificate under a policy folder
    pub const CERTIFICATES_IMPORT: &str = "/vedsdk/certificates/Import";

    /// Adds a certificate to the vault
    pub const VAULT_ADD: &str = "/vedsdk/X509CertificateStore/Add";
    /// Finds vault entries by certificate, owner or attribute
    pub const VAULT_LOOKUP: &str = "/vedsdk/X509CertificateStore/Lookup";
    /// Finds vault entries expiring within a number of days
    pub const VAULT_LOOKUP_EXPIRING: &str = "/vedsdk/X509CertificateStore/LookupExpiring";
    /// Reads a vault entry
    pub const VAULT_RETRIEVE: &str = "/vedsdk/X509CertificateStore/Retrieve";
    /// Removes a vault entry
    pub const VAULT_REMOVE: &str = "/vedsdk/X509CertificateStore/Remove";

    /// Identities of the logged-in caller (GET)
    pub const IDENTITY_SELF: &str = "/vedsdk/Identity/Self";
    /// Resolves a partial identity
    pub const IDENTITY_VALIDATE: &str = "/vedsdk/Identity/Validate";
}
