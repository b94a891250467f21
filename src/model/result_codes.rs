/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Result codes reported by TPP inside result envelopes.
//!
//! Configuration endpoints report a [`ConfigResult`] (success is `1`) and the
//! X509 certificate store reports a [`VaultResult`] (success is `0`). Codes the
//! crate does not know about are preserved in an `Unknown` variant.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a result-code enumeration with its numeric mapping and descriptions
macro_rules! result_codes {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident = $code:literal => $text:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "i64", into = "i64")]
        pub enum $name {
            $(
                #[doc = $text]
                $variant,
            )+
            /// A code not known to this crate
            Unknown(i64),
        }

        impl $name {
            /// Numeric value as sent on the wire
            #[must_use]
            pub fn code(&self) -> i64 {
                match self {
                    $( Self::$variant => $code, )+
                    Self::Unknown(code) => *code,
                }
            }

            /// Human-readable description of the code
            #[must_use]
            pub fn description(&self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )+
                    Self::Unknown(_) => "unknown result code",
                }
            }
        }

        impl From<i64> for $name {
            fn from(code: i64) -> Self {
                match code {
                    $( $code => Self::$variant, )+
                    other => Self::Unknown(other),
                }
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.code()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    Self::Unknown(code) => write!(f, "unknown result code ({code})"),
                    _ => write!(f, "{} ({})", self.description(), self.code()),
                }
            }
        }
    };
}

result_codes! {
    /// Result of a configuration (`/vedsdk/Config/*`) call
    ConfigResult {
        Success = 1 => "success",
        InvalidArgument = 2 => "invalid argument",
        InvalidArgumentRange = 3 => "argument out of range",
        MismatchedArguments = 4 => "mismatched arguments",
        NotImplemented = 5 => "not implemented",
        InvalidDestinationList = 6 => "invalid destination list",
        InsufficientPrivileges = 7 => "insufficient privileges",
        InvalidOperation = 8 => "invalid operation",
        UnexpectedAssemblyError = 9 => "unexpected assembly error",
        OutOfMemory = 10 => "out of memory",
        AttributeDoesNotExist = 100 => "attribute does not exist",
        AttributeAlreadyExists = 101 => "attribute already exists",
        AttributeNotFound = 102 => "attribute not found",
        AttributeValueExists = 103 => "attribute value exists",
        AttributeStillInUse = 104 => "attribute still in use",
        AttributeNameTooLong = 105 => "attribute name too long",
        AttributeReferenceDoesNotExist = 106 => "attribute reference does not exist",
        AttributeSyntaxCollision = 107 => "attribute syntax collision",
        AttributePropertyCollision = 108 => "attribute property collision",
        CannotRemoveMandatory = 109 => "cannot remove mandatory attribute",
        AttributeValueIsMandatory = 110 => "attribute value is mandatory",
        AttributeValueTooLong = 111 => "attribute value too long",
        IllegalAttributeForClass = 112 => "illegal attribute for class",
        InvalidAttributeDn = 113 => "invalid attribute DN",
        AttributeValueDoesNotExist = 114 => "attribute value does not exist",
        AttributeIsSingleValued = 115 => "attribute is single valued",
        AttributeIsReadOnly = 116 => "attribute is read only",
        AttributeIsHidden = 117 => "attribute is hidden",
        ClassDoesNotExist = 200 => "class does not exist",
        ClassAlreadyExists = 201 => "class already exists",
        ClassStillInUse = 202 => "class still in use",
        ClassNameTooLong = 203 => "class name too long",
        ClassInvalidSuperClass = 204 => "invalid super class",
        ClassInvalidContainmentClass = 205 => "invalid containment class",
        ClassInvalidNamingAttribute = 206 => "invalid naming attribute",
        ClassInvalidMandatoryAttribute = 207 => "invalid mandatory attribute",
        ClassInvalidOptionalAttribute = 208 => "invalid optional attribute",
        ClassInvalidName = 209 => "invalid class name",
        ClassInvalidContainmentSubClass = 210 => "invalid containment sub class",
        PolicyDoesNotExist = 300 => "policy does not exist",
        PolicyLockStateCollision = 301 => "policy lock state collision",
        LockNameAlreadyExists = 350 => "lock name already exists",
        LockNameDoesNotExist = 351 => "lock name does not exist",
        LockNameOwnedByAnother = 352 => "lock name owned by another",
        LockNameLimitReached = 353 => "lock name limit reached",
        LockNameAttemptTimedOut = 354 => "lock attempt timed out",
        ObjectDoesNotExist = 400 => "object does not exist",
        ObjectAlreadyExists = 401 => "object already exists",
        ObjectHasChildren = 402 => "object has children",
        ObjectNameTooLong = 403 => "object name too long",
        ObjectDepthTooDeep = 404 => "object depth too deep",
        ObjectInvalidName = 405 => "invalid object name",
        ObjectInvalidClass = 406 => "invalid object class",
        ObjectInvalidContainment = 407 => "invalid object containment",
        ObjectMandatoryMissing = 408 => "mandatory attribute missing",
        ObjectIsReadOnly = 409 => "object is read only",
        ObjectInvalidOperation = 410 => "invalid object operation",
        DriverMissingDsn = 500 => "driver missing DSN",
        DriverMissingDatabaseName = 501 => "driver missing database name",
        DriverDatabaseError = 502 => "driver database error",
        DriverTransactionError = 503 => "driver transaction error",
        DriverTransactionCollision = 504 => "driver transaction collision",
        DriverGenerationUpdateError = 505 => "driver generation update error",
        CacheLockException = 600 => "cache lock exception",
        CacheEntryNotFound = 601 => "cache entry not found",
        CacheEntryAlreadyExists = 602 => "cache entry already exists",
        CacheEntryIsSuperior = 603 => "cache entry is superior",
        CacheEntryIsIncompatible = 604 => "cache entry is incompatible",
        XmlInvalidStructure = 700 => "invalid XML structure",
        XmlMissingNaming = 701 => "XML missing naming",
        XmlMissingSyntax = 702 => "XML missing syntax",
        XmlMissingProperty = 703 => "XML missing property",
        XmlUnknownElementAttribute = 704 => "XML unknown element attribute",
    }
}

result_codes! {
    /// Result of an X509 certificate store (`/vedsdk/X509CertificateStore/*`) call
    VaultResult {
        Success = 0 => "success",
        InvalidCallingAssembly = 1 => "invalid calling assembly",
        CreateDatabaseError = 2 => "create database error",
        UseDatabaseError = 3 => "use database error",
        CreateTableError = 4 => "create table error",
        CreateIndexError = 5 => "create index error",
        ConnectionError = 6 => "connection error",
        TransactionError = 7 => "transaction error",
        InvalidVaultId = 8 => "invalid vault id",
        InvalidParams = 9 => "invalid parameters",
        InsufficientPermissions = 10 => "insufficient permissions",
        CryptoFailure = 11 => "crypto failure",
        DeleteSecretFailed = 12 => "delete secret failed",
        AddSecretFailed = 13 => "add secret failed",
        RetrieveSecretFailed = 14 => "retrieve secret failed",
        RetrieveSecretTypeFailed = 15 => "retrieve secret type failed",
        GetNextVaultIdFailed = 16 => "get next vault id failed",
        DisassociateFailed = 17 => "disassociate failed",
        OwnerLookupFailed = 18 => "owner lookup failed",
        AssociateDataFailed = 19 => "associate data failed",
        LookupFailed = 20 => "lookup failed",
        InvalidKey = 21 => "invalid key",
        QueryError = 22 => "query error",
        SecurityGroupNotImplemented = 23 => "security group not implemented",
    }
}

impl ConfigResult {
    /// Whether the call succeeded
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl VaultResult {
    /// Whether the call succeeded
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}
