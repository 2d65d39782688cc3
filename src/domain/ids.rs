//! Identifier newtypes for every stored record.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Behaviour shared by record identifiers.
///
/// Ids are minted by the store on `create`; aggregators only echo them.
pub trait RecordId: Clone + Eq + Hash + fmt::Display + fmt::Debug + Send + Sync + 'static {
    /// Mint a fresh, unique identifier.
    fn generate() -> Self;

    /// True when the id has not been assigned yet.
    fn is_blank(&self) -> bool;
}

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl RecordId for $name {
            fn generate() -> Self {
                Self(uuid::Uuid::new_v4().simple().to_string())
            }

            fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

record_id!(
    /// Auth-provider uid; also the key of the user's profile record.
    UserId
);
record_id!(ClubId);
record_id!(EventId);
record_id!(RegistrationId);
record_id!(RequestId);
record_id!(ApplicationId);
record_id!(NotificationId);
record_id!(AnnouncementId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_and_not_blank() {
        let first = ClubId::generate();
        let second = ClubId::generate();
        assert_ne!(first, second);
        assert!(!first.is_blank());
    }

    #[test]
    fn whitespace_id_is_blank() {
        assert!(EventId::new("  ").is_blank());
        assert!(EventId::default().is_blank());
    }
}
