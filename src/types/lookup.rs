//! Lookup Types
//!
//! Identifier kinds accepted by the single-record lookup endpoint.

use std::fmt;
use std::str::FromStr;

use crate::error::PersonApiError;

/// Identifier used to look up a single person.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LookupKind {
    /// IAM user id, e.g. `ad|Mozilla-LDAP|jdoe`.
    UserId,
    /// Profile UUID.
    Uuid,
    /// Primary email address.
    PrimaryEmail,
    /// Primary username.
    PrimaryUsername,
}

impl LookupKind {
    /// All lookup kinds.
    pub const ALL: [LookupKind; 4] = [
        Self::UserId,
        Self::Uuid,
        Self::PrimaryEmail,
        Self::PrimaryUsername,
    ];

    /// Path segment used by `/v2/user/{segment}/{value}`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::UserId => "user_id",
            Self::Uuid => "uuid",
            Self::PrimaryEmail => "primary_email",
            Self::PrimaryUsername => "primary_username",
        }
    }

    /// Relative lookup path for `value`, percent-encoded as one segment.
    pub fn path(&self, value: &str) -> String {
        format!(
            "/v2/user/{}/{}",
            self.path_segment(),
            urlencoding::encode(value)
        )
    }
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl FromStr for LookupKind {
    type Err = PersonApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.path_segment() == s)
            .ok_or_else(|| PersonApiError::invalid_argument(format!("unknown lookup kind: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(LookupKind::UserId.path("abc"), "/v2/user/user_id/abc");
        assert_eq!(LookupKind::Uuid.path("abc"), "/v2/user/uuid/abc");
        assert_eq!(
            LookupKind::PrimaryEmail.path("jdoe@example.com"),
            "/v2/user/primary_email/jdoe%40example.com"
        );
        assert_eq!(
            LookupKind::PrimaryUsername.path("jdoe"),
            "/v2/user/primary_username/jdoe"
        );
        assert_eq!(
            LookupKind::UserId.path("ad|Mozilla-LDAP|jdoe"),
            "/v2/user/user_id/ad%7CMozilla-LDAP%7Cjdoe"
        );
    }

    #[test]
    fn test_parse() {
        for kind in LookupKind::ALL {
            assert_eq!(kind.to_string().parse::<LookupKind>().unwrap(), kind);
        }

        let error = "nickname".parse::<LookupKind>().unwrap_err();
        assert!(matches!(error, PersonApiError::InvalidArgument { .. }));
    }
}
