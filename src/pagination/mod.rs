//! Cursor pagination for the Person API user listing.

use serde::Deserialize;

use crate::types::Person;

/// Cursor value the listing endpoint uses to mark the last page.
pub const END_OF_PAGES: &str = "None";

/// Listing endpoint path.
pub const USERS_PATH: &str = "/v2/users";

/// A single page of the user listing.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UsersPage {
    /// The people on this page, in server order.
    #[serde(rename = "Items", default)]
    pub items: Vec<Person>,
    /// Raw next-page cursor.
    #[serde(rename = "nextPage", default)]
    pub next_page: Option<String>,
}

impl UsersPage {
    /// Where to go after this page.
    pub fn next(&self) -> NextPage {
        NextPage::from_cursor(self.next_page.as_deref())
    }
}

/// Continuation state derived from a page's cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NextPage {
    /// More pages follow; the cursor is echoed back verbatim.
    Cursor(String),
    /// Server signalled the end with the `"None"` sentinel.
    Done,
    /// Cursor was missing or empty. Treated as the end of the listing.
    Missing,
}

impl NextPage {
    pub fn from_cursor(cursor: Option<&str>) -> Self {
        match cursor {
            Some(END_OF_PAGES) => Self::Done,
            None | Some("") => Self::Missing,
            Some(cursor) => Self::Cursor(cursor.to_string()),
        }
    }
}

/// Relative path for a listing request.
///
/// The cursor goes into a JSON-shaped query value without escaping; the
/// server expects exactly this form.
pub fn users_path(cursor: Option<&str>) -> String {
    match cursor {
        None => USERS_PATH.to_string(),
        Some(cursor) => format!("{}?nextPage={{\"id\":\"{}\"}}", USERS_PATH, cursor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_path() {
        assert_eq!(users_path(None), "/v2/users");
        assert_eq!(users_path(Some("A")), r#"/v2/users?nextPage={"id":"A"}"#);
        assert_eq!(
            users_path(Some("ad|Mozilla-LDAP|jdoe")),
            r#"/v2/users?nextPage={"id":"ad|Mozilla-LDAP|jdoe"}"#
        );
    }

    #[test]
    fn test_next_page() {
        assert_eq!(NextPage::from_cursor(Some("None")), NextPage::Done);
        assert_eq!(NextPage::from_cursor(Some("")), NextPage::Missing);
        assert_eq!(NextPage::from_cursor(None), NextPage::Missing);
        assert_eq!(
            NextPage::from_cursor(Some("none")),
            NextPage::Cursor("none".to_string())
        );
    }

    #[test]
    fn test_decode_page() {
        let page: UsersPage = serde_json::from_str(
            r#"{"Items":[{"user_id":{"value":"a"}},{"user_id":{"value":"b"}}],"nextPage":"abc"}"#,
        )
        .unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].user_id(), Some("b"));
        assert_eq!(page.next(), NextPage::Cursor("abc".to_string()));

        let last: UsersPage = serde_json::from_str(r#"{"Items":[],"nextPage":"None"}"#).unwrap();
        assert!(last.items.is_empty());
        assert_eq!(last.next(), NextPage::Done);
    }
}
