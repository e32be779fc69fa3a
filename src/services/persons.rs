//! Person directory operations.

use std::collections::HashSet;
use tracing::{debug, warn};

use crate::client::PersonApiClient;
use crate::core::HttpTransport;
use crate::error::{PersonApiError, PersonApiResult};
use crate::pagination::{users_path, NextPage, UsersPage};
use crate::types::{LookupKind, Person};

/// Service for person lookups and listings.
pub struct PersonsService<'a, T: HttpTransport> {
    client: &'a PersonApiClient<T>,
}

impl<'a, T: HttpTransport> PersonsService<'a, T> {
    /// Creates a new persons service.
    pub fn new(client: &'a PersonApiClient<T>) -> Self {
        Self { client }
    }

    /// Gets a single person by identifier.
    pub async fn get(&self, kind: LookupKind, value: &str) -> PersonApiResult<Person> {
        if value.is_empty() {
            return Err(PersonApiError::invalid_argument(format!(
                "empty {} lookup value",
                kind
            )));
        }

        let path = kind.path(value);
        let credentials = self.client.credentials().read().await;
        self.client.get_json(&credentials, &path, "person").await
    }

    /// Gets a single person, naming the identifier kind by its path segment
    /// (`user_id`, `uuid`, `primary_email` or `primary_username`).
    pub async fn get_by_kind(&self, kind: &str, value: &str) -> PersonApiResult<Person> {
        let kind: LookupKind = kind.parse()?;
        self.get(kind, value).await
    }

    /// Lists every person in the directory.
    ///
    /// Walks the cursor chain until the server reports the last page. The
    /// read lock is held for the whole walk. Any failing page aborts the walk
    /// and nothing collected so far is returned.
    pub async fn list_all(&self) -> PersonApiResult<Vec<Person>> {
        let credentials = self.client.credentials().read().await;

        let mut persons = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let path = users_path(cursor.as_deref());
            let page: UsersPage = self
                .client
                .get_json(&credentials, &path, "users page")
                .await?;
            pages += 1;

            debug!(page = pages, items = page.items.len(), "Fetched users page");

            let next = page.next();
            persons.extend(page.items);

            match next {
                NextPage::Cursor(next_cursor) => cursor = Some(next_cursor),
                NextPage::Done => break,
                NextPage::Missing => {
                    warn!(page = pages, "Users page carried no next-page cursor, stopping");
                    break;
                }
            }
        }

        Ok(persons)
    }

    /// Lists the people belonging to at least one of `groups` (LDAP).
    ///
    /// Each person appears once, in listing order.
    pub async fn list_in_groups<I, S>(&self, groups: I) -> PersonApiResult<Vec<Person>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let groups: HashSet<String> = groups.into_iter().map(Into::into).collect();
        let persons = self.list_all().await?;

        Ok(persons
            .into_iter()
            .filter(|person| person.is_in_any_group(&groups))
            .collect())
    }
}
