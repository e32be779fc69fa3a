//! Person Types
//!
//! Directory records as served by the Person API (IAM profile v2 shape).
//! Every attribute is optional on the wire: the listing endpoint returns
//! partially populated profiles.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// A directory record for one user.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Person {
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: StandardAttribute,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uuid: StandardAttribute,
    #[serde(default, deserialize_with = "null_as_default")]
    pub primary_email: StandardAttribute,
    #[serde(default, deserialize_with = "null_as_default")]
    pub primary_username: StandardAttribute,
    #[serde(default, deserialize_with = "null_as_default")]
    pub login_method: StandardAttribute,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active: Attribute<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: StandardAttribute,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: StandardAttribute,
    #[serde(default, deserialize_with = "null_as_default")]
    pub alternative_name: StandardAttribute,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fun_title: StandardAttribute,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timezone: StandardAttribute,
    #[serde(default, deserialize_with = "null_as_default")]
    pub access_information: AccessInformation,
    /// Profile attributes without a typed field.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Person {
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.value.as_deref()
    }

    pub fn uuid(&self) -> Option<&str> {
        self.uuid.value.as_deref()
    }

    pub fn primary_email(&self) -> Option<&str> {
        self.primary_email.value.as_deref()
    }

    pub fn primary_username(&self) -> Option<&str> {
        self.primary_username.value.as_deref()
    }

    /// Names of the LDAP groups this person belongs to.
    pub fn ldap_groups(&self) -> impl Iterator<Item = &str> {
        self.access_information.ldap.group_names()
    }

    /// Whether any of this person's LDAP groups is in `groups`.
    pub fn is_in_any_group(&self, groups: &HashSet<String>) -> bool {
        self.ldap_groups().any(|group| groups.contains(group))
    }
}

/// A single profile attribute with its publishing metadata.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Attribute<T> {
    #[serde(default)]
    pub value: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<serde_json::Value>,
}

impl<T> Default for Attribute<T> {
    fn default() -> Self {
        Self {
            value: None,
            metadata: None,
            signature: None,
        }
    }
}

impl<T> Attribute<T> {
    /// Attribute carrying only a value.
    pub fn new(value: T) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }
}

/// String-valued profile attribute.
pub type StandardAttribute = Attribute<String>;

/// Attribute publishing metadata.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

/// Access groups per publishing system.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct AccessInformation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ldap: AccessValues,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mozilliansorg: AccessValues,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hris: AccessValues,
    #[serde(default, deserialize_with = "null_as_default")]
    pub access_provider: AccessValues,
}

/// Group name to membership attribute mapping.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct AccessValues {
    #[serde(default)]
    pub values: Option<BTreeMap<String, Option<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<serde_json::Value>,
}

impl AccessValues {
    /// Mapping built from group names with empty membership attributes.
    pub fn from_groups<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: Some(groups.into_iter().map(|g| (g.into(), None)).collect()),
            ..Self::default()
        }
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().flat_map(|v| v.keys().map(String::as_str))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
