//! Merchant user records as served by `/merchant/v1/users`.

use serde::{Deserialize, Serialize};

/// Placeholder rendered for missing optional values.
pub const MISSING: &str = "-";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default)]
    pub full_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    /// The first entry is the role shown in the table.
    #[serde(default)]
    pub user_role: Vec<String>,
    #[serde(default)]
    pub user_status: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserStatus {
    Enabled,
    Disabled,
}

impl UserStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Enabled => "Enabled",
            Self::Disabled => "Disabled",
        }
    }
}

impl From<bool> for UserStatus {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }
}

fn or_missing(value: Option<&str>) -> &str {
    value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(MISSING)
}

impl UserRecord {
    pub fn display_name(&self) -> &str {
        or_missing(self.full_name.as_deref())
    }

    pub fn display_phone(&self) -> &str {
        or_missing(self.phone_number.as_deref())
    }

    pub fn display_role(&self) -> &str {
        or_missing(self.primary_role())
    }

    pub fn primary_role(&self) -> Option<&str> {
        self.user_role.first().map(String::as_str)
    }

    pub fn status(&self) -> UserStatus {
        self.user_status.into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListResponse {
    #[serde(default)]
    pub users_list: Vec<UserRecord>,
}

/// Editable copy of a [`UserRecord`]. `email` is the key and stays read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditUserForm {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub role: String,
    pub enabled: bool,
}

impl EditUserForm {
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            full_name: record.full_name.clone().unwrap_or_default(),
            email: record.email.clone(),
            phone_number: record.phone_number.clone().unwrap_or_default(),
            role: record.primary_role().unwrap_or_default().to_owned(),
            enabled: record.user_status,
        }
    }
}

/// PATCH body: only the fields that changed are serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_role: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_status: Option<bool>,
}

impl UserPatch {
    /// Fields of `form` that differ from `original`. Text is compared trimmed.
    pub fn diff(original: &UserRecord, form: &EditUserForm) -> Self {
        let changed = |before: Option<&str>, after: &str| {
            let after = after.trim();
            (before.unwrap_or_default().trim() != after).then(|| after.to_owned())
        };

        let user_role = changed(original.primary_role(), &form.role).map(|role| {
            // only the primary role is editable; keep the rest as served
            let mut roles = original.user_role.clone();
            match roles.first_mut() {
                Some(first) => *first = role,
                None => roles.push(role),
            }
            roles.retain(|r| !r.is_empty());
            roles
        });

        Self {
            full_name: changed(original.full_name.as_deref(), &form.full_name),
            phone_number: changed(original.phone_number.as_deref(), &form.phone_number),
            user_role,
            user_status: (original.user_status != form.enabled).then_some(form.enabled),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.phone_number.is_none()
            && self.user_role.is_none()
            && self.user_status.is_none()
    }
}
