//! Pure mapping from user records to table cells.
//!
//! Rows keep input order. Nothing is sorted, deduplicated or dropped.

use crate::users::{UserRecord, UserStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserColumn {
    Name,
    Email,
    Phone,
    Role,
    Status,
    Actions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    Text(String),
    StatusTag(UserStatus),
    EditAction { email: String },
}

impl UserColumn {
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Role,
        Self::Status,
        Self::Actions,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Role => "Role",
            Self::Status => "Status",
            Self::Actions => "Actions",
        }
    }

    pub fn render(self, user: &UserRecord) -> CellContent {
        match self {
            Self::Name => CellContent::Text(user.display_name().to_owned()),
            Self::Email => CellContent::Text(user.email.clone()),
            Self::Phone => CellContent::Text(user.display_phone().to_owned()),
            Self::Role => CellContent::Text(user.display_role().to_owned()),
            Self::Status => CellContent::StatusTag(user.status()),
            Self::Actions => CellContent::EditAction {
                email: user.email.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub email: String,
    pub cells: Vec<CellContent>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersTableModel {
    pub headers: Vec<&'static str>,
    pub rows: Vec<UserRow>,
    pub footer: String,
}

impl UsersTableModel {
    pub fn build(users: &[UserRecord]) -> Self {
        let rows = users
            .iter()
            .map(|user| UserRow {
                email: user.email.clone(),
                cells: UserColumn::ALL.iter().map(|c| c.render(user)).collect(),
            })
            .collect();

        Self {
            headers: UserColumn::ALL.iter().map(|c| c.header()).collect(),
            rows,
            footer: format!("{} users", users.len()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
