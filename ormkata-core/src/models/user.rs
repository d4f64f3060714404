//! `users` table records
//!
//! `Name` is flattened into the owning row (`first_name`, `middle_name`,
//! `last_name`). `User::information` lives only in memory.

use std::fmt;

use serde::Serialize;
use sqlx::FromRow;

/// Columns of the `users` table.
///
/// Only these names are ever spliced into SQL text; values always travel as
/// bound parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UserColumn {
    Id,
    Password,
    FirstName,
    MiddleName,
    LastName,
}

impl UserColumn {
    pub const ALL: [UserColumn; 5] = [
        Self::Id,
        Self::Password,
        Self::FirstName,
        Self::MiddleName,
        Self::LastName,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Password => "password",
            Self::FirstName => "first_name",
            Self::MiddleName => "middle_name",
            Self::LastName => "last_name",
        }
    }
}

impl fmt::Display for UserColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Person name embedded in [`User`]
///
/// Columns missing from a projection decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize)]
pub struct Name {
    #[sqlx(default)]
    pub first_name: String,
    #[sqlx(default)]
    pub middle_name: String,
    #[sqlx(default)]
    pub last_name: String,
}

impl Name {
    /// Name with only a first name; the other parts stay empty.
    pub fn first(first_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            ..Self::default()
        }
    }

    pub fn full(
        first_name: impl Into<String>,
        middle_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            middle_name: middle_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [&self.first_name, &self.middle_name, &self.last_name];
        let mut first = true;
        for part in parts.into_iter().filter(|p| !p.is_empty()) {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(part)?;
            first = false;
        }
        Ok(())
    }
}

/// Row of the `users` table
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize)]
pub struct User {
    pub id: String,
    #[sqlx(default)]
    pub password: String,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub name: Name,
    /// Never persisted.
    #[sqlx(skip)]
    #[serde(skip)]
    pub information: String,
}

impl User {
    pub fn new(id: impl Into<String>, password: impl Into<String>, name: Name) -> Self {
        Self {
            id: id.into(),
            password: password.into(),
            name,
            information: String::new(),
        }
    }

    /// Mapped column values in [`UserColumn::ALL`] order.
    pub fn column_values(&self) -> [(UserColumn, &str); 5] {
        [
            (UserColumn::Id, self.id.as_str()),
            (UserColumn::Password, self.password.as_str()),
            (UserColumn::FirstName, self.name.first_name.as_str()),
            (UserColumn::MiddleName, self.name.middle_name.as_str()),
            (UserColumn::LastName, self.name.last_name.as_str()),
        ]
    }
}

/// Projection of `users` that is not a model of its own
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}
