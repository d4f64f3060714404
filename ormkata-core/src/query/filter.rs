//! WHERE conditions over the `users` table
//!
//! Leaves render bare (`first_name LIKE ?`); AND/OR groups render in
//! parentheses when embedded in a larger expression.

use sqlx::{MySql, QueryBuilder};

use super::SqlValue;
use crate::models::{User, UserColumn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    Eq(UserColumn, SqlValue),
    Ne(UserColumn, SqlValue),
    Like(UserColumn, String),
    /// Empty list matches nothing.
    In(UserColumn, Vec<SqlValue>),
    /// Empty group matches everything.
    All(Vec<Filter>),
    /// Empty group matches nothing.
    Any(Vec<Filter>),
    Not(Box<Filter>),
}

impl Filter {
    pub fn eq(column: UserColumn, value: impl Into<SqlValue>) -> Self {
        Self::Eq(column, value.into())
    }

    pub fn ne(column: UserColumn, value: impl Into<SqlValue>) -> Self {
        Self::Ne(column, value.into())
    }

    pub fn like(column: UserColumn, pattern: impl Into<String>) -> Self {
        Self::Like(column, pattern.into())
    }

    pub fn is_in<I, V>(column: UserColumn, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<SqlValue>,
    {
        Self::In(column, values.into_iter().map(Into::into).collect())
    }

    pub fn all(filters: impl IntoIterator<Item = Filter>) -> Self {
        Self::All(filters.into_iter().collect())
    }

    pub fn any(filters: impl IntoIterator<Item = Filter>) -> Self {
        Self::Any(filters.into_iter().collect())
    }

    /// Struct condition: equality on every non-empty mapped field of `user`.
    pub fn matching(user: &User) -> Self {
        Self::All(
            user.column_values()
                .into_iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(column, value)| Self::eq(column, value))
                .collect(),
        )
    }

    /// Map condition: equality on every entry, empty values included.
    pub fn from_map<I, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (UserColumn, V)>,
        V: Into<SqlValue>,
    {
        Self::All(
            entries
                .into_iter()
                .map(|(column, value)| Self::eq(column, value))
                .collect(),
        )
    }

    /// True when the filter holds for every row, whatever the row contains.
    pub fn matches_everything(&self) -> bool {
        self.constant() == Constant::True
    }

    /// True when the filter can never hold.
    pub fn matches_nothing(&self) -> bool {
        self.constant() == Constant::False
    }

    fn constant(&self) -> Constant {
        match self {
            Self::Eq(..) | Self::Ne(..) | Self::Like(..) => Constant::Depends,
            Self::In(_, values) if values.is_empty() => Constant::False,
            Self::In(..) => Constant::Depends,
            Self::All(filters) => {
                let mut result = Constant::True;
                for filter in filters {
                    match filter.constant() {
                        Constant::False => return Constant::False,
                        Constant::Depends => result = Constant::Depends,
                        Constant::True => {}
                    }
                }
                result
            }
            Self::Any(filters) => {
                let mut result = Constant::False;
                for filter in filters {
                    match filter.constant() {
                        Constant::True => return Constant::True,
                        Constant::Depends => result = Constant::Depends,
                        Constant::False => {}
                    }
                }
                result
            }
            Self::Not(inner) => match inner.constant() {
                Constant::True => Constant::False,
                Constant::False => Constant::True,
                Constant::Depends => Constant::Depends,
            },
        }
    }

    pub(crate) fn push_to(&self, builder: &mut QueryBuilder<'_, MySql>, grouped: bool) {
        match self {
            Self::Eq(column, value) => {
                builder.push(column.as_str()).push(" = ");
                value.push_bind(builder);
            }
            Self::Ne(column, value) => {
                builder.push(column.as_str()).push(" <> ");
                value.push_bind(builder);
            }
            Self::Like(column, pattern) => {
                builder
                    .push(column.as_str())
                    .push(" LIKE ")
                    .push_bind(pattern.clone());
            }
            Self::In(_, values) if values.is_empty() => {
                builder.push("1 = 0");
            }
            Self::In(column, values) => {
                builder.push(column.as_str()).push(" IN (");
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        builder.push(", ");
                    }
                    value.push_bind(builder);
                }
                builder.push(")");
            }
            Self::All(filters) => push_group(builder, filters, " AND ", "1 = 1", grouped),
            Self::Any(filters) => push_group(builder, filters, " OR ", "1 = 0", grouped),
            Self::Not(inner) => {
                builder.push("NOT (");
                inner.push_to(builder, false);
                builder.push(")");
            }
        }
    }
}

fn push_group(
    builder: &mut QueryBuilder<'_, MySql>,
    filters: &[Filter],
    separator: &str,
    when_empty: &str,
    grouped: bool,
) {
    match filters {
        [] => {
            builder.push(when_empty);
        }
        [only] => only.push_to(builder, grouped),
        _ => {
            if grouped {
                builder.push("(");
            }
            for (i, filter) in filters.iter().enumerate() {
                if i > 0 {
                    builder.push(separator);
                }
                filter.push_to(builder, true);
            }
            if grouped {
                builder.push(")");
            }
        }
    }
}

/// Outcome of a filter when it does not depend on row contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Constant {
    True,
    False,
    Depends,
}

impl std::ops::Not for Filter {
    type Output = Filter;

    fn not(self) -> Filter {
        Filter::Not(Box::new(self))
    }
}
