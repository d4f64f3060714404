//! Chainable SELECT / UPDATE builders for the `users` table
//!
//! Clauses are applied in call order: `filter` joins with AND, `or` with OR,
//! `not` with AND NOT. Rendering follows SQL precedence, so
//! `filter(a).filter(b).or(c)` reads `a AND b OR c`.

use sqlx::{MySql, QueryBuilder};

use super::{Filter, SqlValue};
use crate::error::{DbError, DbResult};
use crate::models::{Pagination, User, UserColumn};

pub(crate) const USERS_TABLE: &str = "users";

/// MySQL has no OFFSET without LIMIT; this is its documented "no limit".
const UNBOUNDED_LIMIT: &str = "18446744073709551615";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conjunction {
    And,
    Or,
}

/// SELECT over `users`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserQuery {
    columns: Vec<UserColumn>,
    clauses: Vec<(Conjunction, Filter)>,
    order: Vec<(UserColumn, Direction)>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl UserQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows whose primary key equals `id`.
    pub fn by_id(id: impl Into<SqlValue>) -> Self {
        Self::new().filter(Filter::eq(UserColumn::Id, id))
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.clauses.push((Conjunction::And, filter));
        self
    }

    pub fn or(mut self, filter: Filter) -> Self {
        self.clauses.push((Conjunction::Or, filter));
        self
    }

    pub fn not(self, filter: Filter) -> Self {
        self.filter(!filter)
    }

    /// Restrict the selected columns. An empty slice selects every column.
    pub fn select(mut self, columns: &[UserColumn]) -> Self {
        self.columns = columns.to_vec();
        self
    }

    pub fn order_by(mut self, column: UserColumn, direction: Direction) -> Self {
        self.order.push((column, direction));
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn paginate(self, page: Pagination) -> Self {
        self.limit(page.limit()).offset(page.offset())
    }

    /// Same conditions, ordered by primary key only, first row only.
    pub(crate) fn single_by_key(mut self, direction: Option<Direction>) -> Self {
        self.order = direction
            .map(|d| vec![(UserColumn::Id, d)])
            .unwrap_or_default();
        self.limit = Some(1);
        self.offset = None;
        self
    }

    /// Rendered SELECT text, placeholders included.
    pub fn to_sql(&self) -> String {
        self.build_select().sql().to_owned()
    }

    pub(crate) fn build_select(&self) -> QueryBuilder<'static, MySql> {
        let columns = if self.columns.is_empty() {
            &UserColumn::ALL[..]
        } else {
            &self.columns[..]
        };

        let mut builder = QueryBuilder::new("SELECT ");
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                builder.push(", ");
            }
            builder.push(column.as_str());
        }
        builder.push(" FROM ").push(USERS_TABLE);

        self.push_where(&mut builder);

        if !self.order.is_empty() {
            builder.push(" ORDER BY ");
            for (i, (column, direction)) in self.order.iter().enumerate() {
                if i > 0 {
                    builder.push(", ");
                }
                builder
                    .push(column.as_str())
                    .push(" ")
                    .push(direction.as_sql());
            }
        }

        match (self.limit, self.offset) {
            (Some(limit), offset) => {
                builder.push(" LIMIT ").push_bind(limit);
                if let Some(offset) = offset {
                    builder.push(" OFFSET ").push_bind(offset);
                }
            }
            (None, Some(offset)) => {
                builder
                    .push(" LIMIT ")
                    .push(UNBOUNDED_LIMIT)
                    .push(" OFFSET ")
                    .push_bind(offset);
            }
            (None, None) => {}
        }

        builder
    }

    /// COUNT(*) with the same conditions; ordering and paging are ignored.
    pub(crate) fn build_count(&self) -> QueryBuilder<'static, MySql> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM ");
        builder.push(USERS_TABLE);
        self.push_where(&mut builder);
        builder
    }

    fn push_where(&self, builder: &mut QueryBuilder<'static, MySql>) {
        for (i, (conjunction, filter)) in self.clauses.iter().enumerate() {
            builder.push(match (i, conjunction) {
                (0, _) => " WHERE ",
                (_, Conjunction::And) => " AND ",
                (_, Conjunction::Or) => " OR ",
            });
            filter.push_to(builder, true);
        }
    }
}

/// Column assignments for an UPDATE over `users`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    assignments: Vec<(UserColumn, SqlValue)>,
}

impl UserUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `value` to `column`, empty values included. A later `set` of the
    /// same column replaces the earlier one.
    pub fn set(mut self, column: UserColumn, value: impl Into<SqlValue>) -> Self {
        let value = value.into();
        match self.assignments.iter_mut().find(|(c, _)| *c == column) {
            Some(existing) => existing.1 = value,
            None => self.assignments.push((column, value)),
        }
        self
    }

    /// Assign every non-empty field of `user` except the primary key.
    pub fn from_user(user: &User) -> Self {
        user.column_values()
            .into_iter()
            .filter(|(column, value)| *column != UserColumn::Id && !value.is_empty())
            .fold(Self::new(), |update, (column, value)| update.set(column, value))
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = UserColumn> + '_ {
        self.assignments.iter().map(|(c, _)| *c)
    }

    /// Render `UPDATE users SET ... WHERE ...`.
    ///
    /// Rejects empty assignments and filters that would touch every row.
    pub fn build(&self, filter: &Filter) -> DbResult<QueryBuilder<'static, MySql>> {
        if self.is_empty() {
            return Err(DbError::EmptyUpdate { resource: "user" });
        }
        if filter.matches_everything() {
            return Err(DbError::MissingWhereClause { resource: "user" });
        }

        let mut builder = QueryBuilder::new("UPDATE ");
        builder.push(USERS_TABLE).push(" SET ");
        for (i, (column, value)) in self.assignments.iter().enumerate() {
            if i > 0 {
                builder.push(", ");
            }
            builder.push(column.as_str()).push(" = ");
            value.push_bind(&mut builder);
        }
        builder.push(" WHERE ");
        filter.push_to(&mut builder, false);

        Ok(builder)
    }
}
