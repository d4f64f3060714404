//! User repository
//!
//! Writes go through executor-generic functions so they run the same way on
//! the pool and inside a transaction. Reads take a [`UserQuery`].

use sqlx::mysql::MySqlRow;
use sqlx::{Executor, FromRow, MySql, MySqlPool, QueryBuilder};

use crate::error::{DbError, DbResult};
use crate::models::{Paginated, Pagination, User, UserColumn};
use crate::query::user_query::USERS_TABLE;
use crate::query::{Direction, Filter, SqlValue, UserQuery, UserUpdate};

fn insert_builder(users: &[User]) -> QueryBuilder<'_, MySql> {
    let columns = UserColumn::ALL.map(UserColumn::as_str).join(", ");
    let mut builder = QueryBuilder::new(format!("INSERT INTO {} ({}) ", USERS_TABLE, columns));
    builder.push_values(users, |mut row, user| {
        for (_, value) in user.column_values() {
            row.push_bind(value);
        }
    });
    builder
}

/// Insert one user. Returns affected rows (1).
pub async fn insert_user<'c, E>(executor: E, user: &User) -> DbResult<u64>
where
    E: Executor<'c, Database = MySql>,
{
    insert_users(executor, std::slice::from_ref(user)).await
}

/// Insert many users with a single multi-row INSERT.
///
/// An empty slice sends nothing and returns 0.
pub async fn insert_users<'c, E>(executor: E, users: &[User]) -> DbResult<u64>
where
    E: Executor<'c, Database = MySql>,
{
    if users.is_empty() {
        return Ok(0);
    }

    let mut builder = insert_builder(users);
    let result = builder.build().execute(executor).await?;

    tracing::debug!(rows = result.rows_affected(), "inserted users");
    Ok(result.rows_affected())
}

/// Write every mapped column, inserting when the id does not exist yet.
///
/// MySQL reports 1 affected row for an insert, 2 for a changed row and 0 for
/// an unchanged one.
pub async fn save_user<'c, E>(executor: E, user: &User) -> DbResult<u64>
where
    E: Executor<'c, Database = MySql>,
{
    let mut builder = insert_builder(std::slice::from_ref(user));
    builder.push(" ON DUPLICATE KEY UPDATE ");
    let assignments = UserColumn::ALL
        .iter()
        .filter(|c| **c != UserColumn::Id)
        .map(|c| format!("{0} = VALUES({0})", c.as_str()))
        .collect::<Vec<_>>()
        .join(", ");
    builder.push(assignments);

    let result = builder.build().execute(executor).await?;
    tracing::debug!(id = %user.id, rows = result.rows_affected(), "saved user");
    Ok(result.rows_affected())
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &User) -> DbResult<u64> {
        insert_user(self.pool, user).await
    }

    pub async fn create_batch(&self, users: &[User]) -> DbResult<u64> {
        insert_users(self.pool, users).await
    }

    pub async fn save(&self, user: &User) -> DbResult<u64> {
        save_user(self.pool, user).await
    }

    /// First row by primary key. Keys are strings, so ordering is lexicographic.
    pub async fn first(&self, query: &UserQuery) -> DbResult<User> {
        self.fetch_one(query.clone().single_by_key(Some(Direction::Asc)))
            .await
    }

    /// Last row by primary key.
    pub async fn last(&self, query: &UserQuery) -> DbResult<User> {
        self.fetch_one(query.clone().single_by_key(Some(Direction::Desc)))
            .await
    }

    /// Any one matching row, no ordering.
    pub async fn take(&self, query: &UserQuery) -> DbResult<User> {
        self.fetch_one(query.clone().single_by_key(None)).await
    }

    pub async fn get(&self, id: impl Into<SqlValue>) -> DbResult<User> {
        let id = id.into();
        match self.take(&UserQuery::by_id(id.clone())).await {
            Err(DbError::Sqlx(sqlx::Error::RowNotFound)) => Err(DbError::NotFound {
                resource: "user",
                id: id.to_string(),
            }),
            other => other,
        }
    }

    /// Matching users. Columns left out by `select` come back empty.
    pub async fn find(&self, query: &UserQuery) -> DbResult<Vec<User>> {
        self.find_as(query).await
    }

    /// Matching rows mapped into a projection such as `UserResponse`.
    pub async fn find_as<T>(&self, query: &UserQuery) -> DbResult<Vec<T>>
    where
        T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
    {
        let mut builder = query.build_select();
        let rows = builder.build_query_as::<T>().fetch_all(self.pool).await?;
        tracing::debug!(count = rows.len(), "fetched users");
        Ok(rows)
    }

    pub async fn count(&self, query: &UserQuery) -> DbResult<i64> {
        let mut builder = query.build_count();
        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(self.pool)
            .await?;
        Ok(total)
    }

    pub async fn page(&self, query: &UserQuery, page: Pagination) -> DbResult<Paginated<User>> {
        let total = self.count(query).await?;
        let items = self.find(&query.clone().paginate(page)).await?;

        Ok(Paginated {
            items,
            total,
            page: page.page,
            per_page: page.per_page,
        })
    }

    /// Update the assigned columns on rows matching `filter`.
    pub async fn update(&self, filter: &Filter, update: &UserUpdate) -> DbResult<u64> {
        let mut builder = update.build(filter)?;
        let result = builder.build().execute(self.pool).await?;

        tracing::debug!(rows = result.rows_affected(), "updated users");
        Ok(result.rows_affected())
    }

    async fn fetch_one(&self, query: UserQuery) -> DbResult<User> {
        let mut builder = query.build_select();
        let user = builder
            .build_query_as::<User>()
            .fetch_one(self.pool)
            .await?;
        Ok(user)
    }
}
