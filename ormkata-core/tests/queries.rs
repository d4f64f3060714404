//! Single-object lookups, conditions, projections and paging over the demo users
//!
//! Demo users: `1` Aditya Jago Prasetyo, `2`..`9` User2..User9,
//! `10`..`12` "User 10".."User 12", all with password `rahasia`.

use std::collections::BTreeMap;

use anyhow::Result;
use ormkata_core::seed::seed;
use ormkata_core::{
    Direction, Filter, Name, Pagination, SqlValue, User, UserColumn, UserQuery, UserRepo,
    UserResponse,
};
use sqlx::MySqlPool;

fn ids(users: &[User]) -> Vec<&str> {
    users.iter().map(|u| u.id.as_str()).collect()
}

fn like_user() -> Filter {
    Filter::like(UserColumn::FirstName, "%User%")
}

fn password_is(password: &str) -> Filter {
    Filter::eq(UserColumn::Password, password)
}

#[sqlx::test(migrator = "ormkata_core::MIGRATOR")]
#[ignore = "requires MySQL (set DATABASE_URL)"]
async fn first_and_last_order_by_string_key(pool: MySqlPool) -> Result<()> {
    seed(&pool).await?;
    let repo = UserRepo::new(&pool);

    let everyone = UserQuery::new();
    assert_eq!(repo.first(&everyone).await?.id, "1");
    // "9" sorts after "12"
    assert_eq!(repo.last(&everyone).await?.id, "9");
    assert_eq!(repo.count(&everyone).await?, 12);
    Ok(())
}

#[sqlx::test(migrator = "ormkata_core::MIGRATOR")]
#[ignore = "requires MySQL (set DATABASE_URL)"]
async fn take_with_inline_condition(pool: MySqlPool) -> Result<()> {
    seed(&pool).await?;
    let repo = UserRepo::new(&pool);

    let user = repo.take(&UserQuery::by_id(1)).await?;
    assert_eq!(user.id, "1");
    assert_eq!(user.name.first_name, "Aditya");

    let user = repo.get("10").await?;
    assert_eq!(user.name, Name::first("User 10"));
    Ok(())
}

#[sqlx::test(migrator = "ormkata_core::MIGRATOR")]
#[ignore = "requires MySQL (set DATABASE_URL)"]
async fn lookups_without_a_match(pool: MySqlPool) -> Result<()> {
    seed(&pool).await?;
    let repo = UserRepo::new(&pool);

    let err = repo
        .first(&UserQuery::new().filter(Filter::like(UserColumn::FirstName, "%nobody%")))
        .await
        .unwrap_err();
    assert!(err.is_not_found(), "unexpected error: {err}");

    let err = repo.get("404").await.unwrap_err();
    assert_eq!(err.to_string(), "not found: user '404'");
    Ok(())
}

#[sqlx::test(migrator = "ormkata_core::MIGRATOR")]
#[ignore = "requires MySQL (set DATABASE_URL)"]
async fn find_with_in_list(pool: MySqlPool) -> Result<()> {
    seed(&pool).await?;
    let repo = UserRepo::new(&pool);

    let query = UserQuery::new()
        .filter(Filter::is_in(UserColumn::Id, ["1", "2", "3", "4", "5"]))
        .order_by(UserColumn::Id, Direction::Asc);
    let users = repo.find(&query).await?;
    assert_eq!(ids(&users), vec!["1", "2", "3", "4", "5"]);

    let none = repo
        .find(&UserQuery::new().filter(Filter::is_in(UserColumn::Id, Vec::<String>::new())))
        .await?;
    assert!(none.is_empty());
    Ok(())
}

#[sqlx::test(migrator = "ormkata_core::MIGRATOR")]
#[ignore = "requires MySQL (set DATABASE_URL)"]
async fn chained_conditions(pool: MySqlPool) -> Result<()> {
    seed(&pool).await?;
    let repo = UserRepo::new(&pool);

    let and = UserQuery::new().filter(like_user()).filter(password_is("rahasia"));
    assert_eq!(repo.find(&and).await?.len(), 11);

    let or = UserQuery::new().filter(like_user()).or(password_is("rahasia"));
    assert_eq!(repo.find(&or).await?.len(), 12);

    let not = UserQuery::new().not(like_user()).filter(password_is("rahasia"));
    let users = repo.find(&not).await?;
    assert_eq!(ids(&users), vec!["1"]);
    Ok(())
}

#[sqlx::test(migrator = "ormkata_core::MIGRATOR")]
#[ignore = "requires MySQL (set DATABASE_URL)"]
async fn struct_condition_ignores_empty_fields(pool: MySqlPool) -> Result<()> {
    seed(&pool).await?;
    let repo = UserRepo::new(&pool);

    let condition = User {
        password: "rahasia".into(),
        name: Name {
            first_name: "User 10".into(),
            // Empty, so not part of the condition
            last_name: String::new(),
            ..Name::default()
        },
        ..User::default()
    };

    let users = repo
        .find(&UserQuery::new().filter(Filter::matching(&condition)))
        .await?;
    assert_eq!(ids(&users), vec!["10"]);
    Ok(())
}

#[sqlx::test(migrator = "ormkata_core::MIGRATOR")]
#[ignore = "requires MySQL (set DATABASE_URL)"]
async fn map_condition_keeps_empty_values(pool: MySqlPool) -> Result<()> {
    seed(&pool).await?;
    let repo = UserRepo::new(&pool);

    let mut condition: BTreeMap<UserColumn, SqlValue> = BTreeMap::new();
    condition.insert(UserColumn::MiddleName, "".into());
    condition.insert(UserColumn::LastName, "".into());

    let users = repo
        .find(&UserQuery::new().filter(Filter::from_map(condition)))
        .await?;
    assert_eq!(users.len(), 11);
    assert!(users.iter().all(|u| u.id != "1"));
    Ok(())
}

#[sqlx::test(migrator = "ormkata_core::MIGRATOR")]
#[ignore = "requires MySQL (set DATABASE_URL)"]
async fn order_limit_offset(pool: MySqlPool) -> Result<()> {
    seed(&pool).await?;
    let repo = UserRepo::new(&pool);

    let query = UserQuery::new()
        .order_by(UserColumn::Id, Direction::Asc)
        .order_by(UserColumn::FirstName, Direction::Desc)
        .limit(5)
        .offset(5);
    let users = repo.find(&query).await?;
    assert_eq!(ids(&users), vec!["3", "4", "5", "6", "7"]);
    Ok(())
}

#[sqlx::test(migrator = "ormkata_core::MIGRATOR")]
#[ignore = "requires MySQL (set DATABASE_URL)"]
async fn selected_fields_leave_the_rest_empty(pool: MySqlPool) -> Result<()> {
    seed(&pool).await?;
    let repo = UserRepo::new(&pool);

    let users = repo
        .find(&UserQuery::new().select(&[UserColumn::Id, UserColumn::FirstName]))
        .await?;

    assert_eq!(users.len(), 12);
    for user in &users {
        assert!(!user.id.is_empty());
        assert!(!user.name.first_name.is_empty());
        assert!(user.password.is_empty());
    }
    Ok(())
}

#[sqlx::test(migrator = "ormkata_core::MIGRATOR")]
#[ignore = "requires MySQL (set DATABASE_URL)"]
async fn projection_into_non_model_struct(pool: MySqlPool) -> Result<()> {
    seed(&pool).await?;
    let repo = UserRepo::new(&pool);

    let query = UserQuery::new()
        .select(&[UserColumn::Id, UserColumn::FirstName, UserColumn::LastName])
        .filter(Filter::eq(UserColumn::Id, "1"));
    let rows: Vec<UserResponse> = repo.find_as(&query).await?;

    assert_eq!(
        rows,
        vec![UserResponse {
            id: "1".into(),
            first_name: "Aditya".into(),
            last_name: "Prasetyo".into(),
        }]
    );

    let all: Vec<UserResponse> = repo
        .find_as(&UserQuery::new().select(&[
            UserColumn::Id,
            UserColumn::FirstName,
            UserColumn::LastName,
        ]))
        .await?;
    assert_eq!(all.len(), 12);
    Ok(())
}

#[sqlx::test(migrator = "ormkata_core::MIGRATOR")]
#[ignore = "requires MySQL (set DATABASE_URL)"]
async fn count_and_page(pool: MySqlPool) -> Result<()> {
    seed(&pool).await?;
    let repo = UserRepo::new(&pool);

    let query = UserQuery::new()
        .filter(password_is("rahasia"))
        .order_by(UserColumn::Id, Direction::Asc);
    assert_eq!(repo.count(&query).await?, 12);

    let page = repo.page(&query, Pagination::new(3, 5)).await?;
    assert_eq!(page.total, 12);
    assert_eq!(page.total_pages(), 3);
    assert!(!page.has_next());
    assert_eq!(ids(&page.items), vec!["8", "9"]);
    Ok(())
}
