use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use ormkata_core::{
    DatabaseConfig, Direction, Filter, Pagination, User, UserColumn, UserQuery, UserRepo,
};

use super::{connect, print_json};

#[derive(Args, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Subcommand, Debug)]
pub enum UsersCommand {
    /// List users, one page at a time
    List(ListArgs),
    /// Show a single user by id
    Get(GetArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// SQL LIKE pattern matched against first_name (e.g. "%User%")
    #[arg(long, value_name = "PATTERN")]
    pub like: Option<String>,

    /// Page number (1-indexed)
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Users per page (max 100)
    #[arg(long, default_value = "20")]
    pub per_page: u32,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// User id
    pub id: String,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub async fn run(config: &DatabaseConfig, args: UsersArgs) -> Result<()> {
    let pool = connect(config).await?;
    let repo = UserRepo::new(&pool);

    match args.command {
        UsersCommand::List(args) => list(&repo, args).await,
        UsersCommand::Get(args) => {
            let user = repo
                .get(args.id.as_str())
                .await
                .with_context(|| format!("Failed to load user {}", args.id))?;
            if args.json {
                print_json(&user)
            } else {
                print_user(&user);
                Ok(())
            }
        }
    }
}

fn list_query(like: Option<&str>) -> UserQuery {
    let query = UserQuery::new().order_by(UserColumn::Id, Direction::Asc);
    match like {
        Some(pattern) => query.filter(Filter::like(UserColumn::FirstName, pattern)),
        None => query,
    }
}

async fn list(repo: &UserRepo<'_>, args: ListArgs) -> Result<()> {
    let query = list_query(args.like.as_deref());
    let page = repo
        .page(&query, Pagination::new(args.page, args.per_page))
        .await?;

    if args.json {
        return print_json(&page);
    }

    for user in &page.items {
        print_user(user);
    }
    println!(
        "page {}/{} ({} users)",
        page.page,
        page.total_pages(),
        page.total
    );
    Ok(())
}

fn print_user(user: &User) {
    println!("{:>4}  {}", user.id, user.name);
}
