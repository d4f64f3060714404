use serde::Serialize;
use sqlx::FromRow;

/// Row of the `sample` table, used by the raw SQL exercises
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize)]
pub struct Sample {
    pub id: String,
    pub name: String,
}

impl Sample {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
