use chrono::{DateTime, Utc};
use diesel::{Insertable, Queryable};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Queryable)]
pub struct Admin {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::models::schema::admins)]
pub struct NewAdmin {
    pub username: String,
    pub email: String,
    pub password: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterAdminSchema {
    #[validate(length(min = 3, max = 40, message = "must be between 3 and 40 characters"))]
    pub username: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginAdminSchema {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

/// What the dashboard sees; never includes the password hash.
#[derive(Debug, Serialize)]
pub struct FilteredAdmin {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&Admin> for FilteredAdmin {
    fn from(admin: &Admin) -> Self {
        FilteredAdmin {
            id: admin.id,
            username: admin.username.to_owned(),
            email: admin.email.to_owned(),
            created_at: admin.created_at,
        }
    }
}
