use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::Entity;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct UserId(pub i64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        UserId(id)
    }
}

impl From<UserId> for i64 {
    fn from(user_id: UserId) -> Self {
        user_id.0
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct User {
    pub id: Option<UserId>,
    pub username: String,
    pub email: String,
}

impl Entity for User {
    const NAME: &'static str = "User";
    // No filtered query exists for users.
    type Filter = ();

    fn id(&self) -> Option<i64> {
        self.id.map(i64::from)
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(UserId(id));
    }

    fn matches(&self, _filter: &()) -> bool {
        true
    }
}

/// Projection of a user as GetUsers returns it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct UserName {
    pub name: String,
}
