use crate::model::user::{RoleDto, UserDto};

pub struct CreateUserParams {
    pub full_name: String,
    pub email: String,
    /// Already passed through `CredentialVerifier::prepare`.
    pub password: String,
    pub role: entity::user::Role,
}

#[derive(Clone)]
pub struct UpdateUserParams {
    pub id: i32,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<entity::user::Role>,
}

impl From<RoleDto> for entity::user::Role {
    fn from(role: RoleDto) -> Self {
        match role {
            RoleDto::User => Self::User,
            RoleDto::Admin => Self::Admin,
        }
    }
}

impl From<entity::user::Role> for RoleDto {
    fn from(role: entity::user::Role) -> Self {
        match role {
            entity::user::Role::User => Self::User,
            entity::user::Role::Admin => Self::Admin,
        }
    }
}

impl From<entity::user::Model> for UserDto {
    fn from(model: entity::user::Model) -> Self {
        Self {
            id: model.id,
            full_name: model.full_name,
            email: model.email,
            role: model.role.into(),
            created_at: model.created_at,
        }
    }
}
