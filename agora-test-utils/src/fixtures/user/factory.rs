use std::collections::HashSet;

use agora::model::user::{LoginDto, MeDto, RegistrationStatus, Role};

use crate::constant::{TEST_EMAIL, TEST_USER_ID};

/// `GET /api/me` payload for the test user
pub fn me_dto<I: IntoIterator<Item = Role>>(status: RegistrationStatus, roles: I) -> MeDto {
    MeDto {
        id: TEST_USER_ID.to_string(),
        email: TEST_EMAIL.to_string(),
        status,
        roles: roles.into_iter().collect::<HashSet<_>>(),
    }
}

/// `POST /api/auth/login` payload matching [`me_dto`]
pub fn login_dto(me: &MeDto) -> LoginDto {
    LoginDto {
        ok: true,
        user_id: me.id.clone(),
        roles: me.roles.clone(),
        status: me.status,
        email: me.email.clone(),
    }
}
