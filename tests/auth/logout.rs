use super::*;

#[tokio::test]
/// Expect logging out to clear the session so protected routes redirect to login
async fn logout_redirects_protected_routes_to_login() -> Result<(), TestError> {
    let me = factory::me_dto(RegistrationStatus::Approved, [Role::Participant]);
    let test = TestBuilder::new()
        .with_login_endpoint(me.clone(), 1)
        .with_me_endpoint(me, 1)
        .with_logout_endpoint(1)
        .build()
        .await?;
    let guard = test.route_guard();
    let auth = test.auth_service();

    auth.login(TEST_EMAIL, TEST_PASSWORD).await?;
    assert!(test.store.state().is_authenticated());

    auth.logout().await?;

    assert_eq!(test.store.state(), SessionState::Absent);
    assert_eq!(
        guard.navigate(&Route::from_path("/cabinet/profile")).await,
        Some(Decision::RedirectTo(Redirect::Login))
    );
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a failed logout to still discard the session & report the error
async fn failed_logout_still_clears_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/api/auth/logout")
                .match_query(mockito::Matcher::Any)
                .with_status(500)
                .with_header("content-type", "application/json")
                .with_body(r#"{"error":"database unavailable"}"#)
                .create()
        })
        .build()
        .await?;
    test.store
        .set(SessionState::Present(
            factory::me_dto(RegistrationStatus::Approved, [Role::User]).into(),
        ));

    let err = test.auth_service().logout().await.unwrap_err();

    assert_eq!(err.to_string(), "database unavailable");
    assert_eq!(test.store.state(), SessionState::Absent);

    Ok(())
}

#[tokio::test]
/// Expect an expired session not to be refreshed just to log it out
async fn logout_does_not_refresh_expired_session() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_refresh_endpoint(0).build().await?;
    let mock = test
        .auth()
        .create_unauthorized_endpoint("POST", "/api/auth/logout", 1);
    test.mocks.push(mock);

    let result = test.auth_service().logout().await;

    assert!(result.unwrap_err().is_unauthorized());
    assert_eq!(test.store.state(), SessionState::Absent);
    test.assert_mocks();

    Ok(())
}
