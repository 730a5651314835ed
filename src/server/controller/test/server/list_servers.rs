use super::*;

/// Tests listing the authenticated user's servers.
///
/// Verifies that the handler reads the requester from the session and narrows the
/// result to that user's memberships.
///
/// Expected: Ok(Json) with the joined server only
#[tokio::test]
async fn lists_servers_of_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (owner, category, joined) = factory::helpers::create_server_with_dependencies(db).await?;
    factory::server::create_server(db, owner.id, category.id).await?;
    let member = factory::user::create_user(db).await?;
    factory::server_member::add_member(db, joined.id, member.id).await?;

    AuthSession::new(session).set_user_id(member.id).await?;

    let query = ServerListQueryDto {
        by_user: Some("true".to_string()),
        with_num_members: Some("true".to_string()),
        ..Default::default()
    };

    let servers = list_servers(
        State(AppState::new(db.clone())),
        session.clone(),
        Query(query),
    )
    .await?
    .0;

    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].id, joined.id);
    assert_eq!(servers[0].category, category.name);
    assert_eq!(servers[0].num_members, Some(1));

    Ok(())
}

/// Tests that an anonymous `by_user` request fails even with other valid filters.
///
/// Expected: Err(AuthError::AuthenticationRequired)
#[tokio::test]
async fn rejects_anonymous_by_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::helpers::create_server_with_dependencies(db).await?;

    let query = ServerListQueryDto {
        by_user: Some("true".to_string()),
        category: Some("gaming".to_string()),
        qty: Some("1".to_string()),
        ..Default::default()
    };

    let result = list_servers(
        State(AppState::new(db.clone())),
        session.clone(),
        Query(query),
    )
    .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AuthenticationRequired))
    ));

    Ok(())
}

/// Tests that an authenticated session does not filter unless `by_user=true`.
///
/// Expected: Ok(Json) with every server
#[tokio::test]
async fn session_user_does_not_filter_without_by_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (owner, category, _) = factory::helpers::create_server_with_dependencies(db).await?;
    factory::server::create_server(db, owner.id, category.id).await?;

    AuthSession::new(session).set_user_id(owner.id).await?;

    let servers = list_servers(
        State(AppState::new(db.clone())),
        session.clone(),
        Query(ServerListQueryDto::default()),
    )
    .await?
    .0;

    assert_eq!(servers.len(), 2);
    assert!(servers.iter().all(|s| s.num_members.is_none()));

    Ok(())
}
