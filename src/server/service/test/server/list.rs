use super::*;

/// Tests listing with no parameters.
///
/// Expected: Ok with every server and no member counts
#[tokio::test]
async fn lists_all_servers_without_counts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, category, first) = factory::helpers::create_server_with_dependencies(db).await?;
    let second = factory::server::ServerFactory::new(db, owner.id, category.id)
        .name("Speedrunners")
        .description(Some("Any% only".to_string()))
        .build()
        .await?;

    let service = ServerService::new(db);
    let servers = service.list(ServerListParams::default()).await?;

    assert_eq!(servers.len(), 2);
    assert_eq!(servers[0].id, first.id);
    assert_eq!(servers[1].id, second.id);
    assert_eq!(servers[1].name, "Speedrunners");
    assert_eq!(servers[1].description, Some("Any% only".to_string()));
    assert_eq!(servers[1].category, category.name);
    assert!(servers.iter().all(|s| s.num_members.is_none()));

    Ok(())
}

/// Tests the category, quantity and member count scenario.
///
/// Expected: Ok with at most two gaming servers, each annotated with its member count
#[tokio::test]
async fn lists_limited_gaming_servers_with_counts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let gaming = factory::category::create_category_named(db, "gaming").await?;
    let music = factory::category::create_category_named(db, "music").await?;

    let music_server = factory::server::create_server(db, owner.id, music.id).await?;
    let gaming1 = factory::server::create_server(db, owner.id, gaming.id).await?;
    let gaming2 = factory::server::create_server(db, owner.id, gaming.id).await?;
    factory::server::create_server(db, owner.id, gaming.id).await?;

    factory::server_member::add_new_members(db, music_server.id, 5).await?;
    factory::server_member::add_new_members(db, gaming1.id, 2).await?;

    let service = ServerService::new(db);
    let servers = service
        .list(ServerListParams {
            category: Some("gaming".to_string()),
            with_num_members: true,
            quantity: Some(2),
            ..Default::default()
        })
        .await?;

    assert_eq!(servers.len(), 2);
    assert!(servers.iter().all(|s| s.category == "gaming"));
    assert_eq!(servers[0].id, gaming1.id);
    assert_eq!(servers[0].num_members, Some(2));
    assert_eq!(servers[1].id, gaming2.id);
    assert_eq!(servers[1].num_members, Some(0));

    Ok(())
}

/// Tests that a category without servers yields an empty list.
///
/// Expected: Ok with empty vector, not an error
#[tokio::test]
async fn empty_category_is_not_an_error() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_server_with_dependencies(db).await?;
    factory::category::create_category_named(db, "empty").await?;

    let service = ServerService::new(db);
    let servers = service
        .list(ServerListParams {
            category: Some("empty".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(servers.is_empty());

    Ok(())
}

/// Tests that quantity larger than the match count returns every match.
///
/// Expected: Ok with min(qty, matching) servers
#[tokio::test]
async fn quantity_caps_at_matching_count() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, category, _) = factory::helpers::create_server_with_dependencies(db).await?;
    factory::server::create_server(db, owner.id, category.id).await?;

    let service = ServerService::new(db);
    let servers = service
        .list(ServerListParams {
            quantity: Some(5),
            ..Default::default()
        })
        .await?;

    assert_eq!(servers.len(), 2);

    Ok(())
}

/// Tests listing the requester's servers.
///
/// Expected: Ok with only servers the member joined
#[tokio::test]
async fn lists_servers_of_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, category, joined) = factory::helpers::create_server_with_dependencies(db).await?;
    factory::server::create_server(db, owner.id, category.id).await?;
    let member = factory::user::create_user(db).await?;
    factory::server_member::add_member(db, joined.id, member.id).await?;

    let service = ServerService::new(db);
    let servers = service
        .list(ServerListParams {
            member_id: Some(member.id),
            ..Default::default()
        })
        .await?;

    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].id, joined.id);

    Ok(())
}

/// Tests fetching a single server by id.
///
/// Expected: Ok with exactly that server
#[tokio::test]
async fn lists_single_server_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, category, _) = factory::helpers::create_server_with_dependencies(db).await?;
    let target = factory::server::create_server(db, owner.id, category.id).await?;

    let service = ServerService::new(db);
    let servers = service
        .list(ServerListParams {
            server_id: Some(ServerIdParam {
                id: target.id,
                raw: target.id.to_string(),
            }),
            ..Default::default()
        })
        .await?;

    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].id, target.id);

    Ok(())
}

/// Tests requesting an id that matches no server.
///
/// Expected: Err(ValidationError::ServerNotFound) with the raw id in the message
#[tokio::test]
async fn unknown_server_id_is_validation_error() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_server_with_dependencies(db).await?;

    let service = ServerService::new(db);
    let result = service
        .list(ServerListParams {
            server_id: Some(ServerIdParam {
                id: 999,
                raw: "999".to_string(),
            }),
            ..Default::default()
        })
        .await;

    match result {
        Err(AppError::ValidationErr(ValidationError::ServerNotFound(raw))) => {
            assert_eq!(raw, "999")
        }
        other => panic!("expected ServerNotFound, got {other:?}"),
    }

    Ok(())
}

/// Tests requesting an existing id outside the requested category.
///
/// The id filter narrows the working set, so a server filtered out earlier is
/// reported as not found.
///
/// Expected: Err(ValidationError::ServerNotFound)
#[tokio::test]
async fn server_outside_working_set_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let gaming = factory::category::create_category_named(db, "gaming").await?;
    let music = factory::category::create_category_named(db, "music").await?;
    factory::server::create_server(db, owner.id, gaming.id).await?;
    let music_server = factory::server::create_server(db, owner.id, music.id).await?;

    let service = ServerService::new(db);
    let result = service
        .list(ServerListParams {
            category: Some("gaming".to_string()),
            server_id: Some(ServerIdParam {
                id: music_server.id,
                raw: music_server.id.to_string(),
            }),
            ..Default::default()
        })
        .await;

    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Server with id {} not found", music_server.id)
    );

    Ok(())
}
