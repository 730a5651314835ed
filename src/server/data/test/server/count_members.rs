use super::*;

/// Tests counting members of several servers at once.
///
/// Expected: Ok with the number of memberships per server
#[tokio::test]
async fn counts_members_of_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, category, busy) = factory::helpers::create_server_with_dependencies(db).await?;
    let quiet = factory::server::create_server(db, owner.id, category.id).await?;

    factory::server_member::add_new_members(db, busy.id, 3).await?;
    factory::server_member::add_new_members(db, quiet.id, 1).await?;

    let repo = ServerRepository::new(db);

    let counts = repo.count_members(&[busy.id, quiet.id]).await?;

    assert_eq!(counts.len(), 2);
    assert_eq!(counts.get(&busy.id), Some(&3));
    assert_eq!(counts.get(&quiet.id), Some(&1));

    Ok(())
}

/// Tests counting members of a server nobody joined.
///
/// The grouped count has no row for such a server; fetching with member counts
/// fills in zero.
///
/// Expected: Ok with no map entry, and Some(0) on the fetched row
#[tokio::test]
async fn counts_zero_for_empty_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, server) = factory::helpers::create_server_with_dependencies(db).await?;

    let repo = ServerRepository::new(db);

    assert!(repo.count_members(&[server.id]).await?.is_empty());
    assert!(repo.count_members(&[]).await?.is_empty());

    let rows = repo.fetch(ServerQuery::new().with_member_count()).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].num_members, Some(0));

    Ok(())
}

/// Tests that member counts ignore the membership filter.
///
/// Filtering by one member must not reduce the count to the filtered rows.
///
/// Expected: Ok with the full member count
#[tokio::test]
async fn member_count_is_independent_of_member_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, server) = factory::helpers::create_server_with_dependencies(db).await?;
    let members = factory::server_member::add_new_members(db, server.id, 4).await?;

    let repo = ServerRepository::new(db);
    let rows = repo
        .fetch(
            ServerQuery::new()
                .with_member(members[0].id)
                .with_member_count(),
        )
        .await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].num_members, Some(4));

    Ok(())
}

/// Tests member counts for every row of an unbounded listing.
///
/// Expected: Ok with each server annotated with its own count
#[tokio::test]
async fn annotates_every_fetched_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, category, first) = factory::helpers::create_server_with_dependencies(db).await?;
    let second = factory::server::create_server(db, owner.id, category.id).await?;
    let third = factory::server::create_server(db, owner.id, category.id).await?;

    factory::server_member::add_new_members(db, first.id, 2).await?;
    factory::server_member::add_new_members(db, third.id, 5).await?;

    let repo = ServerRepository::new(db);
    let rows = repo.fetch(ServerQuery::new().with_member_count()).await?;

    let counts: Vec<(i32, Option<u64>)> = rows
        .iter()
        .map(|row| (row.server.id, row.num_members))
        .collect();
    assert_eq!(
        counts,
        vec![(first.id, Some(2)), (second.id, Some(0)), (third.id, Some(5))]
    );

    Ok(())
}
