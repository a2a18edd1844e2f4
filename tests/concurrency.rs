mod common;

use clipurl::domain::repositories::LinkRepository;

/// Two concurrent reservations of the same alias: exactly one wins and the
/// loser gets a conflict, regardless of how the race interleaves.
#[tokio::test]
async fn test_concurrent_alias_creation_has_exactly_one_winner() {
    let (state, store, _rx) = common::create_test_state();
    let account = common::create_test_account(&store).await;

    let service_a = state.link_service.clone();
    let service_b = state.link_service.clone();
    let owner = account.id;

    let a = tokio::spawn(async move {
        service_a
            .create_link(
                owner,
                "https://example.com/a".to_string(),
                Some("contested".to_string()),
                None,
            )
            .await
    });
    let b = tokio::spawn(async move {
        service_b
            .create_link(
                owner,
                "https://example.com/b".to_string(),
                Some("contested".to_string()),
                None,
            )
            .await
    });

    let results = [a.await.unwrap(), b.await.unwrap()];
    let winners = results.iter().filter(|r| r.is_ok()).count();

    assert_eq!(winners, 1);
    for result in &results {
        if let Err(e) = result {
            assert!(e.is_conflict(), "loser must see a conflict, got: {e}");
        }
    }

    // The losing row must not linger with its placeholder slug.
    let (total_links, _) = store.owner_totals(owner).await.unwrap();
    assert_eq!(total_links, 1);
    assert!(store.find_by_slug("contested").await.unwrap().is_some());
}

/// Concurrent redirects never lose counter updates.
#[tokio::test]
async fn test_concurrent_redirects_count_every_click() {
    let (state, store, _rx) = common::create_test_state();
    let account = common::create_test_account(&store).await;
    common::create_test_link(&store, "hot", "https://example.com/", &account).await;

    let mut tasks = Vec::new();
    for _ in 0..100 {
        let redirects = state.redirect_service.clone();
        tasks.push(tokio::spawn(
            async move { redirects.resolve("hot").await },
        ));
    }

    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let after = store.find_by_slug("hot").await.unwrap().unwrap();
    assert_eq!(after.click_count, 100);
}
