//! End-to-end flow: lifecycle manager and query engine over the memory store

use rr_core::query::{QueryEngine, QueryRequest};
use rr_core::review::{CreateReview, DeleteReview, ReviewManager};
use rr_core::{RecipeId, ReviewError, Username};
use rr_store::MemoryStore;
use std::sync::Arc;

fn service() -> (ReviewManager<MemoryStore>, QueryEngine<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (
        ReviewManager::new(store.clone()),
        QueryEngine::new(store),
    )
}

fn teriyaki_review(author: &str, content: &str) -> CreateReview {
    CreateReview {
        recipe_id: RecipeId::new("52772"),
        recipe_name: "Teriyaki Chicken".to_string(),
        username: Username::new(author),
        image_url: None,
        rating: 5.0,
        content: content.to_string(),
    }
}

#[tokio::test]
async fn post_then_query_by_recipe() {
    let (manager, engine) = service();

    let posted = manager.create(teriyaki_review("alice", "great")).await.unwrap();
    assert_eq!(posted.author, Username::new("alice"));
    assert_eq!(posted.is_recent, 1);

    let page = engine
        .query(&QueryRequest::for_recipe(RecipeId::new("52772")).with_limit(10))
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].review_id, posted.review_id);
    assert!(page.last_evaluated_key.is_none());
}

#[tokio::test]
async fn oversized_limit_is_rejected_before_the_store() {
    let (_, engine) = service();

    let err = engine
        .query(&QueryRequest::recent().with_limit(100))
        .await
        .unwrap_err();
    assert!(matches!(err, ReviewError::Argument(_)));
    assert!(err.to_string().contains("outside of allowed range"));
}

#[tokio::test]
async fn cursor_chain_pages_through_a_recipe() {
    let (manager, engine) = service();
    for i in 0..12 {
        manager
            .create(teriyaki_review("alice", &format!("review {i}")))
            .await
            .unwrap();
    }

    let mut request = QueryRequest::for_recipe(RecipeId::new("52772")).with_limit(5);
    let mut total = 0;
    let mut pages = 0;
    loop {
        let page = engine.query(&request).await.unwrap();
        total += page.items.len();
        pages += 1;
        match page.last_evaluated_key {
            Some(cursor) => {
                request = QueryRequest::for_recipe(RecipeId::new("52772"))
                    .with_limit(5)
                    .with_start_key(cursor);
            }
            None => break,
        }
    }

    assert_eq!(total, 12);
    assert_eq!(pages, 3);
}

#[tokio::test]
async fn author_feed_spans_recipes() {
    let (manager, engine) = service();
    manager.create(teriyaki_review("alice", "great")).await.unwrap();
    manager
        .create(CreateReview {
            recipe_id: RecipeId::new("52893"),
            recipe_name: "Apple Crumble".to_string(),
            ..teriyaki_review("alice", "lovely")
        })
        .await
        .unwrap();
    manager.create(teriyaki_review("bob", "decent")).await.unwrap();

    let page = engine
        .query(&QueryRequest::for_author(Username::new("alice")))
        .await
        .unwrap();
    assert_eq!(page.items.len(), 2);

    let recent = engine.query(&QueryRequest::recent()).await.unwrap();
    assert_eq!(recent.items.len(), 3);
}

#[tokio::test]
async fn deleted_review_disappears_from_every_index() {
    let (manager, engine) = service();
    let posted = manager.create(teriyaki_review("alice", "great")).await.unwrap();

    manager
        .delete(DeleteReview {
            recipe_id: posted.recipe_id.clone(),
            review_id: posted.review_id,
            username: Username::new("alice"),
            is_admin: false,
        })
        .await
        .unwrap();

    for request in [
        QueryRequest::for_recipe(RecipeId::new("52772")),
        QueryRequest::for_author(Username::new("alice")),
        QueryRequest::recent(),
    ] {
        let page = engine.query(&request).await.unwrap();
        assert!(page.items.is_empty());
    }
}
