//! MemoryStore CRUD semantics: server-style id assignment, whole-graph
//! replacement, NotFound behavior, and the filter endpoints.

use souschef_core::error::StoreError;
use souschef_core::normalize::{to_display, to_wire};
use souschef_core::store::{MemoryStore, RecipeStore};
use souschef_core::wire::{Category, Difficulty, Ingredient, NewRecipe, RecipeStep};

fn step(order: u32, title: &str, duration_minutes: u32) -> RecipeStep {
    RecipeStep {
        id: None,
        step_order: order,
        title: title.to_string(),
        description: format!("{}.", title),
        duration_minutes,
        image_url: None,
    }
}

fn salad() -> NewRecipe {
    NewRecipe {
        title: "Ελληνική Σαλάτα".to_string(),
        category: Category::Salad,
        difficulty: Difficulty::Easy,
        total_time_minutes: 15,
        prep_time_minutes: None,
        ingredients: vec![Ingredient {
            id: None,
            name: "φέτα".to_string(),
            quantity: Some(200.0),
            unit: Some("g".to_string()),
        }],
        steps: vec![step(1, "Κόψιμο λαχανικών", 8), step(2, "Σερβίρισμα", 7)],
        image_urls: None,
    }
}

fn lemonato() -> NewRecipe {
    NewRecipe {
        title: "Μοσχαράκι Λεμονάτο".to_string(),
        category: Category::Meat,
        difficulty: Difficulty::Medium,
        total_time_minutes: 90,
        prep_time_minutes: Some(15),
        ingredients: vec![],
        steps: vec![
            step(1, "Μαρινάρισμα", 15),
            step(2, "Ψήσιμο", 70),
            step(3, "Ξεκούραση", 5),
        ],
        image_urls: None,
    }
}

#[tokio::test]
async fn create_assigns_identity_and_date() {
    let store = MemoryStore::new();
    let created = store.create(salad()).await.unwrap();

    assert_eq!(created.id, Some(1));
    assert!(created.date_created.is_some());
    assert!(created.steps.iter().all(|s| s.id.is_some()));
    // Step ids are distinct
    assert_ne!(created.steps[0].id, created.steps[1].id);

    let second = store.create(lemonato()).await.unwrap();
    assert_eq!(second.id, Some(2));
}

#[tokio::test]
async fn get_returns_the_stored_graph() {
    let store = MemoryStore::new();
    let created = store.create(salad()).await.unwrap();
    let fetched = store.get(1).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let store = MemoryStore::new();
    assert!(matches!(store.get(9).await, Err(StoreError::NotFound(9))));
    assert!(matches!(
        store.update(9, salad()).await,
        Err(StoreError::NotFound(9))
    ));
    assert!(matches!(
        store.delete(9).await,
        Err(StoreError::NotFound(9))
    ));
}

#[tokio::test]
async fn update_replaces_the_graph_but_keeps_identity() {
    let store = MemoryStore::new();
    let created = store.create(salad()).await.unwrap();

    let mut replacement = salad();
    replacement.title = "Χωριάτικη Σαλάτα".to_string();
    replacement.steps = vec![step(1, "Σερβίρισμα", 7)];

    let updated = store.update(1, replacement).await.unwrap();
    assert_eq!(updated.id, Some(1));
    assert_eq!(updated.date_created, created.date_created);
    assert_eq!(updated.title, "Χωριάτικη Σαλάτα");
    assert_eq!(updated.steps.len(), 1);

    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_removes_the_whole_graph() {
    let store = MemoryStore::new();
    store.create(salad()).await.unwrap();
    store.delete(1).await.unwrap();
    assert!(store.list().await.unwrap().is_empty());
    assert!(matches!(
        store.delete(1).await,
        Err(StoreError::NotFound(1))
    ));
}

#[tokio::test]
async fn search_matches_title_substrings_case_insensitively() {
    let store = MemoryStore::new();
    store.create(salad()).await.unwrap();
    store.create(lemonato()).await.unwrap();

    let hits = store.search("σαλάτα").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Ελληνική Σαλάτα");

    assert!(store.search("κανένα").await.unwrap().is_empty());
}

#[tokio::test]
async fn by_category_filters() {
    let store = MemoryStore::new();
    store.create(salad()).await.unwrap();
    store.create(lemonato()).await.unwrap();

    let meat = store.by_category(Category::Meat).await.unwrap();
    assert_eq!(meat.len(), 1);
    assert_eq!(meat[0].title, "Μοσχαράκι Λεμονάτο");
    assert!(store.by_category(Category::Soup).await.unwrap().is_empty());
}

#[tokio::test]
async fn edit_flow_renumbers_steps_before_the_update_call() {
    // Fetch, drop the middle step client-side, push the whole graph back.
    let store = MemoryStore::new();
    store.create(lemonato()).await.unwrap();

    let mut recipe = to_display(&store.get(1).await.unwrap());
    assert!(recipe.remove_step(1));
    let payload = to_wire(&recipe).unwrap();

    let updated = store.update(1, payload).await.unwrap();
    let orders: Vec<u32> = updated.steps.iter().map(|s| s.step_order).collect();
    assert_eq!(orders, vec![1, 2]);
    assert_eq!(updated.steps[0].title, "Μαρινάρισμα");
    assert_eq!(updated.steps[1].title, "Ξεκούραση");
}
