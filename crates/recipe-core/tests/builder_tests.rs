mod common;

use common::{create_test_store, instant_settings, test_backend};
use recipe_core::{
    IngredientField, Navigation, RecipeBuilder, RecipeListing, SessionStatus, Step,
};

#[tokio::test]
async fn test_full_wizard_session() {
    let (_temp_dir, store) = create_test_store();
    let settings = instant_settings();
    let mut builder = RecipeBuilder::open(store.connect_tab().unwrap(), &settings);

    builder.set_title("Tomato Soup").unwrap();
    builder.set_calories("210").unwrap();
    builder.advance().unwrap();
    builder
        .update_ingredient(0, IngredientField::Name, "Tomatoes")
        .unwrap();
    builder
        .update_ingredient(0, IngredientField::Quantity, "6")
        .unwrap();
    builder
        .update_ingredient(0, IngredientField::Unit, "pieces")
        .unwrap();
    builder.advance().unwrap();
    builder.edit_instruction(0, "Roast the tomatoes").unwrap();
    builder.add_instruction().unwrap();
    builder.edit_instruction(1, "Blend").unwrap();
    assert_eq!(builder.step(), Step::LAST);

    builder.save_draft().unwrap();
    assert_eq!(
        store.session_status().unwrap(),
        Some(SessionStatus::Drafting)
    );

    let navigation = builder.submit(&test_backend(&store)).await.unwrap();
    assert_eq!(navigation, Navigation::Listing);
    assert!(store.read_draft().unwrap().is_none());
    assert_eq!(store.session_status().unwrap(), None);

    let mut listing = RecipeListing::new();
    listing
        .fetch(&store, settings.timings.listing_latency)
        .await
        .unwrap();
    listing.set_search("tomato");
    let shown = listing.displayed();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].title, "Tomato Soup");
    assert!(shown[0].id.starts_with("user-"));
}

#[tokio::test]
async fn test_listing_follows_builder_in_other_tab() {
    let (_temp_dir, store) = create_test_store();
    let settings = instant_settings();
    let mut watcher = store.subscribe();

    let mut listing = RecipeListing::new();
    listing.sync_with_session_status(&store).unwrap();
    assert!(!listing.is_create_disabled());

    let mut builder = RecipeBuilder::open(store.connect_tab().unwrap(), &settings);
    builder.save_draft().unwrap();
    while let Some(event) = watcher.try_recv() {
        listing.apply_event(&event);
    }
    assert!(listing.is_create_disabled());

    builder.advance().unwrap();
    builder.advance().unwrap();
    builder.submit(&test_backend(&store)).await.unwrap();
    while let Some(event) = watcher.try_recv() {
        listing.apply_event(&event);
    }
    assert!(!listing.is_create_disabled());
}

#[tokio::test]
async fn test_reopened_form_offers_saved_draft() {
    let (_temp_dir, store) = create_test_store();
    let settings = instant_settings();

    let mut first = RecipeBuilder::open(store.connect_tab().unwrap(), &settings);
    first.set_title("Focaccia").unwrap();
    let saved = first.save_draft().unwrap();
    drop(first);

    let mut second = RecipeBuilder::open(store.connect_tab().unwrap(), &settings);
    assert_eq!(
        second.draft_prompt().map(|prompt| prompt.last_saved),
        Some(saved.last_saved)
    );
    assert!(second.load_draft().unwrap());
    assert_eq!(second.data().title, "Focaccia");
}
