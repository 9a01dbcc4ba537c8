//! Milk catalog walkthroughs for both layouts.

use paneshop_core::{
    DetailViewModel, Intent, PLACEHOLDER_MESSAGE, Presentation, Screen, ScreenViewModel,
    ShoppingSession, Strategy,
};
use paneshop_types::{BuiltinCatalog, CatalogSource, Orientation, ProductId};
use std::sync::Arc;

fn milk_session(orientation: Orientation) -> ShoppingSession {
    ShoppingSession::new(Arc::new(BuiltinCatalog.load()), orientation)
}

fn row_names(screen: &ScreenViewModel) -> Vec<(String, bool)> {
    screen
        .list()
        .expect("list should be mounted")
        .rows
        .iter()
        .map(|row| (row.name.clone(), row.selected))
        .collect()
}

#[test]
fn test_portrait_starts_on_list_with_three_rows() {
    let session = milk_session(Orientation::Portrait);

    assert_eq!(
        session.presentation(),
        Presentation::Navigated {
            screen: Screen::List
        }
    );
    assert_eq!(
        row_names(&session.screen()),
        vec![
            ("Whole Milk".to_string(), false),
            ("Fat Free Lactaid".to_string(), false),
            ("Fat Free Fairlife".to_string(), false),
        ]
    );
}

#[test]
fn test_portrait_activating_row_opens_detail() {
    let mut session = milk_session(Orientation::Portrait);

    let presentation = session.dispatch(Intent::Select(ProductId::new(2))).unwrap();

    assert_eq!(presentation.screen(), Some(Screen::Detail(ProductId::new(2))));
    assert_eq!(
        session.selection().current().map(|p| p.name.as_str()),
        Some("Fat Free Lactaid")
    );

    let screen = session.screen();
    assert!(screen.list().is_none());
    let detail = screen.detail().unwrap();
    assert_eq!(
        detail.text_lines(),
        ["Fat Free Lactaid", "Price: $5.50", "This milk is the best."]
    );
    assert!(detail.has_back_control());
}

#[test]
fn test_portrait_back_returns_to_list_and_clears() {
    let mut session = milk_session(Orientation::Portrait);
    session.dispatch(Intent::Select(ProductId::new(2))).unwrap();

    let presentation = session.dispatch(Intent::Back).unwrap();

    assert_eq!(presentation.screen(), Some(Screen::List));
    assert!(session.selection().is_empty());
}

#[test]
fn test_landscape_without_selection_shows_placeholder() {
    let session = milk_session(Orientation::Landscape);
    let screen = session.screen();

    assert_eq!(session.presentation().strategy(), Strategy::Split);
    assert!(row_names(&screen).iter().all(|(_, selected)| !selected));
    assert_eq!(screen.list().map(|l| l.len()), Some(3));
    assert_eq!(
        screen.detail(),
        Some(&DetailViewModel::Placeholder {
            message: PLACEHOLDER_MESSAGE.to_string()
        })
    );
}

#[test]
fn test_landscape_selection_updates_detail_in_place() {
    let mut session = milk_session(Orientation::Landscape);

    let presentation = session.dispatch(Intent::Select(ProductId::new(1))).unwrap();

    assert_eq!(presentation, Presentation::Split);
    let screen = session.screen();
    assert_eq!(
        row_names(&screen),
        vec![
            ("Whole Milk".to_string(), true),
            ("Fat Free Lactaid".to_string(), false),
            ("Fat Free Fairlife".to_string(), false),
        ]
    );
    assert_eq!(
        screen.detail().map(|d| d.text_lines()),
        Some(vec!["Whole Milk", "Price: $5", "This milk is decent."])
    );
}

#[test]
fn test_landscape_switching_products_keeps_list_mounted() {
    let mut session = milk_session(Orientation::Landscape);
    session.dispatch(Intent::Select(ProductId::new(1))).unwrap();
    session.dispatch(Intent::Select(ProductId::new(3))).unwrap();

    let screen = session.screen();
    assert!(matches!(screen, ScreenViewModel::Split { .. }));
    assert_eq!(
        screen.list().and_then(|l| l.selected_row()),
        Some(2),
        "only Fat Free Fairlife should be highlighted"
    );
}

#[test]
fn test_reselecting_current_product_leaves_detail_unchanged() {
    let mut session = milk_session(Orientation::Landscape);
    session.dispatch(Intent::Select(ProductId::new(2))).unwrap();
    let before = session.detail();
    let revision = session.selection().revision();

    session.dispatch(Intent::Select(ProductId::new(2))).unwrap();

    assert_eq!(session.detail(), before);
    assert_eq!(session.selection().revision(), revision);
}

#[test]
fn test_clear_when_nothing_selected_is_noop() {
    for orientation in [Orientation::Landscape, Orientation::Portrait] {
        let mut session = milk_session(orientation);
        let before = session.presentation();

        let after = session.dispatch(Intent::Back).unwrap();

        assert_eq!(after, before);
        assert_eq!(session.selection().revision(), 0);
    }
}
