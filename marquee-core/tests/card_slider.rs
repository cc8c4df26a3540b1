mod support;

use std::sync::Arc;

use marquee_core::carousel::{
    Affordances, CardSlider, Direction, MoveOutcome, RowKind, SliderError,
    SliderOptions,
};
use support::{FakeSurface, ids};

async fn slider(
    n: u32,
    options: SliderOptions,
    affordances: Affordances,
) -> (Arc<FakeSurface>, CardSlider<FakeSurface>) {
    let surface = Arc::new(FakeSurface::new(200.0));
    let slider =
        CardSlider::init(Arc::clone(&surface), ids(n), options, affordances)
            .await
            .expect("slider with items");
    (surface, slider)
}

#[tokio::test(start_paused = true)]
async fn empty_row_is_an_error() {
    let surface = Arc::new(FakeSurface::new(200.0));
    let err = CardSlider::init(
        surface,
        Vec::new(),
        SliderOptions::standard(),
        Affordances::all(),
    )
    .await
    .expect_err("no items");
    assert_eq!(err, SliderError::EmptyTrack);
}

#[tokio::test(start_paused = true)]
async fn pages_wrap_with_slides() {
    let (_surface, mut slider) =
        slider(12, SliderOptions::standard(), Affordances::all()).await;
    assert_eq!(slider.total_pages(), 3);
    assert_eq!(slider.dots(), vec![true, false, false]);

    let event = slider.slide(Direction::Prev).await.expect("accepted");
    assert_eq!(event.page, Some(2));
    assert_eq!(event.outcome, MoveOutcome::Moved { delta: -1000.0 });
    assert_eq!(slider.dots(), vec![false, false, true]);

    slider.slide(Direction::Next).await.expect("accepted");
    assert_eq!(slider.current_page(), 0);
}

#[tokio::test(start_paused = true)]
async fn zero_width_row_never_changes_page() {
    let surface = Arc::new(FakeSurface::new(0.0));
    let mut slider = CardSlider::init(
        surface,
        ids(10),
        SliderOptions::standard(),
        Affordances::all(),
    )
    .await
    .expect("slider with items");

    assert!(slider.slide(Direction::Next).await.is_none());
    assert!(slider.go_to_page(1).await.is_empty());
    assert_eq!(slider.current_page(), 0);
}

#[tokio::test(start_paused = true)]
async fn top_ten_row_pages_four_at_a_time() {
    let (surface, mut slider) =
        slider(10, SliderOptions::for_row(RowKind::TopTen), Affordances::all())
            .await;
    assert_eq!(slider.total_pages(), 3);

    let event = slider.slide(Direction::Next).await.expect("accepted");
    assert_eq!(event.outcome, MoveOutcome::Moved { delta: 800.0 });
    assert_eq!(surface.scroll_by_calls(), vec![800.0]);
}

#[tokio::test(start_paused = true)]
async fn go_to_page_slides_one_page_at_a_time() {
    let (surface, mut slider) =
        slider(20, SliderOptions::standard(), Affordances::all()).await;
    assert_eq!(slider.total_pages(), 4);

    let events = slider.go_to_page(3).await;
    assert_eq!(events.len(), 3);
    assert_eq!(
        events.iter().map(|e| e.page).collect::<Vec<_>>(),
        vec![Some(1), Some(2), Some(3)]
    );

    let back = slider.go_to_page(1).await;
    assert_eq!(back.len(), 2);
    assert!(back.iter().all(|e| e.direction == Direction::Prev));
    assert_eq!(slider.current_page(), 1);
    assert_eq!(surface.scroll_by_calls().len(), 5);

    assert!(slider.go_to_page(1).await.is_empty());
    assert!(slider.go_to_page(9).await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn missing_affordances_disable_their_features() {
    let affordances = Affordances {
        prev_button: false,
        next_button: true,
        indicator: false,
    };
    let (surface, mut slider) =
        slider(10, SliderOptions::standard(), affordances).await;

    assert!(slider.press(Direction::Prev).await.is_none());
    assert!(surface.scroll_by_calls().is_empty());
    assert!(slider.press(Direction::Next).await.is_some());
    assert!(slider.dots().is_empty());
    assert_eq!(slider.current_page(), 1);
}

#[tokio::test(start_paused = true)]
async fn pagination_can_be_turned_off() {
    let options = SliderOptions {
        pagination: false,
        ..SliderOptions::standard()
    };
    let (_surface, mut slider) = slider(10, options, Affordances::all()).await;

    let event = slider.slide(Direction::Next).await.expect("accepted");
    assert_eq!(event.page, None);
    assert_eq!(slider.total_pages(), 0);
    assert!(slider.dots().is_empty());
}

#[tokio::test(start_paused = true)]
async fn destroy_returns_the_surface() {
    let (surface, slider) =
        slider(5, SliderOptions::standard(), Affordances::all()).await;
    let returned = slider.destroy();
    assert!(Arc::ptr_eq(&surface, &returned));
}
