use std::time::Duration;

use tasky_carousel::{AutoScroll, Carousel, CarouselSettings};
use tokio::time::{Instant, sleep};

const PERIOD: Duration = Duration::from_millis(4000);

fn spawn() -> AutoScroll {
    AutoScroll::spawn(Carousel::new(CarouselSettings::default(), 1000.0, 3000.0))
}

#[tokio::test(start_paused = true)]
async fn advances_every_period_and_wraps() -> anyhow::Result<()> {
    let scroll = spawn();
    let mut offsets = scroll.subscribe();
    let start = Instant::now();

    let mut seen = Vec::new();
    for _ in 0..5 {
        offsets.changed().await?;
        seen.push(*offsets.borrow_and_update());
    }

    assert_eq!(seen, vec![500.0, 1000.0, 1500.0, 2000.0, 0.0]);
    assert_eq!(start.elapsed(), PERIOD * 5);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn hover_cancels_the_pending_tick() -> anyhow::Result<()> {
    let scroll = spawn();
    let mut offsets = scroll.subscribe();

    sleep(Duration::from_millis(3000)).await;
    scroll.pointer_enter();
    sleep(PERIOD * 10).await;

    assert_eq!(scroll.offset(), 0.0);
    assert!(!offsets.has_changed()?);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn leave_restarts_from_a_fresh_interval() -> anyhow::Result<()> {
    let scroll = spawn();
    let mut offsets = scroll.subscribe();

    scroll.pointer_enter();
    sleep(Duration::from_millis(9500)).await;

    let left = Instant::now();
    scroll.pointer_leave();
    offsets.changed().await?;

    assert_eq!(left.elapsed(), PERIOD);
    assert_eq!(*offsets.borrow_and_update(), 500.0);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn drag_is_kept_until_the_next_tick() -> anyhow::Result<()> {
    let scroll = spawn();
    let mut offsets = scroll.subscribe();

    scroll.pointer_enter();
    scroll.drag(300.0);
    offsets.changed().await?;
    assert_eq!(*offsets.borrow_and_update(), 300.0);

    scroll.pointer_leave();
    offsets.changed().await?;
    assert_eq!(*offsets.borrow_and_update(), 800.0);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn resize_is_applied_before_the_next_tick() -> anyhow::Result<()> {
    let scroll = spawn();
    let mut offsets = scroll.subscribe();

    scroll.resize(500.0, 3000.0);
    offsets.changed().await?;

    assert_eq!(*offsets.borrow_and_update(), 250.0);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn teardown_stops_all_updates() -> anyhow::Result<()> {
    let scroll = spawn();
    let mut offsets = scroll.subscribe();

    offsets.changed().await?;
    let carousel = scroll.teardown().await?;

    assert!(carousel.is_torn_down());
    assert_eq!(carousel.offset(), 500.0);

    sleep(PERIOD * 3).await;
    assert!(offsets.changed().await.is_err());
    assert_eq!(*offsets.borrow(), 500.0);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_stops_the_task() {
    let scroll = spawn();
    let mut offsets = scroll.subscribe();

    drop(scroll);

    assert!(offsets.changed().await.is_err());
    assert_eq!(*offsets.borrow(), 0.0);
}
