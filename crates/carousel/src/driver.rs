use std::time::Duration;

use tokio::{
    sync::{mpsc, oneshot, watch},
    task::{JoinError, JoinHandle},
    time::{Instant, Interval, MissedTickBehavior, interval_at},
};

use crate::Carousel;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("carousel task failed: {0}")]
    Join(#[from] JoinError),

    #[error("carousel task already stopped")]
    Stopped,
}

#[derive(Debug)]
enum Event {
    PointerEnter,
    PointerLeave,
    Drag(f64),
    Resize { viewport: f64, content: f64 },
}

/// Runs a [`Carousel`] on its own task, ticking every configured interval.
///
/// Must be spawned from within a tokio runtime. Dropping the handle stops
/// the task.
#[derive(Debug)]
pub struct AutoScroll {
    events: mpsc::UnboundedSender<Event>,
    offset: watch::Receiver<f64>,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<Carousel>>,
}

impl AutoScroll {
    pub fn spawn(carousel: Carousel) -> Self {
        let (events, events_rx) = mpsc::unbounded_channel();
        let (offset_tx, offset) = watch::channel(carousel.offset());
        let (shutdown, shutdown_rx) = oneshot::channel();

        let task = tokio::spawn(run(carousel, events_rx, shutdown_rx, offset_tx));

        Self {
            events,
            offset,
            shutdown: Some(shutdown),
            task: Some(task),
        }
    }

    pub fn pointer_enter(&self) {
        self.send(Event::PointerEnter);
    }

    pub fn pointer_leave(&self) {
        self.send(Event::PointerLeave);
    }

    pub fn drag(&self, delta: f64) {
        self.send(Event::Drag(delta));
    }

    pub fn resize(&self, viewport: f64, content: f64) {
        self.send(Event::Resize { viewport, content });
    }

    /// Last published offset.
    pub fn offset(&self) -> f64 {
        *self.offset.borrow()
    }

    /// Notified on every offset change. Closed once the task stops.
    pub fn subscribe(&self) -> watch::Receiver<f64> {
        self.offset.clone()
    }

    /// Stops the timer and returns the final state. No offset is published
    /// after this resolves.
    pub async fn teardown(mut self) -> Result<Carousel, DriverError> {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }

        let task = self.task.take().ok_or(DriverError::Stopped)?;

        Ok(task.await?)
    }

    fn send(&self, event: Event) {
        if let Err(err) = self.events.send(event) {
            tracing::debug!(event = ?err.0, "carousel task stopped, event dropped");
        }
    }
}

impl Drop for AutoScroll {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

fn fresh_interval(period: Duration) -> Interval {
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

async fn run(
    mut carousel: Carousel,
    mut events: mpsc::UnboundedReceiver<Event>,
    mut shutdown: oneshot::Receiver<()>,
    offset: watch::Sender<f64>,
) -> Carousel {
    let period = carousel.settings().interval();
    let mut ticker = fresh_interval(period);

    loop {
        tokio::select! {
            biased;

            _ = &mut shutdown => break,

            Some(event) = events.recv() => match event {
                Event::PointerEnter => {
                    carousel.pointer_enter();
                }
                Event::PointerLeave => {
                    if carousel.pointer_leave() {
                        ticker = fresh_interval(period);
                    }
                }
                Event::Drag(delta) => carousel.drag(delta),
                Event::Resize { viewport, content } => carousel.resize(viewport, content),
            },

            _ = ticker.tick(), if !carousel.is_hovered() => {
                if let Some(command) = carousel.tick() {
                    tracing::trace!(?command, offset = carousel.offset(), "carousel tick");
                }
            }

            else => break,
        }

        offset.send_if_modified(|current| {
            if *current == carousel.offset() {
                return false;
            }

            *current = carousel.offset();
            true
        });
    }

    carousel.teardown();
    carousel
}
