use crate::presenter::{Event, Presenter};
use bulletin_util::{Bulletin, BulletinId};
use std::time::Duration;
use tokio::{
    sync::mpsc::{Receiver, Sender},
    time::Instant,
};
use tracing::{debug, error};

#[derive(Debug)]
pub enum Request {
    Present { bulletin: Box<Bulletin>, delay: Duration },
    Dismiss(BulletinId),
    DismissAll,
}

/// Drive `presenter` from `requests`, forwarding its events to `events`.
///
/// Once the request channel closes the loop keeps running until nothing is
/// left that would expire on its own, then dismisses what remains and returns.
pub async fn run(mut presenter: Presenter, mut requests: Receiver<Request>, events: Sender<Event>) {
    let mut closed = false;

    loop {
        let deadline = presenter.next_deadline().map(Instant::from_std);

        if closed && deadline.is_none() {
            debug!("request channel closed, shutting down presenter");
            forward(&events, presenter.dismiss_all()).await;
            return;
        }

        let mut out = Vec::new();
        tokio::select! {
            request = requests.recv(), if !closed => match request {
                Some(Request::Present { bulletin, delay }) => {
                    let identifier = bulletin.identifier.clone();
                    let id = presenter.present(*bulletin, delay, now());
                    out.push(Event::Scheduled { id, identifier });
                }
                Some(Request::Dismiss(id)) => out.extend(presenter.dismiss(id)),
                Some(Request::DismissAll) => out.extend(presenter.dismiss_all()),
                None => closed = true,
            },
            _ = sleep_until(deadline) => {}
        }

        out.extend(presenter.tick(now()));
        if !out.is_empty() {
            debug!(
                "{} visible, {} pending, topmost {:?}",
                presenter.visible().len(),
                presenter.pending_count(),
                presenter.topmost().map(|(id, bulletin)| (id, bulletin.label()))
            );
        }
        if !forward(&events, out).await {
            error!("event receiver dropped, stopping presenter");
            return;
        }
    }
}

async fn forward(events: &Sender<Event>, batch: Vec<Event>) -> bool {
    for event in batch {
        if events.send(event).await.is_err() {
            return false;
        }
    }
    true
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

// Tokio's clock, so paused test time moves the presenter too.
fn now() -> std::time::Instant {
    Instant::now().into_std()
}
