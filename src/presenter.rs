use bulletin_util::{Bulletin, BulletinId, BulletinStack};
use serde::Serialize;
use std::{
    num::NonZeroU64,
    time::{Duration, Instant},
};

/// Lifecycle notifications emitted for the rendering side.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// A bulletin was accepted and will appear once its delay elapses.
    Scheduled {
        id: BulletinId,
        identifier: Option<String>,
    },
    WillAppear {
        id: BulletinId,
        bulletin: Box<Bulletin>,
    },
    WillDisappear {
        id: BulletinId,
    },
    /// Follows `WillDisappear` when the bulletin's duration ran out.
    AutomaticallyDismissed {
        id: BulletinId,
    },
}

#[derive(Debug)]
struct Pending {
    id: BulletinId,
    due: Instant,
    bulletin: Bulletin,
}

#[derive(Debug)]
struct Shown {
    bulletin: Bulletin,
    expires_at: Option<Instant>,
}

/// Decides which bulletins are visible and when they go away.
///
/// Time is always passed in, so the presenter itself never blocks or sleeps.
/// At most one bulletin is visible per [`Level`](bulletin_util::Level):
/// showing another at an occupied level dismisses the occupant first.
#[derive(Debug)]
pub struct Presenter {
    next_id: NonZeroU64,
    max_visible: usize,
    pending: Vec<Pending>,
    visible: BulletinStack<Shown>,
}

impl Presenter {
    pub fn new(max_visible: usize) -> Self {
        Self {
            next_id: NonZeroU64::MIN,
            max_visible: max_visible.max(1),
            pending: Vec::new(),
            visible: BulletinStack::new(),
        }
    }

    /// Schedule `bulletin` to appear `delay` after `now`.
    ///
    /// Nothing is shown until the next [`Presenter::tick`].
    pub fn present(&mut self, bulletin: Bulletin, delay: Duration, now: Instant) -> BulletinId {
        let id = BulletinId::from(self.next_id);
        self.next_id = self.next_id.checked_add(1).unwrap_or(NonZeroU64::MIN);

        tracing::debug!("scheduling bulletin {id} {} after {delay:?}", bulletin.label());
        self.pending.push(Pending {
            id,
            due: now + delay,
            bulletin,
        });
        id
    }

    /// Expire timed out bulletins, then show every pending bulletin that is due.
    pub fn tick(&mut self, now: Instant) -> Vec<Event> {
        let mut events = Vec::new();

        let expired: Vec<BulletinId> = self
            .visible
            .iter()
            .filter(|(_, _, shown)| shown.expires_at.is_some_and(|at| at <= now))
            .map(|(id, _, _)| id)
            .collect();
        for id in expired {
            if self.visible.remove(id).is_some() {
                tracing::debug!("bulletin {id} timed out");
                events.push(Event::WillDisappear { id });
                events.push(Event::AutomaticallyDismissed { id });
            }
        }

        let mut due = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due <= now {
                due.push(self.pending.remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|p| (p.due, p.id));

        for Pending { id, bulletin, .. } in due {
            self.show(id, bulletin, now, &mut events);
        }

        events
    }

    fn show(&mut self, id: BulletinId, bulletin: Bulletin, now: Instant, events: &mut Vec<Event>) {
        let level = bulletin.level;
        let occupants: Vec<BulletinId> = self.visible.at_level(level).map(|(id, _)| id).collect();
        for occupant in occupants {
            tracing::debug!("bulletin {id} replaces {occupant} at level {level}");
            self.visible.remove(occupant);
            events.push(Event::WillDisappear { id: occupant });
        }

        let expires_at = bulletin.duration.timeout().and_then(|timeout| now.checked_add(timeout));
        events.push(Event::WillAppear {
            id,
            bulletin: Box::new(bulletin.clone()),
        });
        self.visible.push(id, level, Shown { bulletin, expires_at });

        // The bulletin just shown always stays, even when it is the lowest.
        while self.visible.len() > self.max_visible {
            let Some(evicted) = self.visible.iter().map(|(v, _, _)| v).find(|v| *v != id) else {
                break;
            };
            self.visible.remove(evicted);
            tracing::debug!("too many visible bulletins, dismissing {evicted}");
            events.push(Event::WillDisappear { id: evicted });
        }
    }

    /// Dismiss a visible bulletin or cancel a pending one.
    pub fn dismiss(&mut self, id: BulletinId) -> Vec<Event> {
        if self.visible.remove(id).is_some() {
            tracing::debug!("dismissing bulletin {id}");
            return vec![Event::WillDisappear { id }];
        }

        if let Some(pos) = self.pending.iter().position(|p| p.id == id) {
            tracing::debug!("cancelling pending bulletin {id}");
            self.pending.remove(pos);
        } else {
            tracing::debug!("bulletin {id} is not presented, ignoring dismissal");
        }
        Vec::new()
    }

    /// Cancel everything pending and dismiss all visible bulletins, top first.
    pub fn dismiss_all(&mut self) -> Vec<Event> {
        self.pending.clear();
        let top_down: Vec<BulletinId> = self.visible.iter().rev().map(|(id, _, _)| id).collect();
        top_down
            .into_iter()
            .filter(|id| self.visible.remove(*id).is_some())
            .map(|id| Event::WillDisappear { id })
            .collect()
    }

    /// Earliest instant at which [`Presenter::tick`] has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let pending = self.pending.iter().map(|p| p.due);
        let expiring = self.visible.iter().filter_map(|(_, _, shown)| shown.expires_at);
        pending.chain(expiring).min()
    }

    /// Visible bulletins, bottom to top.
    pub fn visible(&self) -> Vec<(BulletinId, &Bulletin)> {
        self.visible.iter().map(|(id, _, shown)| (id, &shown.bulletin)).collect()
    }

    pub fn topmost(&self) -> Option<(BulletinId, &Bulletin)> {
        self.visible.topmost().map(|(id, shown)| (id, &shown.bulletin))
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
