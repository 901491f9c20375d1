use std::cell::RefCell;
use std::rc::{ Rc, Weak };

use super::anchor::Anchor;

/// An in-page navigation, as reported by the browser's `hashchange` event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationEvent {
    pub hash: String,
    pub anchor: Option<Anchor>,
}

impl NavigationEvent {
    pub fn from_hash(hash: &str) -> Self {
        Self {
            hash: hash.to_string(),
            anchor: Anchor::from_hash(hash),
        }
    }
}

type Handler = Rc<RefCell<dyn FnMut(&NavigationEvent)>>;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

/// Fan-out point between the anchor layer and whoever reacts to navigation.
///
/// Handlers stay registered for exactly as long as their [`Subscription`]
/// is alive.
#[derive(Clone, Default)]
pub struct NavigationBus {
    inner: Rc<RefCell<BusInner>>,
}

impl NavigationBus {
    pub fn subscribe(&self, handler: impl FnMut(&NavigationEvent) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.handlers.push((id, Rc::new(RefCell::new(handler))));
        log::debug!("Navigation subscriber {} registered", id);

        Subscription {
            id,
            bus: Rc::downgrade(&self.inner),
        }
    }

    /// Delivers `event` to every live handler and returns how many ran.
    pub fn publish(&self, event: &NavigationEvent) -> usize {
        // Snapshot so handlers may drop subscriptions while we dispatch.
        let snapshot: Vec<(u64, Handler)> = self.inner
            .borrow()
            .handlers.iter()
            .map(|(id, handler)| (*id, handler.clone()))
            .collect();

        let mut delivered = 0;
        for (id, handler) in snapshot {
            if !self.is_subscribed(id) {
                continue;
            }
            match handler.try_borrow_mut() {
                Ok(mut handler) => {
                    (&mut *handler)(event);
                    delivered += 1;
                }
                Err(_) => log::warn!("Navigation subscriber {} re-entered, skipping", id),
            }
        }
        delivered
    }

    pub fn publish_hash(&self, hash: &str) -> usize {
        self.publish(&NavigationEvent::from_hash(hash))
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }

    fn is_subscribed(&self, id: u64) -> bool {
        self.inner
            .borrow()
            .handlers.iter()
            .any(|(existing, _)| *existing == id)
    }
}

/// Registration guard returned by [`NavigationBus::subscribe`].
pub struct Subscription {
    id: u64,
    bus: Weak<RefCell<BusInner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.borrow_mut().handlers.retain(|(id, _)| *id != self.id);
            log::debug!("Navigation subscriber {} released", self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{ MenuEvent, MenuState };
    use std::cell::Cell;

    #[test]
    fn test_publish_reaches_subscriber() {
        let bus = NavigationBus::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _sub = bus.subscribe(move |event| sink.borrow_mut().push(event.anchor));

        assert_eq!(bus.publish_hash("#services"), 1);
        assert_eq!(bus.publish_hash("#nowhere"), 1);
        assert_eq!(*seen.borrow(), vec![Some(Anchor::Services), None]);
    }

    #[test]
    fn test_dropped_subscription_stops_delivery() {
        let bus = NavigationBus::default();
        let menu = Rc::new(Cell::new(MenuState::Open));
        let state = menu.clone();
        let sub = bus.subscribe(move |_| state.set(state.get().apply(MenuEvent::Navigated)));
        assert_eq!(bus.subscriber_count(), 1);

        drop(sub);
        assert_eq!(bus.subscriber_count(), 0);
        assert_eq!(bus.publish_hash("#work"), 0);
        assert_eq!(menu.get(), MenuState::Open);
    }

    #[test]
    fn test_subscription_outliving_bus_is_harmless() {
        let bus = NavigationBus::default();
        let sub = bus.subscribe(|_| {});
        drop(bus);
        drop(sub);
    }

    #[test]
    fn test_handler_may_release_another_subscription_mid_dispatch() {
        let bus = NavigationBus::default();
        let calls = Rc::new(Cell::new(0));
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let slot = victim.clone();
        let _first = bus.subscribe(move |_| {
            slot.borrow_mut().take();
        });
        let counter = calls.clone();
        *victim.borrow_mut() = Some(bus.subscribe(move |_| counter.set(counter.get() + 1)));

        assert_eq!(bus.publish_hash("#about"), 1);
        assert_eq!(calls.get(), 0);
        assert_eq!(bus.subscriber_count(), 1);
    }
}
