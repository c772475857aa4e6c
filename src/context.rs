//! Application Context
//!
//! Explicit state container provided via Leptos Context API.
//! Views mutate state only through these methods.

use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;

use crate::history;
use crate::models::{Anecdote, AnecdoteDraft, AnecdoteId};
use crate::notification::{NotificationTimer, Scheduler};
use crate::routes::{resolve_anecdote, Route};
use crate::store::{store_add_anecdote, store_set_notification, store_vote, AppState, AppStateStoreFields, AppStore};

/// App-wide state handles
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Anecdotes and notification message
    pub store: AppStore,
    /// Current route - read
    pub route: ReadSignal<Route>,
    /// Current route - write
    set_route: WriteSignal<Route>,
    notifier: StoredValue<NotificationTimer, LocalStorage>,
    notification_duration: Duration,
}

impl AppContext {
    pub fn new(
        state: AppState,
        route: (ReadSignal<Route>, WriteSignal<Route>),
        scheduler: Rc<dyn Scheduler>,
        notification_duration: Duration,
    ) -> Self {
        let store = AppStore::new(state);
        let notifier = NotificationTimer::new(scheduler, move |message| {
            store_set_notification(&store, message);
        });
        Self {
            store,
            route: route.0,
            set_route: route.1,
            notifier: StoredValue::new_local(notifier),
            notification_duration,
        }
    }

    /// Switch view and record the path in browser history.
    /// Routes without a path (`NotFound`) leave the address bar alone.
    pub fn navigate(&self, route: Route) {
        log::debug!("navigate -> {:?}", route);
        if let Some(path) = route.path() {
            if let Err(err) = history::push(&path) {
                log::warn!("{}", err);
            }
        }
        self.set_route.set(route);
    }

    /// Add an anecdote, announce it, and return to the list
    pub fn create_anecdote(&self, draft: AnecdoteDraft) -> Anecdote {
        let created = store_add_anecdote(&self.store, draft);
        self.notify(format!("a new anecdote {} created!", created.content));
        self.navigate(Route::List);
        created
    }

    pub fn vote(&self, id: &AnecdoteId) {
        store_vote(&self.store, id);
    }

    /// Show a transient message for the configured duration
    pub fn notify(&self, message: String) {
        let duration = self.notification_duration;
        self.notifier.with_value(|timer| timer.show(message, duration));
    }

    pub fn dismiss_notification(&self) {
        self.notifier.with_value(|timer| timer.clear());
    }

    /// Active notification message (tracked)
    pub fn notification(&self) -> Option<String> {
        self.store.notification().get()
    }

    /// Anecdote addressed by the current route (tracked)
    pub fn current_anecdote(&self) -> Option<Anecdote> {
        let route = self.route.get();
        self.store.anecdotes().with(|anecdotes| resolve_anecdote(&route, anecdotes))
    }
}

/// Get the app context provided by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
