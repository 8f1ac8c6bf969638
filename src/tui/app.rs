//! Root dashboard component: owns the route, the query caches, and all
//! keyboard handling. Screens render purely from cache state passed down
//! as props.

// Allow clone on Copy types - used intentionally in async closures for clarity
#![allow(clippy::clone_on_copy)]

use std::sync::Arc;

use iocraft::prelude::*;

use crate::api::ApiClient;
use crate::query::QueryCache;
use crate::router::Route;
use crate::tui::components::{Footer, Header, detail_shortcuts, list_shortcuts};
use crate::tui::detail::DetailScreen;
use crate::tui::list::{ListScreen, StatusFilter};
use crate::tui::theme::theme;
use crate::types::{Ticket, TicketStatus};

/// Vertical rows one list card occupies (border + content lines).
const CARD_HEIGHT: u16 = 7;
/// Rows taken by header, filter bar, and footer.
const CHROME_HEIGHT: u16 = 3;

type ListCache = QueryCache<Option<TicketStatus>, Vec<Ticket>>;
type DetailCache = QueryCache<i64, Ticket>;

/// Props for the DashboardApp component
#[derive(Default, Props)]
pub struct DashboardAppProps {
    pub client: Option<ApiClient>,
    pub initial_route: Option<Route>,
}

/// Main dashboard component
#[component]
pub fn DashboardApp<'a>(props: &DashboardAppProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let theme = theme();
    let initial_route = props.initial_route.unwrap_or_default();

    let mut route = hooks.use_state(|| initial_route);
    let mut filter = hooks.use_state(|| StatusFilter::All);
    let mut list_selected = hooks.use_state(|| 0usize);
    let mut list_scroll = hooks.use_state(|| 0usize);
    let mut detail_scroll = hooks.use_state(|| 0usize);
    let mut should_exit = hooks.use_state(|| false);

    // Caches live behind Arcs so async handlers can write while the
    // component reads. Cache writes don't re-render by themselves, so
    // handlers bump this state after every transition.
    let list_cache: State<Arc<ListCache>> = hooks.use_state(|| Arc::new(ListCache::new()));
    let detail_cache: State<Arc<DetailCache>> = hooks.use_state(|| Arc::new(DetailCache::new()));
    let cache_version = hooks.use_state(|| 0u64);

    let list_cache_arc = list_cache.read().clone();
    let detail_cache_arc = detail_cache.read().clone();

    // Async fetch handler for the ticket list, keyed by status filter
    let fetch_list: Handler<Option<TicketStatus>> = hooks.use_async_handler({
        let cache = list_cache_arc.clone();
        let client = props.client.clone();
        let version_setter = cache_version.clone();

        move |key: Option<TicketStatus>| {
            let cache = cache.clone();
            let client = client.clone();
            let mut version_setter = version_setter.clone();

            async move {
                let Some(client) = client else { return };
                cache.begin(&key);
                version_setter.set(cache.version());

                let result = client.list_tickets(key.as_ref()).await.map_err(|e| {
                    tracing::warn!("ticket list fetch failed: {}", e);
                    e.to_string()
                });
                cache.resolve(&key, result);
                version_setter.set(cache.version());
            }
        }
    });

    // Async fetch handler for one ticket, keyed by id
    let fetch_detail: Handler<i64> = hooks.use_async_handler({
        let cache = detail_cache_arc.clone();
        let client = props.client.clone();
        let version_setter = cache_version.clone();

        move |id: i64| {
            let cache = cache.clone();
            let client = client.clone();
            let mut version_setter = version_setter.clone();

            async move {
                let Some(client) = client else { return };
                cache.begin(&id);
                version_setter.set(cache.version());

                let result = client.get_ticket(id).await.map_err(|e| {
                    tracing::warn!("ticket {} fetch failed: {}", id, e);
                    e.to_string()
                });
                cache.resolve(&id, result);
                version_setter.set(cache.version());
            }
        }
    });

    // Track if we've started the initial fetch
    let mut fetch_started = hooks.use_state(|| false);

    if !fetch_started.get() {
        fetch_started.set(true);
        fetch_list.clone()(filter.get().status());
        if let Route::TicketDetail { id } = initial_route {
            fetch_detail.clone()(id);
        }
    }

    let fetch_list_for_events = fetch_list.clone();
    let fetch_detail_for_events = fetch_detail.clone();

    let visible_cards = (height.saturating_sub(CHROME_HEIGHT) / CARD_HEIGHT).max(1) as usize;

    // Snapshot cache state for rendering and event clamping
    let current_filter = filter.get();
    let list_state = list_cache_arc.get(&current_filter.status());
    let list_len = list_state
        .as_ref()
        .and_then(|state| state.value())
        .map(Vec::len)
        .unwrap_or(0);

    // Keep selection inside the list when a refetch shrank it
    let selected_index = list_selected.get().min(list_len.saturating_sub(1));

    let selected_ticket_id: Option<i64> = list_state
        .as_ref()
        .and_then(|state| state.value())
        .and_then(|tickets| tickets.get(selected_index))
        .map(|ticket| ticket.id);

    let current_route = route.get();
    let detail_state = match current_route {
        Route::TicketDetail { id } => detail_cache_arc.get(&id),
        Route::Dashboard => None,
    };
    let thread_len = detail_state
        .as_ref()
        .and_then(|state| state.value())
        .map(|ticket| ticket.thread().len())
        .unwrap_or(0);

    hooks.use_terminal_events({
        let list_cache = list_cache_arc.clone();
        let detail_cache = detail_cache_arc.clone();

        move |event| match event {
            TerminalEvent::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                match code {
                    KeyCode::Char('q') => should_exit.set(true),
                    _ => match route.get() {
                        Route::Dashboard => match code {
                            KeyCode::Char('j') | KeyCode::Down => {
                                if selected_index + 1 < list_len {
                                    let next = selected_index + 1;
                                    list_selected.set(next);
                                    if next >= list_scroll.get() + visible_cards {
                                        list_scroll.set(next + 1 - visible_cards);
                                    }
                                }
                            }
                            KeyCode::Char('k') | KeyCode::Up => {
                                if selected_index > 0 {
                                    let next = selected_index - 1;
                                    list_selected.set(next);
                                    if next < list_scroll.get() {
                                        list_scroll.set(next);
                                    }
                                }
                            }
                            KeyCode::Char('1')
                            | KeyCode::Char('2')
                            | KeyCode::Char('3')
                            | KeyCode::Char('4')
                            | KeyCode::Char('f') => {
                                let next = match code {
                                    KeyCode::Char('1') => StatusFilter::All,
                                    KeyCode::Char('2') => StatusFilter::New,
                                    KeyCode::Char('3') => StatusFilter::Waiting,
                                    KeyCode::Char('4') => StatusFilter::Ready,
                                    _ => filter.get().next(),
                                };
                                filter.set(next);
                                list_selected.set(0);
                                list_scroll.set(0);
                                // Cached filters render instantly; only
                                // unseen ones fetch.
                                let key = next.status();
                                if list_cache.get(&key).is_none() {
                                    fetch_list_for_events.clone()(key);
                                }
                            }
                            KeyCode::Char('r') => {
                                fetch_list_for_events.clone()(filter.get().status());
                            }
                            KeyCode::Enter => {
                                if let Some(id) = selected_ticket_id {
                                    route.set(Route::TicketDetail { id });
                                    detail_scroll.set(0);
                                    if detail_cache.get(&id).is_none() {
                                        fetch_detail_for_events.clone()(id);
                                    }
                                }
                            }
                            _ => {}
                        },
                        Route::TicketDetail { id } => match code {
                            KeyCode::Char('j') | KeyCode::Down => {
                                if detail_scroll.get() + 1 < thread_len.max(1) {
                                    detail_scroll.set(detail_scroll.get() + 1);
                                }
                            }
                            KeyCode::Char('k') | KeyCode::Up => {
                                if detail_scroll.get() > 0 {
                                    detail_scroll.set(detail_scroll.get() - 1);
                                }
                            }
                            KeyCode::Char('r') => {
                                fetch_detail_for_events.clone()(id);
                            }
                            KeyCode::Esc => {
                                route.set(Route::Dashboard);
                            }
                            _ => {}
                        },
                    },
                }
            }
            _ => {}
        }
    });

    // Exit if requested
    if should_exit.get() {
        system.exit();
    }

    // cache_version has no render use of its own; handlers set it purely
    // to schedule a re-render after cache writes.
    let _ = cache_version.get();

    let (subtitle, shortcuts) = match current_route {
        Route::Dashboard => (format!("{} tickets", list_len), list_shortcuts()),
        Route::TicketDetail { .. } => (current_route.path(), detail_shortcuts()),
    };

    let screen: AnyElement<'static> = match current_route {
        Route::Dashboard => element! {
            ListScreen(
                state: list_state,
                filter: current_filter,
                selected_index: selected_index,
                scroll_offset: list_scroll.get(),
                visible_cards: visible_cards,
            )
        }
        .into_any(),
        Route::TicketDetail { .. } => element! {
            DetailScreen(
                state: detail_state,
                scroll_offset: detail_scroll.get(),
            )
        }
        .into_any(),
    };

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(title: "QuoteDesk".to_string(), subtitle: subtitle)
            #(Some(screen))
            Footer(shortcuts: shortcuts)
        }
    }
}
