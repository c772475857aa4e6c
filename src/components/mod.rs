//! UI Components
//!
//! Leptos views over the app context.

mod nav_link;
mod notification_bar;
mod menu;
mod anecdote_list;
mod anecdote_view;
mod create_new;
mod about;
mod footer;

pub use nav_link::NavLink;
pub use notification_bar::NotificationBar;
pub use menu::Menu;
pub use anecdote_list::AnecdoteList;
pub use anecdote_view::AnecdoteView;
pub use create_new::CreateNew;
pub use about::About;
pub use footer::Footer;
