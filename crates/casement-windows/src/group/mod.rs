//! Window groups.
//!
//! A [`WindowGroup`] is plain data: ordered member labels, the last layout
//! applied, a key-value state bag and event listeners. Anything that needs
//! the member windows goes through [`GroupMut`], obtained from
//! [`WindowManager::group_mut`](crate::manager::WindowManager::group_mut).

mod events;
mod guard;
mod layout;
mod persistence;
mod types;

pub use events::{GroupEvent, GroupEventKind, GroupListener};
pub use guard::GroupMut;
pub use types::{LayoutExport, WindowGroup};
