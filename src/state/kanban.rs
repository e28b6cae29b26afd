//! Kanban session state: who is signed in, which boards exist, and which
//! board or view filter the current route selected.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation guard is the only writer of `selected_board_id` and
//! `active_view`; pages only read them.

#[cfg(test)]
#[path = "kanban_test.rs"]
mod kanban_test;

use crate::net::types::{BoardSummary, User};

/// Dashboard filter selected by the current route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveView {
    /// Every board the user can see.
    #[default]
    Dashboard,
    /// Boards with tasks assigned to the current user.
    MyTasks,
    /// Boards the user starred.
    Favorites,
}

impl ActiveView {
    /// Heading shown above the filtered board list.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "All boards",
            Self::MyTasks => "My tasks",
            Self::Favorites => "Favorites",
        }
    }

    /// Whether `board` belongs in this view.
    pub fn includes(self, board: &BoardSummary) -> bool {
        match self {
            Self::Dashboard => true,
            Self::MyTasks => board.assigned_to_me > 0,
            Self::Favorites => board.favorite,
        }
    }
}

/// Application state for one browser tab.
#[derive(Clone, Debug, Default)]
pub struct KanbanState {
    /// Signed-in user, if the session check found one.
    pub user: Option<User>,
    /// True once the session check and inventory fetch have completed.
    pub data_loaded: bool,
    /// Board inventory for the signed-in user.
    pub boards: Vec<BoardSummary>,
    /// Board opened by the `/board/:id` route.
    pub selected_board_id: Option<String>,
    /// Dashboard filter chosen by the current route.
    pub active_view: ActiveView,
}

impl KanbanState {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Record the result of the session check.
    pub fn apply_session(&mut self, user: Option<User>, boards: Vec<BoardSummary>) {
        self.user = user;
        self.boards = boards;
        self.data_loaded = true;
    }

    /// Forget the signed-in user after logout.
    ///
    /// `data_loaded` stays set so the next navigation does not re-run the
    /// session check and goes straight to the login redirect.
    pub fn clear_session(&mut self) {
        self.user = None;
        self.boards.clear();
        self.selected_board_id = None;
    }

    pub fn select_board(&mut self, id: Option<&str>) {
        self.selected_board_id = id.map(str::to_owned);
    }

    pub fn set_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    /// Inventory entry for the selected board, if it is known.
    pub fn selected_board(&self) -> Option<&BoardSummary> {
        let id = self.selected_board_id.as_deref()?;
        self.boards.iter().find(|b| b.id == id)
    }

    /// Boards matching the active view, in inventory order.
    pub fn visible_boards(&self) -> Vec<BoardSummary> {
        self.boards
            .iter()
            .filter(|b| self.active_view.includes(b))
            .cloned()
            .collect()
    }
}
