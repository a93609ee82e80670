//! State Transitions
//!
//! Messages, outbound commands and the pure update function.

use crate::models::Portfolio;
use crate::store::AppState;

/// Events fed into `update`
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    FetchSucceeded(Portfolio),
    FetchFailed(String),
    CategorySelected(i64),
    ItemSelected(i64),
    NoOp,
}

impl Msg {
    /// Short name for logging (payloads can be large)
    pub fn name(&self) -> &'static str {
        match self {
            Msg::FetchSucceeded(_) => "FetchSucceeded",
            Msg::FetchFailed(_) => "FetchFailed",
            Msg::CategorySelected(_) => "CategorySelected",
            Msg::ItemSelected(_) => "ItemSelected",
            Msg::NoOp => "NoOp",
        }
    }
}

/// Side effects requested by a transition, run by the dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchPortfolio { url: String },
}

/// Initial state plus the one startup fetch
pub fn init(api_url: impl Into<String>) -> (AppState, Command) {
    let state = AppState::new(api_url);
    let command = Command::FetchPortfolio {
        url: state.api_url.clone(),
    };
    (state, command)
}

/// Apply one message, producing the next state
pub fn update(state: AppState, msg: Msg) -> (AppState, Option<Command>) {
    let next = match msg {
        Msg::FetchSucceeded(portfolio) => AppState { portfolio, ..state },
        Msg::FetchFailed(detail) => AppState {
            error_message: format!("Failed to load portfolio: {}", detail),
            ..state
        },
        Msg::CategorySelected(id) => AppState {
            selected_category_id: Some(id),
            selected_item_id: None,
            ..state
        },
        Msg::ItemSelected(id) => AppState {
            selected_item_id: Some(id),
            ..state
        },
        Msg::NoOp => state,
    };
    (next, None)
}
