//! Application Context
//!
//! Message dispatcher provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::store::AppStore;
use crate::update::{update, Command, Msg};

/// Feeds messages through `update` into the store, one at a time
#[derive(Clone, Copy)]
pub struct Dispatcher {
    store: AppStore,
}

impl Dispatcher {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Apply a message and run whatever command it produced
    pub fn send(&self, msg: Msg) {
        web_sys::console::log_1(&format!("[APP] {}", msg.name()).into());
        let mut command = None;
        self.store.update(|state| {
            let (next, cmd) = update(std::mem::take(state), msg);
            *state = next;
            command = cmd;
        });
        if let Some(command) = command {
            self.run(command);
        }
    }

    /// Start a command; its result comes back later through `send`
    pub fn run(&self, command: Command) {
        let dispatcher = *self;
        match command {
            Command::FetchPortfolio { url } => {
                spawn_local(async move {
                    let msg = api::load_portfolio(url).await;
                    dispatcher.send(msg);
                });
            }
        }
    }
}

/// Get the dispatcher from context
pub fn use_dispatcher() -> Dispatcher {
    expect_context::<Dispatcher>()
}
