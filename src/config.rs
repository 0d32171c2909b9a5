//! Shared booklet configuration
//!
//! Organization name and effective date are read and written by several
//! sibling views. Rather than ambient global state, views hold a cheap
//! clonable handle to one configuration object; updates notify registered
//! listeners synchronously. Single-threaded by design, matching the
//! event-driven UI model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Booklet-wide configuration values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookletConfig {
    pub organization_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
}

type Listener = Box<dyn Fn(&BookletConfig)>;

struct ConfigInner {
    config: BookletConfig,
    listeners: Vec<Listener>,
}

/// Clonable handle to a shared configuration object
#[derive(Clone)]
pub struct SharedConfig {
    inner: Rc<RefCell<ConfigInner>>,
}

impl SharedConfig {
    pub fn new(config: BookletConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ConfigInner {
                config,
                listeners: Vec::new(),
            })),
        }
    }

    /// Current configuration snapshot
    pub fn get(&self) -> BookletConfig {
        self.inner.borrow().config.clone()
    }

    /// Replace the configuration and notify every listener
    pub fn update(&self, config: BookletConfig) {
        {
            self.inner.borrow_mut().config = config;
        }
        let inner = self.inner.borrow();
        for listener in &inner.listeners {
            listener(&inner.config);
        }
    }

    /// Register a change listener, called synchronously on each update
    pub fn subscribe(&self, listener: impl Fn(&BookletConfig) + 'static) {
        self.inner.borrow_mut().listeners.push(Box::new(listener));
    }
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self::new(BookletConfig::default())
    }
}

impl std::fmt::Debug for SharedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedConfig")
            .field("config", &self.inner.borrow().config)
            .finish()
    }
}
