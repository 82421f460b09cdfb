//! Row actions
//!
//! Row-level affordances (view, edit, delete, ...) are routed through a
//! dispatcher that holds caller-supplied handlers. The dispatcher performs
//! no business logic itself: it either invokes the registered handler with
//! the target record, or does nothing when no handler is registered. In the
//! dashboard these are UI affordances only, so a missing handler is a silent
//! no-op, not an error.

use std::fmt;

use rustc_hash::FxHashMap;

/// A user-triggered action on a single table row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RowAction {
    /// Open the record's detail view.
    View,

    /// Open the record for editing.
    Edit,

    /// Delete the record.
    Delete,

    /// Flip an active/inactive style status.
    ToggleStatus,

    /// Mark the record as the default choice (payment methods).
    SetDefault,

    /// Refund a payment.
    Refund,

    /// Reactivate a suspended user.
    Reactivate,

    /// Permanently ban a suspended user.
    Ban,
}

impl RowAction {
    /// Menu label for this action.
    pub fn label(&self) -> &'static str {
        match self {
            Self::View => "View",
            Self::Edit => "Edit",
            Self::Delete => "Delete",
            Self::ToggleStatus => "Toggle status",
            Self::SetDefault => "Set as default",
            Self::Refund => "Refund",
            Self::Reactivate => "Reactivate",
            Self::Ban => "Ban",
        }
    }
}

type Handler<'h, R> = Box<dyn Fn(&R) + 'h>;

/// Routes row actions to caller-supplied handlers.
pub struct RowActions<'h, R> {
    handlers: FxHashMap<RowAction, Handler<'h, R>>,
}

impl<'h, R> RowActions<'h, R> {
    /// Creates a dispatcher with no handlers registered.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
        }
    }

    /// Registers a handler for one action, replacing any existing one.
    #[must_use]
    pub fn on(mut self, action: RowAction, handler: impl Fn(&R) + 'h) -> Self {
        self.handlers.insert(action, Box::new(handler));
        self
    }

    /// Whether a handler is registered for the given action.
    ///
    /// Views use this to render an affordance enabled or disabled.
    pub fn handles(&self, action: RowAction) -> bool {
        self.handlers.contains_key(&action)
    }

    /// Invokes the handler for `action` with the target record.
    ///
    /// A missing handler is a silent no-op.
    pub fn dispatch(&self, action: RowAction, record: &R) {
        if let Some(handler) = self.handlers.get(&action) {
            handler(record);
        }
    }
}

impl<R> Default for RowActions<'_, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for RowActions<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut registered: Vec<RowAction> = self.handlers.keys().copied().collect();
        registered.sort_by_key(|action| action.label());

        f.debug_struct("RowActions")
            .field("registered", &registered)
            .finish()
    }
}
