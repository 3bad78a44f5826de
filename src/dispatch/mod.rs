//! Action Dispatcher
//!
//! Routes a [`ParsingContext`] to the handler registered for its variant.
//! The route table is built once and handed to the dispatcher; routes are
//! scanned in registration order and the first one whose variant matches
//! handles the request.

pub mod display;
pub mod result;
pub mod transfer;

pub use result::{ActionResult, DisplayResult, TransferResult};

use crate::accounts::AccountService;
use crate::intent::{ContextKind, DisplayContext, ParsingContext, TransferContext};
use crate::utils::{Error, Result};

pub type TransferHandler = fn(&TransferContext, &dyn AccountService) -> Result<TransferResult>;
pub type DisplayHandler = fn(&DisplayContext, &dyn AccountService) -> Result<DisplayResult>;

/// One entry of the route table
#[derive(Clone, Copy)]
pub enum Route {
    Transfer(TransferHandler),
    Display(DisplayHandler),
}

impl Route {
    /// Context variant this route accepts
    pub fn kind(&self) -> ContextKind {
        match self {
            Route::Transfer(_) => ContextKind::Transfer,
            Route::Display(_) => ContextKind::Display,
        }
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Route({})", self.kind())
    }
}

#[derive(Debug, Clone)]
pub struct Dispatcher {
    routes: Vec<Route>,
}

impl Dispatcher {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Transfer and display handlers, in that order
    pub fn standard() -> Self {
        Self::new(vec![
            Route::Transfer(transfer::handle),
            Route::Display(display::handle),
        ])
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Run the handler for `context`.
    ///
    /// Fails with [`Error::Unhandled`] when no route accepts the variant,
    /// which is always the case for [`ParsingContext::Empty`].
    pub fn dispatch(
        &self,
        context: &ParsingContext,
        accounts: &dyn AccountService,
    ) -> Result<ActionResult> {
        for route in &self.routes {
            match (route, context) {
                (Route::Transfer(handle), ParsingContext::Transfer(ctx)) => {
                    return handle(ctx, accounts).map(ActionResult::Transfer);
                }
                (Route::Display(handle), ParsingContext::Display(ctx)) => {
                    return handle(ctx, accounts).map(ActionResult::Display);
                }
                _ => {}
            }
        }

        log::debug!("no route for {} context", context.kind());
        Err(Error::Unhandled { kind: context.kind() })
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::{AccountId, StubAccountService};
    use crate::intent::classify;
    use pretty_assertions::assert_eq;

    fn fixed_display(ctx: &DisplayContext, _: &dyn AccountService) -> Result<DisplayResult> {
        Ok(DisplayResult {
            context: ctx.clone(),
            target_account_id: AccountId::new("override"),
            target_balance: 1.0,
            success: true,
        })
    }

    #[test]
    fn test_standard_routes_in_order() {
        let kinds: Vec<_> = Dispatcher::standard().routes().iter().map(Route::kind).collect();
        assert_eq!(kinds, vec![ContextKind::Transfer, ContextKind::Display]);
    }

    #[test]
    fn test_dispatch_transfer() {
        let ctx = classify("Can you transfer from my CD 200 dollars to my checking, please?").unwrap();
        let result = Dispatcher::standard().dispatch(&ctx, &StubAccountService::new()).unwrap();

        let ActionResult::Transfer(t) = result else {
            panic!("expected transfer result, got {:?}", result);
        };
        assert_eq!(t.source_balance_after, -100.0);
        assert_eq!(t.destination_balance, 1200.0);
        assert!(t.success);
    }

    #[test]
    fn test_dispatch_display() {
        let ctx = classify("Show me my savings balance").unwrap();
        let result = Dispatcher::standard().dispatch(&ctx, &StubAccountService::new()).unwrap();

        assert!(result.is_success());
        let ActionResult::Display(d) = result else {
            panic!("expected display result");
        };
        assert_eq!(d.target_balance, 800.0);
    }

    #[test]
    fn test_empty_context_is_unhandled() {
        let err = Dispatcher::standard()
            .dispatch(&ParsingContext::Empty, &StubAccountService::new())
            .unwrap_err();
        assert_eq!(err, Error::Unhandled { kind: ContextKind::Empty });
    }

    #[test]
    fn test_unregistered_variant_is_unhandled() {
        let dispatcher = Dispatcher::new(vec![Route::Display(display::handle)]);
        let ctx = classify("send 5 to savings").unwrap();
        let err = dispatcher.dispatch(&ctx, &StubAccountService::new()).unwrap_err();
        assert_eq!(err, Error::Unhandled { kind: ContextKind::Transfer });
    }

    #[test]
    fn test_first_matching_route_wins() {
        let dispatcher = Dispatcher::new(vec![
            Route::Display(fixed_display),
            Route::Display(display::handle),
        ]);
        let ctx = classify("view my checking").unwrap();
        let result = dispatcher.dispatch(&ctx, &StubAccountService::new()).unwrap();

        let ActionResult::Display(d) = result else {
            panic!("expected display result");
        };
        assert_eq!(d.target_account_id, AccountId::new("override"));
    }
}
