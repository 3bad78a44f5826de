//! Display (balance inquiry) handler

use super::result::DisplayResult;
use crate::accounts::{AccountRole, AccountService};
use crate::intent::DisplayContext;
use crate::utils::Result;

pub fn handle(ctx: &DisplayContext, accounts: &dyn AccountService) -> Result<DisplayResult> {
    log::info!("executing display with {}", ctx);
    let target_id = accounts.resolve_account_id(AccountRole::Target, &ctx.target)?;
    let target_balance = accounts.get_balance(&target_id)?;

    Ok(DisplayResult {
        context: ctx.clone(),
        target_account_id: target_id,
        target_balance,
        success: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::{AccountId, StubAccountService, TARGET_ID};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_savings_balance_scenario() {
        let ctx = DisplayContext::parse("Show me my savings balance").unwrap();
        let result = handle(&ctx, &StubAccountService::new()).unwrap();

        assert_eq!(result.context.target, "savings");
        assert_eq!(result.target_account_id, AccountId::new(TARGET_ID));
        assert_eq!(result.target_balance, 800.0);
        assert!(result.success);
    }
}
