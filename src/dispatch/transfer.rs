//! Transfer handler

use super::result::TransferResult;
use crate::accounts::{AccountRole, AccountService};
use crate::intent::TransferContext;
use crate::utils::Result;

/// Move the requested amount between the two accounts named in `ctx`.
///
/// `success` is true only when the whole requested amount moved. The
/// reported source balance is the pre-transfer balance minus the request,
/// even when the transfer was rejected.
pub fn handle(ctx: &TransferContext, accounts: &dyn AccountService) -> Result<TransferResult> {
    log::info!("executing transfer with {}", ctx);
    let requested = ctx.amount_value()?;

    let source_id = accounts.resolve_account_id(AccountRole::Source, &ctx.source)?;
    let destination_id = accounts.resolve_account_id(AccountRole::Destination, &ctx.destination)?;

    let source_balance = accounts.get_balance(&source_id)?;
    let moved = if accounts.validate_transfer(&source_id, &destination_id, requested)? {
        accounts.execute_transfer(&source_id, &destination_id, requested)?
    } else {
        log::warn!("transfer of {} from {} rejected", requested, source_id);
        0.0
    };
    let destination_balance = accounts.get_balance(&destination_id)?;

    Ok(TransferResult {
        context: ctx.clone(),
        source_account_id: source_id,
        source_balance_after: source_balance - requested,
        destination_account_id: destination_id,
        destination_balance,
        success: moved == requested,
    })
}
