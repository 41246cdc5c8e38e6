use log::warn;

use crate::context::AppContext;
use crate::domain::list::BoardList;
use crate::domain::snapshot::BoardSnapshot;
use crate::domain::status::ApiStatus;
use crate::domain::ticket::{Ticket, first_token};
use crate::error::AppResult;

pub async fn create_card(ctx: &AppContext, name: &str, list_name: &str) -> AppResult<ApiStatus> {
    let Some(list) = BoardList::from_title(list_name) else {
        warn!("list '{list_name}' is not one of the board lists");
        return Ok(ApiStatus::NOT_FOUND);
    };
    ctx.board
        .create_card(ctx.config.lists.id_for(list), name)
        .await
}

pub async fn delete_card(
    ctx: &AppContext,
    snapshot: &BoardSnapshot,
    name: &str,
) -> AppResult<ApiStatus> {
    match snapshot.resolve_card_id(name) {
        Some(card_id) => ctx.board.delete_card(card_id).await,
        None => Ok(unresolved(name)),
    }
}

/// Moves a card by deleting it and recreating it on `list_name`. The new
/// card is named `<name> - <points>` so story points survive the move.
/// Any failure collapses to 400.
pub async fn move_card(
    ctx: &AppContext,
    snapshot: &BoardSnapshot,
    full_name: &str,
    list_name: &str,
) -> AppResult<ApiStatus> {
    if BoardList::from_title(list_name).is_none() {
        warn!("refusing to move '{full_name}' to unknown list '{list_name}'");
        return Ok(ApiStatus::BAD_REQUEST);
    }

    let label = snapshot
        .find_ticket(full_name)
        .map(Ticket::label)
        .unwrap_or_else(|| first_token(full_name).to_string());

    if !delete_card(ctx, snapshot, &label).await?.is_success() {
        return Ok(ApiStatus::BAD_REQUEST);
    }
    if !create_card(ctx, &label, list_name).await?.is_success() {
        return Ok(ApiStatus::BAD_REQUEST);
    }
    Ok(ApiStatus::OK)
}

pub async fn update_card(
    ctx: &AppContext,
    snapshot: &BoardSnapshot,
    full_name: &str,
    new_name: &str,
) -> AppResult<ApiStatus> {
    match snapshot.resolve_card_id(full_name) {
        Some(card_id) => ctx.board.rename_card(card_id, new_name).await,
        None => Ok(unresolved(full_name)),
    }
}

fn unresolved(name: &str) -> ApiStatus {
    warn!("no card named '{name}' on the board");
    ApiStatus::NOT_FOUND
}
