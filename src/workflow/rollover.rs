use log::info;

use crate::context::AppContext;
use crate::domain::snapshot::BoardSnapshot;
use crate::domain::status::ApiStatus;
use crate::error::AppResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RolloverOutcome {
    Archived { count: usize },
    /// Done could not be read or holds no sentinel card.
    MissingSentinel,
    CommentFailed { ticket: String, status: ApiStatus },
    DeleteFailed { ticket: String, status: ApiStatus },
}

/// Copies every recently done ticket into a comment on the sentinel card,
/// then deletes those tickets. Each step stops at its first failure and
/// nothing already done is rolled back. Deletion only starts once every
/// comment was posted.
pub async fn archive_recently_done(
    ctx: &AppContext,
    snapshot: &BoardSnapshot,
) -> AppResult<RolloverOutcome> {
    let Some(sentinel) = snapshot.sentinel() else {
        return Ok(RolloverOutcome::MissingSentinel);
    };
    let done = snapshot.recently_done();

    for ticket in done {
        let status = ctx.board.add_comment(&sentinel.id, &ticket.label()).await?;
        if !status.is_success() {
            return Ok(RolloverOutcome::CommentFailed {
                ticket: ticket.name.clone(),
                status,
            });
        }
    }
    info!("archived {} ticket names on {}", done.len(), sentinel.name);

    for ticket in done {
        let status = ctx.board.delete_card(&ticket.id).await?;
        if !status.is_success() {
            return Ok(RolloverOutcome::DeleteFailed {
                ticket: ticket.name.clone(),
                status,
            });
        }
    }

    Ok(RolloverOutcome::Archived { count: done.len() })
}
