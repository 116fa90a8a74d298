use crate::{
    error::ValidationError,
    search::{Board, Plan},
};

/// Replay `plan` from `board`, checking every move before applying it.
pub fn validate(plan: &Plan, board: &Board) -> Result<(), ValidationError> {
    let mut cur_board = board.clone();
    for (step, &direction) in plan.steps().iter().enumerate() {
        cur_board = cur_board
            .moved(direction)
            .map_err(|source| ValidationError::NotApplicable { step, source })?;
    }

    if !cur_board.is_complete() {
        return Err(ValidationError::GoalNotReached {
            board: cur_board.to_string(),
        });
    }

    Ok(())
}
