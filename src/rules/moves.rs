//! The move rules.
//!
//! Each operation has a `check_*` predicate that inspects the table without
//! touching it, and an executor that runs the predicate first and mutates
//! only after it passed. A rejected move therefore leaves the state exactly
//! as it was.

use tracing::{debug, info};

use crate::cards::{Card, Rank};
use crate::core::action::{FoundationSource, Move, MoveKind, MoveList, MoveOutcome};
use crate::core::config::{RecyclePolicy, RulesConfig};
use crate::core::error::MoveError;
use crate::core::state::GameState;
use crate::rules::scoring;
use crate::zones::{Layout, Pile, TABLEAU_COLUMNS};

/// What a draw request will do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawAction {
    /// Turn the stock's top card onto the waste.
    Draw,
    /// Stock is empty: rebuild it from the waste.
    Recycle,
}

fn column(layout: &Layout, index: usize) -> Result<&Pile, MoveError> {
    layout.column(index).ok_or(MoveError::InvalidColumnIndex)
}

/// Can `card`, as the bottom of a group, go onto `column`?
pub fn check_column_accepts(card: &Card, column: &Pile) -> Result<(), MoveError> {
    match column.top() {
        None if card.rank == Rank::King => Ok(()),
        None => Err(MoveError::OnlyKingToEmptyColumn),
        Some(top) if top.face_up && card.stacks_on(top) => Ok(()),
        Some(_) => Err(MoveError::IllegalSequenceOrColor),
    }
}

/// Can `card` go onto its foundation pile?
#[must_use]
pub fn foundation_accepts(card: &Card, foundation: &Pile) -> bool {
    match foundation.top() {
        None => card.rank == Rank::Ace,
        Some(top) => top.suit == card.suit && top.rank.is_one_below(card.rank),
    }
}

pub fn check_draw(layout: &Layout) -> Result<DrawAction, MoveError> {
    if !layout.stock.is_empty() {
        Ok(DrawAction::Draw)
    } else if !layout.waste.is_empty() {
        Ok(DrawAction::Recycle)
    } else {
        Err(MoveError::NoCardsToDraw)
    }
}

/// Validate a tableau-to-tableau move. Returns the index in `from` where
/// the moving group begins.
pub fn check_tableau_to_tableau(
    layout: &Layout,
    from: usize,
    start: usize,
    to: usize,
) -> Result<usize, MoveError> {
    if from == to {
        return Err(MoveError::InvalidColumnIndex);
    }
    let source = column(layout, from)?;
    let dest = column(layout, to)?;

    if source.is_empty() {
        return Err(MoveError::EmptySourceColumn);
    }
    let group_start = source
        .first_face_up_from(start)
        .ok_or(MoveError::NoFaceUpCard)?;
    if !source.is_run_from(group_start) {
        return Err(MoveError::IllegalSequenceOrColor);
    }
    let bottom = source
        .get(group_start)
        .ok_or(MoveError::NoFaceUpCard)?;

    check_column_accepts(bottom, dest)?;
    Ok(group_start)
}

pub fn check_waste_to_tableau(layout: &Layout, to: usize) -> Result<(), MoveError> {
    let dest = column(layout, to)?;
    let card = layout.waste.top().ok_or(MoveError::EmptyWaste)?;
    check_column_accepts(card, dest)
}

/// Validate a move to a foundation. Returns the card that would move.
pub fn check_to_foundation(layout: &Layout, source: FoundationSource) -> Result<Card, MoveError> {
    let card = match source {
        FoundationSource::Waste => *layout.waste.top().ok_or(MoveError::EmptySource)?,
        FoundationSource::Tableau(i) => {
            let card = *column(layout, i)?.top().ok_or(MoveError::EmptySource)?;
            if !card.face_up {
                return Err(MoveError::SourceCardFaceDown);
            }
            card
        }
    };

    if foundation_accepts(&card, layout.foundation(card.suit)) {
        Ok(card)
    } else {
        Err(MoveError::WrongSuitOrSequence)
    }
}

/// Is `mv` legal right now? Does not consider time limits.
pub fn check(layout: &Layout, mv: &Move) -> Result<(), MoveError> {
    if layout.is_complete() {
        return Err(MoveError::GameOver);
    }
    match *mv {
        Move::Draw => check_draw(layout).map(|_| ()),
        Move::TableauToTableau { from, start, to } => {
            check_tableau_to_tableau(layout, from, start, to).map(|_| ())
        }
        Move::WasteToTableau { to } => check_waste_to_tableau(layout, to),
        Move::ToFoundation { source } => check_to_foundation(layout, source).map(|_| ()),
    }
}

/// Validate and execute `mv`.
pub fn apply(state: &mut GameState, config: &RulesConfig, mv: &Move) -> Result<MoveOutcome, MoveError> {
    if state.is_won() {
        return Err(MoveError::GameOver);
    }
    match *mv {
        Move::Draw => draw(state, config),
        Move::TableauToTableau { from, start, to } => {
            tableau_to_tableau(state, config, from, start, to)
        }
        Move::WasteToTableau { to } => waste_to_tableau(state, config, to),
        Move::ToFoundation { source } => to_foundation(state, config, source),
    }
}

fn draw(state: &mut GameState, config: &RulesConfig) -> Result<MoveOutcome, MoveError> {
    match check_draw(&state.layout)? {
        DrawAction::Draw => {
            let layout = &mut state.layout;
            if let Some(mut card) = layout.stock.pop() {
                card.flip_up();
                layout.waste.push(card);
            }
            Ok(finish(state, config, Move::Draw, MoveKind::Draw, 1, false))
        }
        DrawAction::Recycle => {
            let mut cards = state.layout.waste.take_all();
            if config.recycle == RecyclePolicy::Shuffle {
                state.rng.shuffle(&mut cards);
            }
            let moved = cards.len();
            state.layout.stock = cards
                .into_iter()
                .rev()
                .map(|mut c| {
                    c.flip_down();
                    c
                })
                .collect();
            info!(target: "klondike.rules", cards = moved, policy = ?config.recycle, "stock recycled");
            Ok(finish(state, config, Move::Draw, MoveKind::Recycle, moved, false))
        }
    }
}

fn tableau_to_tableau(
    state: &mut GameState,
    config: &RulesConfig,
    from: usize,
    start: usize,
    to: usize,
) -> Result<MoveOutcome, MoveError> {
    let group_start = check_tableau_to_tableau(&state.layout, from, start, to)?;

    let tableau = &mut state.layout.tableau;
    let group = tableau[from].split_off(group_start);
    let moved = group.len();
    tableau[to].append(group);
    let revealed = tableau[from].reveal_top();

    let requested = Move::TableauToTableau { from, start, to };
    Ok(finish(
        state,
        config,
        requested,
        MoveKind::TableauToTableau,
        moved,
        revealed,
    ))
}

fn waste_to_tableau(state: &mut GameState, config: &RulesConfig, to: usize) -> Result<MoveOutcome, MoveError> {
    check_waste_to_tableau(&state.layout, to)?;

    let layout = &mut state.layout;
    if let Some(card) = layout.waste.pop() {
        layout.tableau[to].push(card);
    }

    Ok(finish(
        state,
        config,
        Move::WasteToTableau { to },
        MoveKind::WasteToTableau,
        1,
        false,
    ))
}

fn to_foundation(
    state: &mut GameState,
    config: &RulesConfig,
    source: FoundationSource,
) -> Result<MoveOutcome, MoveError> {
    let card = check_to_foundation(&state.layout, source)?;

    let layout = &mut state.layout;
    let revealed = match source {
        FoundationSource::Waste => {
            layout.waste.pop();
            false
        }
        FoundationSource::Tableau(i) => {
            layout.tableau[i].pop();
            layout.tableau[i].reveal_top()
        }
    };
    layout.foundation_mut(card.suit).push(card);

    Ok(finish(
        state,
        config,
        Move::ToFoundation { source },
        MoveKind::ToFoundation,
        1,
        revealed,
    ))
}

/// Book-keeping shared by every accepted move.
fn finish(
    state: &mut GameState,
    config: &RulesConfig,
    requested: Move,
    kind: MoveKind,
    cards_moved: usize,
    revealed: bool,
) -> MoveOutcome {
    let points = scoring::award(state, kind, &config.scoring);
    let won = scoring::is_won(&state.layout);

    debug!(
        target: "klondike.rules",
        ?kind,
        points,
        cards_moved,
        revealed,
        score = state.score,
        moves = state.move_count,
        "move applied"
    );
    if won {
        info!(target: "klondike.rules", score = state.score, moves = state.move_count, "game won");
    }

    MoveOutcome {
        requested,
        kind,
        points,
        cards_moved,
        revealed,
        won,
    }
}

/// Every legal move, in advisor scan order: foundations first, then waste,
/// then tableau groups, then the draw.
#[must_use]
pub fn legal_moves(layout: &Layout) -> MoveList {
    let mut moves = MoveList::new();
    if layout.is_complete() {
        return moves;
    }

    for i in 0..TABLEAU_COLUMNS {
        if check_to_foundation(layout, FoundationSource::Tableau(i)).is_ok() {
            moves.push(Move::column_to_foundation(i));
        }
    }
    if check_to_foundation(layout, FoundationSource::Waste).is_ok() {
        moves.push(Move::waste_to_foundation());
    }
    for to in 0..TABLEAU_COLUMNS {
        if check_waste_to_tableau(layout, to).is_ok() {
            moves.push(Move::WasteToTableau { to });
        }
    }
    for (from, source) in layout.tableau.iter().enumerate() {
        // Each distinct group start is its own move.
        let Some(lowest) = source.first_face_up_from(0) else {
            continue;
        };
        for start in lowest..source.len() {
            for to in 0..TABLEAU_COLUMNS {
                if check_tableau_to_tableau(layout, from, start, to).is_ok() {
                    moves.push(Move::TableauToTableau { from, start, to });
                }
            }
        }
    }
    if check_draw(layout).is_ok() {
        moves.push(Move::Draw);
    }
    moves
}
