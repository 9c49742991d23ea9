use std::sync::Arc;
use std::thread;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::PieceKind;
use crate::game_state::position::Position;
use crate::move_generation::move_generator::MoveGenerator;

/// Leaf statistics of a pseudo-legal move tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, position: &Position, depth: u8) -> ChessResult<PerftCounts> {
    let mut total = PerftCounts::default();
    perft_recurse(generator, position, depth, &mut total)?;
    Ok(total)
}

/// Node count below each root move, in generation order.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    position: &Position,
    depth: u8,
) -> ChessResult<Vec<(String, usize)>> {
    if depth == 0 {
        return Ok(Vec::new());
    }

    let root_moves = generator.generate_moves(position, position.side_to_move())?;
    let mut out = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let child = position.apply_move(mv)?;
        let counts = perft(generator, &child, depth - 1)?;
        out.push((mv.to_string(), counts.nodes));
    }

    Ok(out)
}

/// Splits the root moves over one thread each.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    position: &Position,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth <= 1 {
        let mut total = PerftCounts::default();
        perft_recurse(generator.as_ref(), position, depth, &mut total)?;
        return Ok(total);
    }

    let root_moves = generator.generate_moves(position, position.side_to_move())?;
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let child = position.apply_move(mv)?;
        let generator_ref = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result = perft_recurse(generator_ref.as_ref(), &child, depth - 1, &mut local);
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let (result, local) = handle
            .join()
            .map_err(|_| ChessError::InternalConsistency("perft worker thread panicked".to_owned()))?;
        result?;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    position: &Position,
    depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    if depth == 0 {
        counts.nodes += 1;
        return Ok(());
    }

    let color = position.side_to_move();
    let moves = generator.generate_moves(position, color)?;

    if depth == 1 {
        for mv in &moves {
            counts.nodes += 1;
            if position.cell(mv.to).is_opponent_of(color) {
                counts.captures += 1;
            }
            let is_pawn = position
                .cell(mv.from)
                .piece()
                .is_some_and(|piece| piece.kind == PieceKind::Pawn);
            if is_pawn && mv.to.rank() == color.promotion_rank() {
                counts.promotions += 1;
            }
        }
        return Ok(());
    }

    for mv in moves {
        let child = position.apply_move(mv)?;
        perft_recurse(generator, &child, depth - 1, counts)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::move_generator::PseudoLegalMoveGenerator;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let counts = perft(&PseudoLegalMoveGenerator, &Position::new_game(), 0).expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_node_counts() {
        let start = Position::new_game();
        assert_eq!(perft(&PseudoLegalMoveGenerator, &start, 1).expect("perft").nodes, 20);
        assert_eq!(perft(&PseudoLegalMoveGenerator, &start, 2).expect("perft").nodes, 400);
    }

    #[test]
    fn multi_threaded_matches_single_threaded() {
        let start = Position::new_game();
        let single = perft(&PseudoLegalMoveGenerator, &start, 3).expect("perft");
        let multi = perft_multi_threaded(Arc::new(PseudoLegalMoveGenerator), &start, 3).expect("perft");
        assert_eq!(single, multi);
    }

    #[test]
    fn divide_sums_to_the_total() {
        let start = Position::new_game();
        let divided = perft_divide(&PseudoLegalMoveGenerator, &start, 2).expect("divide");
        assert_eq!(divided.len(), 20);
        assert!(divided.iter().all(|(_, nodes)| *nodes == 20));
        assert_eq!(divided.iter().map(|(_, nodes)| nodes).sum::<usize>(), 400);
    }

    #[test]
    fn leaf_captures_and_promotions_are_counted() {
        // b7 pawn can push to b8 or capture on a8 / c8.
        let position = Position::from_fen("r1n5/1P6/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let counts = perft(&PseudoLegalMoveGenerator, &position, 1).expect("perft");
        assert_eq!(counts.nodes, 3 + 5);
        assert_eq!(counts.captures, 2);
        assert_eq!(counts.promotions, 3);
    }
}
