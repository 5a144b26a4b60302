use crate::{Action, Coordinate, Game, LegalMoveSet};

/// Play a whole game from the start, asking `choose` for every placement and
/// passing whenever the side to move is stuck.
/// Returns every state visited, starting with the initial one.
pub fn playout<F>(mut choose: F) -> Vec<Game>
where
    F: FnMut(&LegalMoveSet) -> Coordinate,
{
    let mut game = Game::default();
    let mut history = vec![game];

    while !game.is_finished() {
        let moves = game.legal_moves();
        let action = if moves.is_empty() {
            Action::Pass
        } else {
            Action::Place(choose(&moves))
        };

        game = match game.apply(action) {
            Ok(next) => next,
            Err(err) => panic!("playout chose {}: {}", action, err),
        };
        history.push(game);
    }

    history
}
