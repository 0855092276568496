use crate::board::{Board, Player};
use crate::error::{GameError, Result};
use crate::random::{RandomGenerator, SeededRandomGenerator, StandardRandomGenerator};
use tracing::{debug, instrument, trace};

/// The outcome of one top-level search.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision<A> {
    /// The action picked among `candidates`.
    pub action: A,
    /// Minimax value of `action` from X's point of view.
    pub value: i32,
    /// Every legal action sharing the best value, in legal-action order.
    pub candidates: Vec<A>,
    /// Number of boards the search evaluated, the root included.
    pub nodes: u64,
}

/// Exhaustive minimax player.
///
/// Every move is searched down to the end of the game; there is no pruning and no caching.
/// Ties between equally good moves are broken with the injected `RandomGenerator`.
pub struct Minimax<K: RandomGenerator> {
    random: K,
}

/// A builder for creating instances of `Minimax`.
pub struct MinimaxBuilder<K: RandomGenerator> {
    random_generator: K,
}

impl MinimaxBuilder<StandardRandomGenerator> {
    /// Creates a new builder that breaks ties with the thread-local generator.
    pub fn new() -> Self {
        Self {
            random_generator: StandardRandomGenerator,
        }
    }
}

impl Default for MinimaxBuilder<StandardRandomGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RandomGenerator> MinimaxBuilder<K> {
    /// Sets the random number generator used for tie-breaking.
    pub fn with_random_generator<R: RandomGenerator>(self, rg: R) -> MinimaxBuilder<R> {
        MinimaxBuilder {
            random_generator: rg,
        }
    }

    /// Shorthand for a seeded ChaCha8 generator.
    pub fn with_seed(self, seed: u64) -> MinimaxBuilder<SeededRandomGenerator> {
        self.with_random_generator(SeededRandomGenerator::new(seed))
    }

    /// Builds the `Minimax` instance with the configured parameters.
    pub fn build(self) -> Minimax<K> {
        Minimax::new(self.random_generator)
    }
}

impl Minimax<StandardRandomGenerator> {
    /// Returns a new builder for `Minimax`.
    pub fn builder() -> MinimaxBuilder<StandardRandomGenerator> {
        MinimaxBuilder::new()
    }
}

impl Default for Minimax<StandardRandomGenerator> {
    fn default() -> Self {
        MinimaxBuilder::new().build()
    }
}

impl<K: RandomGenerator> Minimax<K> {
    /// Creates a new `Minimax` player with the given tie-breaking generator.
    pub fn new(rg: K) -> Self {
        Self { random: rg }
    }

    /// Returns an optimal action for the player to move, or `None` if the game is over.
    pub fn optimal_action<B: Board>(&mut self, board: &B) -> Result<Option<B::Action>> {
        Ok(self.decide(board)?.map(|d| d.action))
    }

    /// Searches `board` and returns the chosen action together with its value and the tie set.
    ///
    /// X picks among the actions with the highest value, O among those with the lowest.
    #[instrument(skip_all, fields(player = ?board.current_player()))]
    pub fn decide<B: Board>(&mut self, board: &B) -> Result<Option<Decision<B::Action>>> {
        if board.is_terminal() {
            debug!(outcome = ?board.outcome(), "board is terminal, no move");
            return Ok(None);
        }

        let mut nodes = 1;
        let mut scored = Vec::new();
        for action in board.legal_actions() {
            let child = board.apply_action(&action)?;
            let value = value_counting(&child, &mut nodes)?;
            trace!(?action, value, "scored action");
            scored.push((action, value));
        }

        let best = best_value(board.current_player(), scored.iter().map(|&(_, v)| v))?;
        let candidates: Vec<B::Action> = scored
            .iter()
            .filter(|&&(_, v)| v == best)
            .map(|&(a, _)| a)
            .collect();
        // `best` came from `scored`, so at least one action matches it.
        let action = candidates[self.random.next_index(candidates.len()) % candidates.len()];

        debug!(
            ?action,
            value = best,
            candidates = candidates.len(),
            nodes,
            "chose action"
        );
        Ok(Some(Decision {
            action,
            value: best,
            candidates,
            nodes,
        }))
    }
}

/// Returns the minimax value of `board` from X's point of view.
///
/// Terminal boards score their utility; otherwise X takes the maximum and O the minimum over the
/// values of every child board.
pub fn minimax_value<B: Board>(board: &B) -> Result<i32> {
    let mut nodes = 0;
    value_counting(board, &mut nodes)
}

/// The value of every legal action on `board`, in legal-action order.
pub fn scored_actions<B: Board>(board: &B) -> Result<Vec<(B::Action, i32)>> {
    board
        .legal_actions()
        .into_iter()
        .map(|action| Ok((action, minimax_value(&board.apply_action(&action)?)?)))
        .collect()
}

/// Returns an optimal action using the thread-local generator for tie-breaking.
pub fn optimal_action<B: Board>(board: &B) -> Result<Option<B::Action>> {
    Minimax::<StandardRandomGenerator>::default().optimal_action(board)
}

fn value_counting<B: Board>(board: &B, nodes: &mut u64) -> Result<i32> {
    *nodes += 1;
    if board.is_terminal() {
        return Ok(board.utility());
    }

    let mut values = Vec::new();
    for action in board.legal_actions() {
        values.push(value_counting(&board.apply_action(&action)?, nodes)?);
    }
    best_value(board.current_player(), values)
}

/// The extremum for `player`. Fails when a board that is not over offered no action to score.
fn best_value(player: Player, values: impl IntoIterator<Item = i32>) -> Result<i32> {
    let values = values.into_iter();
    let best = match player {
        Player::X => values.max(),
        Player::O => values.min(),
    };
    best.ok_or(GameError::NoLegalActions)
}
