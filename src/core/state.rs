//! Game state: the piles and every operation that changes them.
//!
//! ## GameState
//!
//! Owns the tableau columns, stock, waste, move counter, selection cursor
//! and undo history. Nothing outside reaches into the piles; presentation
//! code reads them through the query methods and changes them only
//! through the operations here.
//!
//! Each successful operation increments the move counter once and records
//! a snapshot. Failed operations leave the state untouched (the one
//! exception is an empty undo, see `GolfConfig::charge_empty_undo`).
//!
//! Tableau columns are addressed 0-based.

use im::Vector;
use smallvec::SmallVec;

use super::config::GolfConfig;
use super::error::{GolfError, PileKind};
use super::rng::GameRng;
use crate::cards::{Card, Deck};
use crate::history::{History, Snapshot};
use crate::rules::{self, GameStatus, Move};
use crate::zones::Pile;

/// A tableau card picked up by a drag-style front end.
///
/// The card stays in its column until `GameState::drop_on_waste`
/// succeeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeldCard {
    /// Origin column (0-based).
    pub column: usize,
    /// The card that was on top when it was picked up.
    pub card: Card,
}

/// A single game of Golf.
#[derive(Clone, Debug)]
pub struct GameState {
    config: GolfConfig,
    seed: Option<u64>,
    tableau: Vector<Pile>,
    stock: Pile,
    waste: Pile,
    moves: u32,
    selected: usize,
    history: History,
}

impl GameState {
    /// Shuffle and deal a new game.
    ///
    /// Uses `config.seed` if set, otherwise a fresh random seed.
    pub fn new(config: GolfConfig) -> Result<Self, GolfError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self::deal(config, seed))
    }

    /// Deal the classic layout from a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::deal(GolfConfig::default(), seed)
    }

    fn deal(config: GolfConfig, seed: u64) -> Self {
        let mut deck = Deck::new();
        deck.shuffle(&mut GameRng::new(seed));

        let tableau = (0..config.columns)
            .map(|_| Pile::from_cards(deck.draw(config.column_depth)))
            .collect();
        let stock = Pile::face_down(deck.draw(config.stock_size));
        let waste = Pile::from_cards(deck.draw(config.waste_size));

        log::info!(
            "dealt {} columns of {}, stock {}, waste {} (seed {}, {} undealt)",
            config.columns,
            config.column_depth,
            stock.len(),
            waste.len(),
            seed,
            deck.len()
        );

        Self::assemble(config, Some(seed), tableau, stock, waste)
    }

    /// Build a game from an explicit layout, each pile listed bottom to top.
    ///
    /// Stock cards are turned face-down; tableau and waste cards keep the
    /// facing they were given. `config.columns` is set from the layout.
    pub fn from_piles(
        mut config: GolfConfig,
        tableau: Vec<Vec<Card>>,
        stock: Vec<Card>,
        waste: Vec<Card>,
    ) -> Self {
        config.columns = tableau.len();
        let tableau = tableau.into_iter().map(|cards| Pile::from_cards(cards)).collect();
        Self::assemble(config, None, tableau, Pile::face_down(stock), Pile::from_cards(waste))
    }

    fn assemble(
        config: GolfConfig,
        seed: Option<u64>,
        tableau: Vector<Pile>,
        stock: Pile,
        waste: Pile,
    ) -> Self {
        let initial = Snapshot {
            tableau: tableau.clone(),
            stock: stock.clone(),
            waste: waste.clone(),
            moves: 0,
            selected: 0,
        };
        Self {
            config,
            seed,
            tableau,
            stock,
            waste,
            moves: 0,
            selected: 0,
            history: History::new(initial),
        }
    }

    // === Queries ===

    /// Configuration this game was dealt from.
    #[must_use]
    pub fn config(&self) -> &GolfConfig {
        &self.config
    }

    /// Shuffle seed, or `None` for a hand-built layout.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Tableau columns, left to right.
    #[must_use]
    pub fn tableau(&self) -> &Vector<Pile> {
        &self.tableau
    }

    /// One tableau column.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&Pile> {
        self.tableau.get(index)
    }

    /// Number of tableau columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.tableau.len()
    }

    /// Cards left in the stock.
    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    /// The waste pile.
    #[must_use]
    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    /// Current waste top, the target for plays.
    #[must_use]
    pub fn waste_top(&self) -> Option<&Card> {
        self.waste.peek()
    }

    /// Cards on the waste.
    #[must_use]
    pub fn waste_len(&self) -> usize {
        self.waste.len()
    }

    /// Move counter.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Selected column (0-based).
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Cards in play across tableau, stock and waste.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.tableau.iter().map(Pile::len).sum::<usize>() + self.stock.len() + self.waste.len()
    }

    /// Positions that can be undone.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    /// Positions that can be redone.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// Running, won or lost.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        rules::evaluate(self)
    }

    /// Every move that would currently succeed.
    #[must_use]
    pub fn legal_moves(&self) -> SmallVec<[Move; 8]> {
        rules::legal_moves(self)
    }

    /// Copy of the current position.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tableau: self.tableau.clone(),
            stock: self.stock.clone(),
            waste: self.waste.clone(),
            moves: self.moves,
            selected: self.selected,
        }
    }

    // === Moves ===

    /// Turn the stock top onto the waste. Always legal while the stock has cards.
    pub fn draw_from_stock(&mut self) -> Result<Card, GolfError> {
        let card = self.stock.draw().ok_or(GolfError::EmptyPile(PileKind::Stock))?;
        self.waste.place(card);
        self.commit();
        Ok(card)
    }

    /// Move the top card of `column` onto the waste if the ranks are adjacent.
    pub fn play_from_tableau(&mut self, column: usize) -> Result<Card, GolfError> {
        let card = *self
            .column_checked(column)?
            .peek()
            .ok_or(GolfError::EmptyPile(PileKind::Tableau(column)))?;
        let target = *self.waste.peek().ok_or(GolfError::EmptyPile(PileKind::Waste))?;

        if !card.can_place_on(&target) {
            log::trace!("rejected {} onto {}", card, target);
            return Err(GolfError::IllegalMove {
                card: card.rank,
                target: target.rank,
            });
        }

        let card = self
            .tableau
            .get_mut(column)
            .and_then(Pile::draw)
            .ok_or(GolfError::EmptyPile(PileKind::Tableau(column)))?;
        self.waste.place(card);
        self.commit();
        Ok(card)
    }

    /// Place a card held outside the piles onto the waste if it is adjacent
    /// to the waste top.
    ///
    /// The card's origin is not touched. Callers must remove it from
    /// wherever it came from only when this returns `true`, or the card
    /// will exist twice. Tableau drags should use `pick_up` and
    /// `drop_on_waste` instead.
    pub fn offer_card_to_waste(&mut self, mut card: Card) -> bool {
        match self.waste.peek() {
            Some(top) if card.can_place_on(top) => {}
            _ => return false,
        }
        card.hidden = false;
        self.waste.place(card);
        self.commit();
        true
    }

    /// Pick up the top card of `column` for a drag. Does not change the state.
    pub fn pick_up(&self, column: usize) -> Result<HeldCard, GolfError> {
        let card = *self
            .column_checked(column)?
            .peek()
            .ok_or(GolfError::EmptyPile(PileKind::Tableau(column)))?;
        Ok(HeldCard { column, card })
    }

    /// Drop a held card on the waste.
    ///
    /// Removal from the origin column and placement happen as one move.
    pub fn drop_on_waste(&mut self, held: HeldCard) -> Result<Card, GolfError> {
        let still_on_top = self
            .column_checked(held.column)?
            .peek()
            .is_some_and(|top| top.same_identity(&held.card));
        if !still_on_top {
            return Err(GolfError::HeldCardStale { column: held.column });
        }
        self.play_from_tableau(held.column)
    }

    /// Apply a `Move`.
    pub fn apply(&mut self, mv: Move) -> Result<Card, GolfError> {
        match mv {
            Move::DrawStock => self.draw_from_stock(),
            Move::PlayColumn(column) => self.play_from_tableau(column),
        }
    }

    /// Set the selected column. Not a move.
    pub fn select(&mut self, column: usize) -> Result<(), GolfError> {
        self.column_checked(column)?;
        self.selected = column;
        Ok(())
    }

    // === History ===

    /// Return to the position before the last move.
    ///
    /// The move counter goes up, it is never rolled back.
    pub fn undo(&mut self) -> Result<(), GolfError> {
        let Some(snapshot) = self.history.undo().cloned() else {
            if self.config.charge_empty_undo {
                self.moves += 1;
            }
            return Err(GolfError::NothingToUndo);
        };
        self.restore(snapshot);
        self.moves += 1;
        log::debug!("undo, history depth {}", self.history.undo_depth());
        Ok(())
    }

    /// Re-apply the most recently undone move.
    pub fn redo(&mut self) -> Result<(), GolfError> {
        let snapshot = self.history.redo().cloned().ok_or(GolfError::NothingToRedo)?;
        self.restore(snapshot);
        self.moves += 1;
        log::debug!("redo, history depth {}", self.history.undo_depth());
        Ok(())
    }

    // === Internals ===

    fn column_checked(&self, column: usize) -> Result<&Pile, GolfError> {
        self.tableau.get(column).ok_or(GolfError::InvalidSelector {
            index: column,
            columns: self.tableau.len(),
        })
    }

    fn commit(&mut self) {
        self.moves += 1;
        self.history.record(self.snapshot());
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.tableau = snapshot.tableau;
        self.stock = snapshot.stock;
        self.waste = snapshot.waste;
        self.selected = snapshot.selected;
    }
}
