//! Game state module - owns the authoritative game and runs each turn
//!
//! A turn is: validate → place → score → consume from the queue →
//! clear/shift → cascade. Clearing turns are revealed in phases
//! (`Placed` → `Cleared` → `Settled`) that an external driver advances with
//! [`GameState::advance_phase`]; the controller is busy until the last one.

use log::{debug, info};
use serde::Serialize;

use crate::board::Board;
use crate::clears::{
    apply_clears_and_shifts, clear_only, compute_clears, resolve_all_clears, ClearScan,
};
use crate::config::GameConfig;
use crate::error::{ConfigError, PlayError};
use crate::geometry::Cells;
use crate::queue::{ShapeInstance, ShapeQueue};
use crate::rng::Mulberry32;
use crate::scoring::{calculate_move_score, ScoreResult, Stats, StatsDelta};
use crate::shapes::Catalog;
use crate::snapshot::GameSnapshot;
use crate::types::{CascadePhase, ClearKind, GameCommand, Orientation};

/// Everything one placement produced.
///
/// The three boards are the states a presentation layer animates between.
/// For a turn without clears they are identical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnOutcome {
    pub slot: usize,
    pub instance: ShapeInstance,
    pub col: i32,
    pub row: i32,
    /// Oriented offsets that were placed
    pub cells: Cells,
    /// Full lines and edge runs on the post-placement board
    pub scan: ClearScan,
    pub displacement: (i32, i32),
    pub move_score: ScoreResult,
    /// Applied when the shape lands
    pub move_delta: StatsDelta,
    /// Extra cascade passes, applied when the turn settles
    pub cascade_delta: StatsDelta,
    pub placed: Board,
    pub cleared: Board,
    pub settled: Board,
}

impl TurnOutcome {
    pub fn combo(&self) -> u32 {
        self.scan.combo()
    }

    pub fn edge_count(&self) -> u32 {
        self.scan.edge_count()
    }

    pub fn clear_kind(&self) -> Option<ClearKind> {
        ClearKind::from_combo(self.combo())
    }

    /// Whether the turn goes through the phased reveal
    pub fn is_phased(&self) -> bool {
        self.combo() > 0
    }
}

/// Result of a hover: the oriented cells and whether they fit there
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverPreview {
    pub slot: usize,
    pub col: i32,
    pub row: i32,
    pub cells: Cells,
    pub valid: bool,
}

/// What a dispatched command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Selected(usize),
    Preview(HoverPreview),
    Oriented(Orientation),
    Placed(Box<TurnOutcome>),
    PhaseAdvanced(CascadePhase),
    Restarted { seed: u32, episode_id: u32 },
}

/// Boards and stats still to be revealed for a phased turn
#[derive(Debug, Clone)]
struct PendingTurn {
    phase: CascadePhase,
    cleared: Board,
    settled: Board,
    cascade_delta: StatsDelta,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    catalog: Catalog,
    board: Board,
    queue: ShapeQueue,
    rng: Mulberry32,
    seed: u32,
    stats: Stats,
    /// Some while a placement is being revealed (the busy flag)
    pending: Option<PendingTurn>,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    last_turn: Option<TurnOutcome>,
}

impl GameState {
    /// Create a canonical game (12x12, four shapes, extended catalog)
    pub fn new(seed: u32) -> Self {
        let config = GameConfig::default();
        let catalog = Catalog::from_kind(config.catalog);
        Self::build(config, catalog, seed)
    }

    /// Create a game from a validated config
    pub fn with_config(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        let catalog = Catalog::from_kind(config.catalog);
        Ok(Self::build(config, catalog, seed))
    }

    /// Create a game drawing from a custom catalog (`config.catalog` is ignored)
    pub fn with_catalog(
        config: GameConfig,
        catalog: Catalog,
        seed: u32,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        Ok(Self::build(config, catalog, seed))
    }

    fn build(config: GameConfig, catalog: Catalog, seed: u32) -> Self {
        let mut rng = Mulberry32::new(seed);
        let mut queue = ShapeQueue::new(config.queue_size);
        queue.refill(&mut rng, &catalog);
        Self {
            board: Board::new(config.rows, config.cols),
            config,
            catalog,
            queue,
            rng,
            seed,
            stats: Stats::default(),
            pending: None,
            episode_id: 0,
            last_turn: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn queue(&self) -> &ShapeQueue {
        &self.queue
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn score(&self) -> u32 {
        self.stats.score
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Phase of the current turn; `Settled` when idle
    pub fn phase(&self) -> CascadePhase {
        self.pending
            .as_ref()
            .map_or(CascadePhase::Settled, |pending| pending.phase)
    }

    /// The most recent placement, kept until the next placement or restart
    pub fn last_turn(&self) -> Option<&TurnOutcome> {
        self.last_turn.as_ref()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            rows: self.board.rows(),
            cols: self.board.cols(),
            board: self.board.to_rows(),
            queue: self.queue.items().to_vec(),
            selected: self.queue.selected(),
            stats: self.stats,
            busy: self.is_busy(),
            phase: self.phase(),
            seed: self.seed,
            episode_id: self.episode_id,
        }
    }

    /// Restart with `seed`, or a freshly sampled one
    pub fn new_game(&mut self, seed: Option<u32>) {
        let seed = seed.unwrap_or_else(rand::random);
        self.restart(seed);
    }

    /// Restart with the current seed; the same shapes come up again
    pub fn reset_keeping_seed(&mut self) {
        self.restart(self.seed);
    }

    fn restart(&mut self, seed: u32) {
        self.seed = seed;
        self.rng = Mulberry32::new(seed);
        self.board.clear();
        self.queue.refill(&mut self.rng, &self.catalog);
        self.stats = Stats::default();
        self.pending = None;
        self.last_turn = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        info!("game started: seed={} episode={}", seed, self.episode_id);
    }

    /// Replace the board, e.g. to set up a position.
    ///
    /// # Panics
    ///
    /// If `board` does not match the configured dimensions.
    pub fn set_board(&mut self, board: Board) -> Result<(), PlayError> {
        self.ensure_idle()?;
        assert!(
            board.rows() == self.config.rows && board.cols() == self.config.cols,
            "board must be {}x{}",
            self.config.rows,
            self.config.cols
        );
        self.board = board;
        Ok(())
    }

    fn ensure_idle(&self) -> Result<(), PlayError> {
        if self.is_busy() {
            debug!("rejected: busy in phase {}", self.phase().as_str());
            return Err(PlayError::Busy);
        }
        Ok(())
    }

    pub fn select(&mut self, slot: usize) -> Result<(), PlayError> {
        self.queue.select(slot)
    }

    /// Advance a slot through the rotate cycle (four turns, then mirrored)
    pub fn rotate(&mut self, slot: usize) -> Result<Orientation, PlayError> {
        self.ensure_idle()?;
        self.queue.reorient(slot, Orientation::next_in_cycle)
    }

    pub fn rotate_selected(&mut self) -> Result<Orientation, PlayError> {
        self.rotate(self.queue.selected())
    }

    pub fn toggle_mirror(&mut self, slot: usize) -> Result<Orientation, PlayError> {
        self.ensure_idle()?;
        self.queue.reorient(slot, Orientation::toggled_h)
    }

    pub fn toggle_mirror_vertical(&mut self, slot: usize) -> Result<Orientation, PlayError> {
        self.ensure_idle()?;
        self.queue.reorient(slot, Orientation::toggled_v)
    }

    /// Jump a slot straight to `orientation`
    pub fn set_orientation(
        &mut self,
        slot: usize,
        orientation: Orientation,
    ) -> Result<Orientation, PlayError> {
        self.ensure_idle()?;
        self.queue.set_orientation(slot, orientation)
    }

    /// Oriented cells and validity for a slot at (col, row). Never mutates.
    ///
    /// Returns `None` for an empty slot or while busy.
    pub fn hover_preview(&self, slot: usize, col: i32, row: i32) -> Option<HoverPreview> {
        if self.is_busy() {
            return None;
        }
        let cells = self.queue.get(slot)?.cells();
        Some(HoverPreview {
            slot,
            col,
            row,
            valid: self.board.can_place(&cells, col, row),
            cells,
        })
    }

    /// Place the shape in `slot` with its bounding box origin at (col, row).
    ///
    /// Validity is checked against the current board and orientation, never a
    /// cached preview. On error nothing changes. A turn that clears lines
    /// leaves the controller busy in [`CascadePhase::Placed`]; otherwise it
    /// settles immediately.
    pub fn place_at(
        &mut self,
        slot: usize,
        col: i32,
        row: i32,
    ) -> Result<TurnOutcome, PlayError> {
        self.ensure_idle()?;
        let instance = *self.queue.get(slot).ok_or_else(|| {
            debug!("rejected: no shape in slot {}", slot);
            PlayError::InvalidSelection(slot)
        })?;
        let cells = instance.cells();
        if !self.board.can_place(&cells, col, row) {
            debug!("rejected: {} does not fit at ({}, {})", instance.key(), col, row);
            return Err(PlayError::InvalidPlacement { col, row });
        }

        let placed = self.board.place(&cells, col, row, instance.color);
        let scan = compute_clears(&placed);
        let placed_cells = cells.len() as u32;
        let move_score = calculate_move_score(placed_cells, scan.combo(), scan.edge_count());
        let move_delta = StatsDelta::for_move(placed_cells, &scan);
        let cleared = clear_only(&placed, &scan.full_rows, &scan.full_cols);
        let cascade = resolve_all_clears(&apply_clears_and_shifts(&placed, &scan));
        let cascade_delta = StatsDelta::for_cascade(&cascade);

        // Commit. The slot was checked above, so consume cannot fail.
        self.queue.consume(slot, &mut self.rng, &self.catalog)?;
        self.stats.apply(&move_delta);

        let outcome = TurnOutcome {
            slot,
            instance,
            col,
            row,
            cells,
            displacement: scan.displacement(),
            scan,
            move_score,
            move_delta,
            cascade_delta,
            placed,
            cleared,
            settled: cascade.board,
        };

        debug!(
            "placed {} at ({}, {}): combo={} edge={} score=+{}",
            instance.key(),
            col,
            row,
            outcome.combo(),
            outcome.edge_count(),
            move_score.total
        );

        if outcome.is_phased() {
            self.board = outcome.placed.clone();
            self.pending = Some(PendingTurn {
                phase: CascadePhase::Placed,
                cleared: outcome.cleared.clone(),
                settled: outcome.settled.clone(),
                cascade_delta,
            });
        } else {
            self.board = outcome.settled.clone();
            self.stats.apply(&cascade_delta);
        }
        self.last_turn = Some(outcome.clone());
        Ok(outcome)
    }

    /// Reveal the next phase of a pending turn
    pub fn advance_phase(&mut self) -> Result<CascadePhase, PlayError> {
        let pending = self.pending.take().ok_or(PlayError::NotBusy)?;
        let phase = match pending.phase {
            CascadePhase::Placed => {
                self.board = pending.cleared.clone();
                self.pending = Some(PendingTurn {
                    phase: CascadePhase::Cleared,
                    ..pending
                });
                CascadePhase::Cleared
            }
            CascadePhase::Cleared | CascadePhase::Settled => {
                self.board = pending.settled;
                self.stats.apply(&pending.cascade_delta);
                CascadePhase::Settled
            }
        };
        debug!("phase -> {}", phase.as_str());
        Ok(phase)
    }

    /// Advance until the pending turn (if any) has settled
    pub fn settle(&mut self) {
        while self.advance_phase().is_ok() {}
    }

    /// Dispatch a command.
    ///
    /// Placement-affecting commands are rejected with [`PlayError::Busy`]
    /// while a turn is being revealed.
    pub fn apply_command(&mut self, command: GameCommand) -> Result<CommandOutcome, PlayError> {
        if command.blocked_while_busy() {
            self.ensure_idle()?;
        }
        match command {
            GameCommand::Select { slot } => {
                self.select(slot)?;
                Ok(CommandOutcome::Selected(slot))
            }
            GameCommand::Hover { slot, col, row } => self
                .hover_preview(slot, col, row)
                .map(CommandOutcome::Preview)
                .ok_or(PlayError::InvalidSelection(slot)),
            GameCommand::Rotate { slot } => self.rotate(slot).map(CommandOutcome::Oriented),
            GameCommand::Mirror { slot } => self.toggle_mirror(slot).map(CommandOutcome::Oriented),
            GameCommand::MirrorVertical { slot } => self
                .toggle_mirror_vertical(slot)
                .map(CommandOutcome::Oriented),
            GameCommand::Place { slot, col, row } => self
                .place_at(slot, col, row)
                .map(|outcome| CommandOutcome::Placed(Box::new(outcome))),
            GameCommand::AdvancePhase => self.advance_phase().map(CommandOutcome::PhaseAdvanced),
            GameCommand::Reset => {
                self.reset_keeping_seed();
                Ok(self.restarted())
            }
            GameCommand::NewGame { seed } => {
                self.new_game(seed);
                Ok(self.restarted())
            }
        }
    }

    fn restarted(&self) -> CommandOutcome {
        CommandOutcome::Restarted {
            seed: self.seed,
            episode_id: self.episode_id,
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(0)
    }
}
