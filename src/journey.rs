use rand::seq::SliceRandom;
use rand::Rng;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use crate::models::{
    CityConfig, Direction, GameMessage, GameState, HistoryEntry, JourneyAction, Place, Station,
};
use crate::network::{DirectionLabels, MetroNetwork};
use crate::recommendations::RecommendationSource;
use crate::roulette::{draw_full_rotations, draw_slot, target_rotation, RouletteSlot, SlotKind, Wheel};

/// What a spin will do once revealed; resolved entirely at spin time
#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    Continue,
    /// Line to switch to, `None` when the station offers no other line
    Change(Option<String>),
    Exit,
}

/// Spin ids are unique for the whole process, across resets and engines
static NEXT_SPIN_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingSpin {
    id: u64,
    slot_index: usize,
    outcome: Outcome,
}

/// Everything the wheel animation needs to show a spin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinResult {
    /// Identifies this spin for [`JourneyEngine::finish_spin_if`]
    pub spin_id: u64,
    pub slot_index: usize,
    pub slot: RouletteSlot,
    pub wheel: Wheel,
    /// Wheel rotation to animate to, in degrees
    pub rotation: f64,
}

/// One play-through of the metro roulette.
///
/// Transitions are driven by player intents. An intent that is not valid in the
/// current state is ignored and reported as `false`/`None`; the session is left
/// untouched.
///
/// Spinning is two-phase: [`JourneyEngine::spin`] draws the slot and resolves
/// its outcome immediately, [`JourneyEngine::finish_spin`] applies it once the
/// wheel has settled.
#[derive(Clone)]
pub struct JourneyEngine {
    network: Rc<MetroNetwork>,
    city: &'static CityConfig,
    recommendation_source: Rc<dyn RecommendationSource>,
    state: GameState,
    current_station: Option<String>,
    current_line: Option<String>,
    direction: Direction,
    history: Vec<HistoryEntry>,
    message: GameMessage,
    rotation: f64,
    selected_slot: Option<usize>,
    pending: Option<PendingSpin>,
    recommendations: Vec<Place>,
}

impl JourneyEngine {
    #[must_use]
    pub fn new(
        network: Rc<MetroNetwork>,
        city: &'static CityConfig,
        recommendation_source: Rc<dyn RecommendationSource>,
    ) -> Self {
        Self {
            network,
            city,
            recommendation_source,
            state: GameState::SelectStation,
            current_station: None,
            current_line: None,
            direction: Direction::Forward,
            history: Vec::new(),
            message: GameMessage::SelectStation,
            rotation: 0.0,
            selected_slot: None,
            pending: None,
            recommendations: Vec::new(),
        }
    }

    #[must_use]
    pub fn network(&self) -> &MetroNetwork {
        &self.network
    }

    #[must_use]
    pub fn city(&self) -> &'static CityConfig {
        self.city
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn current_station_id(&self) -> Option<&str> {
        self.current_station.as_deref()
    }

    #[must_use]
    pub fn current_station(&self) -> Option<&Station> {
        self.current_station.as_deref().and_then(|id| self.network.station(id))
    }

    #[must_use]
    pub fn current_line(&self) -> Option<&str> {
        self.current_line.as_deref()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[must_use]
    pub fn message(&self) -> &GameMessage {
        &self.message
    }

    #[must_use]
    pub fn message_text(&self) -> String {
        self.message.render(&self.city.text)
    }

    /// Accumulated wheel rotation in degrees
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Slot revealed by the last settled spin
    #[must_use]
    pub fn selected_slot(&self) -> Option<usize> {
        self.selected_slot
    }

    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.pending.is_some()
    }

    /// Places near the exit station, filled once the exit is confirmed
    #[must_use]
    pub fn recommendations(&self) -> &[Place] {
        &self.recommendations
    }

    #[must_use]
    pub fn can_select_station(&self) -> bool {
        self.state.allows_station_selection()
    }

    #[must_use]
    pub fn can_spin(&self) -> bool {
        self.state == GameState::Playing && self.pending.is_none()
    }

    /// Lines the player may board at the current station
    #[must_use]
    pub fn available_lines(&self) -> &[String] {
        self.current_station
            .as_deref()
            .map(|id| self.network.lines_for_station(id))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn has_correspondence(&self) -> bool {
        self.current_station
            .as_deref()
            .is_some_and(|id| self.network.has_correspondence(id, self.current_line.as_deref()))
    }

    /// Wheel offered at the current station
    #[must_use]
    pub fn wheel(&self) -> Wheel {
        Wheel::for_correspondence(self.has_correspondence())
    }

    #[must_use]
    pub fn direction_labels(&self) -> DirectionLabels {
        self.network.direction_labels(self.current_line.as_deref(), &self.city.text)
    }

    #[must_use]
    pub fn stations_travelled(&self) -> usize {
        self.count_actions(JourneyAction::Move)
    }

    #[must_use]
    pub fn line_changes(&self) -> usize {
        self.count_actions(JourneyAction::Change)
    }

    fn count_actions(&self, action: JourneyAction) -> usize {
        self.history.iter().filter(|entry| entry.action == action).count()
    }

    /// Begin a journey at `station_id`
    ///
    /// A station served by a single line boards it directly; otherwise the
    /// player is asked to choose a line.
    pub fn start(&mut self, station_id: &str) -> bool {
        if !self.can_select_station() {
            return false;
        }
        let network = Rc::clone(&self.network);
        let Some(station) = network.station(station_id) else {
            return false;
        };

        self.current_station = Some(station.id.clone());
        self.direction = Direction::Forward;
        self.selected_slot = None;
        self.history = vec![HistoryEntry::new(station.id.clone(), JourneyAction::Start, None)];

        if let [only_line] = network.lines_for_station(&station.id) {
            self.current_line = Some(only_line.clone());
            self.state = GameState::SelectDirection;
            self.message = GameMessage::SelectDirection;
        } else {
            self.current_line = None;
            self.state = GameState::SelectLine;
            self.message = GameMessage::SelectLine;
        }

        log!("Journey starts at {} ({:?})", station.id, self.state);
        true
    }

    pub fn select_line(&mut self, line_id: &str) -> bool {
        if self.state != GameState::SelectLine {
            return false;
        }
        if !self.available_lines().iter().any(|line| line == line_id) {
            return false;
        }

        self.current_line = Some(line_id.to_string());
        self.state = GameState::SelectDirection;
        self.message = GameMessage::SelectDirection;
        log!("Boarding line {line_id}");
        true
    }

    pub fn select_direction(&mut self, direction: Direction) -> bool {
        if self.state != GameState::SelectDirection || self.current_line.is_none() {
            return false;
        }

        self.direction = direction;
        self.state = GameState::Playing;
        self.message = GameMessage::SpinRoulette;
        log!("Heading {direction:?}");
        true
    }

    /// Draw a slot on the current wheel and start the spin
    pub fn spin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<SpinResult> {
        if !self.can_spin() {
            return None;
        }
        let slot_index = draw_slot(rng);
        let full_rotations = draw_full_rotations(rng);
        self.spin_to_slot(slot_index, full_rotations, rng)
    }

    /// Start a spin that lands on `slot_index`
    ///
    /// `rng` is only used to pick the new line when the slot is a change.
    pub fn spin_to_slot<R: Rng + ?Sized>(
        &mut self,
        slot_index: usize,
        full_rotations: u32,
        rng: &mut R,
    ) -> Option<SpinResult> {
        if !self.can_spin() {
            return None;
        }
        let wheel = self.wheel();
        let slot = wheel.slot(slot_index)?;

        let outcome = match slot.kind {
            SlotKind::Continue => Outcome::Continue,
            SlotKind::Change => Outcome::Change(self.pick_alternate_line(rng)),
            SlotKind::Exit => Outcome::Exit,
        };

        self.rotation = target_rotation(self.rotation, slot_index, full_rotations);
        self.selected_slot = None;
        let spin_id = NEXT_SPIN_ID.fetch_add(1, Ordering::Relaxed);
        self.pending = Some(PendingSpin { id: spin_id, slot_index, outcome });

        log!("Spin {spin_id} lands on slot {slot_index} ({:?}) of {wheel:?}", slot.kind);
        Some(SpinResult {
            spin_id,
            slot_index,
            slot,
            wheel,
            rotation: self.rotation,
        })
    }

    /// Reveal and apply the pending spin
    pub fn finish_spin(&mut self) -> Option<SlotKind> {
        let pending = self.pending.take()?;
        self.selected_slot = Some(pending.slot_index);

        log!("Revealing spin {}", pending.id);
        let kind = match pending.outcome {
            Outcome::Continue => {
                self.advance();
                SlotKind::Continue
            }
            Outcome::Change(line) => {
                self.change_line(line);
                SlotKind::Change
            }
            Outcome::Exit => {
                self.offer_exit();
                SlotKind::Exit
            }
        };
        Some(kind)
    }

    /// Reveal the pending spin only if it is the one started as `spin_id`
    ///
    /// A settle timer outliving a reset must not reveal a later spin.
    pub fn finish_spin_if(&mut self, spin_id: u64) -> Option<SlotKind> {
        if self.pending.as_ref().is_some_and(|pending| pending.id == spin_id) {
            self.finish_spin()
        } else {
            None
        }
    }

    /// Accept or decline the exit offered by the wheel
    ///
    /// Declining resumes play from the same station, line and direction.
    pub fn confirm_exit(&mut self, validated: bool) -> bool {
        if self.state != GameState::ConfirmExit {
            return false;
        }
        let Some(station_id) = self.current_station.clone() else {
            return false;
        };

        if !validated {
            self.state = GameState::Playing;
            self.message = GameMessage::StayInMetro;
            log!("Exit at {station_id} declined");
            return true;
        }

        let station_name = self.station_name(&station_id);
        self.history.push(HistoryEntry::new(station_id.clone(), JourneyAction::Exit, None));
        self.state = GameState::Won;
        self.message = GameMessage::ExitConfirmed {
            station_id: station_id.clone(),
            station_name,
        };
        self.recommendations = match self.recommendation_source.recommendations_for(&station_id) {
            Ok(places) => places,
            Err(e) => {
                leptos::logging::warn!("Recommendations unavailable for {station_id}: {e}");
                Vec::new()
            }
        };

        log!(
            "Exit at {station_id} after {} stations, {} recommendations",
            self.stations_travelled(),
            self.recommendations.len()
        );
        true
    }

    /// Back to station selection with a blank session
    pub fn reset(&mut self) {
        self.state = GameState::SelectStation;
        self.current_station = None;
        self.current_line = None;
        self.direction = Direction::Forward;
        self.history.clear();
        self.message = GameMessage::SelectStation;
        self.rotation = 0.0;
        self.selected_slot = None;
        self.pending = None;
        self.recommendations.clear();
        log!("Journey reset");
    }

    fn station_name(&self, station_id: &str) -> String {
        self.network
            .station(station_id)
            .map_or_else(|| station_id.to_string(), |s| s.name.clone())
    }

    fn pick_alternate_line<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<String> {
        let station_id = self.current_station.as_deref()?;
        self.network
            .alternate_lines(station_id, self.current_line.as_deref())
            .choose(rng)
            .map(|line| (*line).to_string())
    }

    fn advance(&mut self) {
        let (Some(station_id), Some(line_id)) = (self.current_station.clone(), self.current_line.clone()) else {
            return;
        };

        let next = self
            .network
            .next_station(&station_id, &line_id, self.direction)
            .map(|s| (s.id.clone(), s.name.clone()));

        if let Some((next_id, next_name)) = next {
            self.current_station = Some(next_id.clone());
            log!("Advance to {next_id} on line {line_id}");
            self.history.push(HistoryEntry::new(next_id.clone(), JourneyAction::Move, Some(line_id)));
            self.message = GameMessage::AdvancedTo {
                station_id: next_id,
                station_name: next_name,
            };
        } else {
            self.direction = self.direction.reversed();
            log!("End of line {line_id} at {station_id}, now heading {:?}", self.direction);
            self.history.push(HistoryEntry::new(station_id, JourneyAction::Reverse, None));
            self.message = GameMessage::EndOfLine;
        }
    }

    fn change_line(&mut self, line: Option<String>) {
        let (Some(line_id), Some(station_id)) = (line, self.current_station.clone()) else {
            // Unreachable while the wheel is chosen from `has_correspondence`
            self.message = GameMessage::NoLineChange;
            log!("Change drawn with no other line available");
            return;
        };

        log!("Change at {station_id} to line {line_id}");
        let line_name = self.network.line_name(&line_id).to_string();
        self.current_line = Some(line_id.clone());
        self.history.push(HistoryEntry::new(station_id, JourneyAction::Change, Some(line_id.clone())));
        self.message = GameMessage::ChangedLine { line_id, line_name };
    }

    fn offer_exit(&mut self) {
        let Some(station_id) = self.current_station.clone() else {
            return;
        };
        let station_name = self.station_name(&station_id);
        log!("Exit offered at {station_id}");
        self.state = GameState::ConfirmExit;
        self.message = GameMessage::ConfirmExit { station_id, station_name };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CityId;
    use crate::network::tests::{paris, tiny};
    use crate::recommendations::StationRecommendations;
    use crate::roulette::SLOT_COUNT;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const CONTINUE_SLOT: usize = 0;
    const CHANGE_SLOT: usize = 1;
    const EXIT_SLOT_WITH_CHANGE: usize = 3;
    const EXIT_SLOT: usize = 9;

    struct FailingSource;

    impl RecommendationSource for FailingSource {
        fn recommendations_for(&self, _station_id: &str) -> Result<Vec<Place>, String> {
            Err("service down".to_string())
        }
    }

    fn paris_engine() -> JourneyEngine {
        let recommendations =
            StationRecommendations::from_json(include_str!("../data/paris/station_recommendations.json"))
                .expect("valid recommendations");
        JourneyEngine::new(Rc::new(paris()), CityId::Paris.config(), Rc::new(recommendations))
    }

    fn tiny_engine() -> JourneyEngine {
        JourneyEngine::new(Rc::new(tiny()), CityId::London.config(), Rc::new(FailingSource))
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    /// Start at `station`, board `line` and set off in `direction`
    fn board(engine: &mut JourneyEngine, station: &str, line: &str, direction: Direction) {
        assert!(engine.start(station));
        if engine.state() == GameState::SelectLine {
            assert!(engine.select_line(line));
        }
        assert_eq!(engine.current_line(), Some(line));
        assert!(engine.select_direction(direction));
        assert_eq!(engine.state(), GameState::Playing);
    }

    fn play(engine: &mut JourneyEngine, slot: usize) -> Option<SlotKind> {
        engine.spin_to_slot(slot, 3, &mut rng())?;
        engine.finish_spin()
    }

    fn assert_blank(engine: &JourneyEngine) {
        assert_eq!(engine.state(), GameState::SelectStation);
        assert_eq!(engine.current_station_id(), None);
        assert_eq!(engine.current_line(), None);
        assert_eq!(engine.direction(), Direction::Forward);
        assert!(engine.history().is_empty());
        assert!(!engine.is_spinning());
        assert_eq!(engine.message(), &GameMessage::SelectStation);
    }

    #[test]
    fn test_new_engine_is_blank() {
        let engine = paris_engine();
        assert_blank(&engine);
        assert_eq!(engine.message_text(), "Sélectionnez une station de départ");
    }

    #[test]
    fn test_single_line_stations_board_directly() {
        let mut engine = paris_engine();
        let network = paris();
        let single: Vec<&Station> = network
            .stations()
            .filter(|s| network.lines_for_station(&s.id).len() == 1)
            .collect();
        assert!(!single.is_empty());

        for station in single {
            engine.reset();
            assert!(engine.start(&station.id));
            assert_eq!(engine.state(), GameState::SelectDirection, "{}", station.id);
            assert_eq!(engine.current_line(), Some(network.lines_for_station(&station.id)[0].as_str()));
            assert_eq!(engine.history(), [HistoryEntry::new(station.id.clone(), JourneyAction::Start, None)]);
        }
    }

    #[test]
    fn test_interchanges_ask_for_a_line() {
        let mut engine = paris_engine();
        let network = paris();
        for station in network.stations().filter(|s| network.lines_for_station(&s.id).len() > 1) {
            engine.reset();
            assert!(engine.start(&station.id));
            assert_eq!(engine.state(), GameState::SelectLine, "{}", station.id);
            assert_eq!(engine.current_line(), None);
        }
    }

    #[test]
    fn test_start_ignores_unknown_station() {
        let mut engine = paris_engine();
        assert!(!engine.start("atlantis"));
        assert_blank(&engine);
    }

    #[test]
    fn test_restart_while_choosing_resets_history() {
        let mut engine = paris_engine();
        assert!(engine.start("chatelet"));
        assert!(engine.select_line("4"));
        assert!(engine.start("la-defense"));
        assert_eq!(engine.state(), GameState::SelectDirection);
        assert_eq!(engine.current_line(), Some("1"));
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.history()[0].station_id, "la-defense");
    }

    #[test]
    fn test_start_ignored_once_playing() {
        let mut engine = paris_engine();
        board(&mut engine, "la-defense", "1", Direction::Forward);
        assert!(!engine.start("chatelet"));
        assert_eq!(engine.current_station_id(), Some("la-defense"));
        assert_eq!(engine.state(), GameState::Playing);
    }

    #[test]
    fn test_select_line_requires_line_through_station() {
        let mut engine = paris_engine();
        assert!(!engine.select_line("1"));
        assert!(engine.start("chatelet"));
        assert!(!engine.select_line("7-villejuif"));
        assert!(!engine.select_line("zz"));
        assert_eq!(engine.state(), GameState::SelectLine);
        assert!(engine.select_line("14"));
        assert!(!engine.select_line("1"));
        assert_eq!(engine.current_line(), Some("14"));
    }

    #[test]
    fn test_select_direction_only_after_line() {
        let mut engine = paris_engine();
        assert!(!engine.select_direction(Direction::Backward));
        assert!(engine.start("chatelet"));
        assert!(!engine.select_direction(Direction::Backward));
        assert!(engine.select_line("1"));
        assert!(engine.select_direction(Direction::Backward));
        assert_eq!(engine.direction(), Direction::Backward);
        assert!(!engine.select_direction(Direction::Forward));
        assert_eq!(engine.direction(), Direction::Backward);
    }

    #[test]
    fn test_spin_ignored_outside_playing() {
        let mut engine = paris_engine();
        assert!(engine.spin(&mut rng()).is_none());
        assert!(engine.start("chatelet"));
        assert!(engine.spin(&mut rng()).is_none());
        assert!(engine.finish_spin().is_none());
        assert!(engine.history().len() == 1);
    }

    #[test]
    fn test_spin_ignored_while_spinning() {
        let mut engine = paris_engine();
        board(&mut engine, "chatelet", "1", Direction::Forward);
        let first = engine.spin(&mut rng()).expect("spin accepted");
        assert!(engine.is_spinning());
        assert!(!engine.can_spin());
        assert!(engine.spin(&mut rng()).is_none());
        assert_eq!(engine.rotation(), first.rotation);
        assert!(engine.finish_spin().is_some());
        assert!(engine.finish_spin().is_none());
    }

    #[test]
    fn test_spin_rejects_out_of_range_slot() {
        let mut engine = paris_engine();
        board(&mut engine, "chatelet", "1", Direction::Forward);
        assert!(engine.spin_to_slot(SLOT_COUNT, 3, &mut rng()).is_none());
        assert!(!engine.is_spinning());
        assert_eq!(engine.rotation(), 0.0);
    }

    #[test]
    fn test_spin_reveals_outcome_only_when_finished() {
        let mut engine = paris_engine();
        board(&mut engine, "la-defense", "1", Direction::Forward);
        let result = engine.spin_to_slot(CONTINUE_SLOT, 4, &mut rng()).expect("spin accepted");
        assert_eq!(result.slot.kind, SlotKind::Continue);
        assert_eq!(result.wheel, Wheel::NoChange);
        assert_eq!(engine.selected_slot(), None);
        assert_eq!(engine.current_station_id(), Some("la-defense"));

        assert_eq!(engine.finish_spin(), Some(SlotKind::Continue));
        assert_eq!(engine.selected_slot(), Some(CONTINUE_SLOT));
        assert_eq!(engine.current_station_id(), Some("esplanade-de-la-defense"));
    }

    #[test]
    fn test_spin_result_rotation_lands_on_slot() {
        let mut engine = paris_engine();
        board(&mut engine, "chatelet", "1", Direction::Forward);
        let mut rng = rng();
        for _ in 0..20 {
            let Some(result) = engine.spin(&mut rng) else { break };
            assert_eq!(crate::roulette::slot_under_pointer(result.rotation), result.slot_index);
            engine.finish_spin();
            if engine.state() == GameState::ConfirmExit {
                assert!(engine.confirm_exit(false));
            }
        }
    }

    #[test]
    fn test_continue_moves_along_line() {
        let mut engine = paris_engine();
        board(&mut engine, "la-defense", "1", Direction::Forward);
        assert_eq!(play(&mut engine, CONTINUE_SLOT), Some(SlotKind::Continue));
        assert_eq!(play(&mut engine, CONTINUE_SLOT), Some(SlotKind::Continue));

        assert_eq!(engine.current_station_id(), Some("pont-de-neuilly"));
        let last = engine.history().last().expect("history");
        assert_eq!(last, &HistoryEntry::new("pont-de-neuilly", JourneyAction::Move, Some("1".to_string())));
        assert_eq!(engine.stations_travelled(), 2);
        assert_eq!(engine.message_text(), "Vous avancez à Pont de Neuilly. Relancez la roulette !");
    }

    #[test]
    fn test_continue_past_either_terminus_reverses_in_place() {
        let network = paris();
        let mut engine = paris_engine();
        for line in network.line_ids() {
            let ids = network.line_station_ids(line);
            let ends = [
                (ids.last().expect("non-empty line"), Direction::Forward),
                (ids.first().expect("non-empty line"), Direction::Backward),
            ];
            for (terminus, direction) in ends {
                engine.reset();
                board(&mut engine, terminus, line, direction);
                let before = engine.history().len();

                assert_eq!(play(&mut engine, CONTINUE_SLOT), Some(SlotKind::Continue));
                assert_eq!(engine.current_station_id(), Some(terminus.as_str()), "{line} at {terminus}");
                assert_eq!(engine.current_line(), Some(line));
                assert_eq!(engine.direction(), direction.reversed());
                assert_eq!(engine.history().len(), before + 1);
                assert_eq!(
                    engine.history().last(),
                    Some(&HistoryEntry::new(terminus.clone(), JourneyAction::Reverse, None))
                );
                assert_eq!(engine.message(), &GameMessage::EndOfLine);
            }
        }
    }

    #[test]
    fn test_reversal_then_continue_heads_back() {
        let mut engine = paris_engine();
        board(&mut engine, "chateau-de-vincennes", "1", Direction::Forward);
        play(&mut engine, CONTINUE_SLOT);
        play(&mut engine, CONTINUE_SLOT);
        assert_eq!(engine.current_station_id(), Some("berault"));
        assert_eq!(engine.direction(), Direction::Backward);
    }

    #[test]
    fn test_missing_neighbor_record_counts_as_terminus() {
        let mut engine = tiny_engine();
        board(&mut engine, "c", "a", Direction::Forward);
        play(&mut engine, CONTINUE_SLOT);
        assert_eq!(engine.current_station_id(), Some("c"));
        assert_eq!(engine.direction(), Direction::Backward);
    }

    #[test]
    fn test_stations_without_correspondence_never_change() {
        let network = paris();
        let mut engine = paris_engine();
        for station in network.stations().filter(|s| network.lines_for_station(&s.id).len() == 1) {
            engine.reset();
            let line = network.lines_for_station(&station.id)[0].clone();
            board(&mut engine, &station.id, &line, Direction::Forward);
            assert_eq!(engine.wheel(), Wheel::NoChange);

            for slot in 0..SLOT_COUNT {
                let mut trial = engine.clone();
                let kind = play(&mut trial, slot).expect("spin accepted");
                assert_ne!(kind, SlotKind::Change, "{} slot {slot}", station.id);
                assert_eq!(trial.line_changes(), 0);
            }
        }
    }

    #[test]
    fn test_interchange_offers_change_wheel_only_for_other_lines() {
        let mut engine = paris_engine();
        board(&mut engine, "pyramides", "14", Direction::Forward);
        assert_eq!(engine.wheel(), Wheel::WithChange);

        engine.reset();
        board(&mut engine, "madeleine", "14", Direction::Forward);
        assert_eq!(engine.wheel(), Wheel::NoChange);
    }

    #[test]
    fn test_change_switches_to_another_line_in_place() {
        let mut engine = paris_engine();
        board(&mut engine, "chatelet", "1", Direction::Backward);
        assert_eq!(play(&mut engine, CHANGE_SLOT), Some(SlotKind::Change));

        let new_line = engine.current_line().expect("line").to_string();
        assert!(["4", "7", "11", "14"].contains(&new_line.as_str()));
        assert_eq!(engine.current_station_id(), Some("chatelet"));
        assert_eq!(engine.direction(), Direction::Backward);
        assert_eq!(
            engine.history().last(),
            Some(&HistoryEntry::new("chatelet", JourneyAction::Change, Some(new_line.clone())))
        );
        assert_eq!(engine.line_changes(), 1);
        assert!(matches!(engine.message(), GameMessage::ChangedLine { line_id, .. } if *line_id == new_line));
    }

    #[test]
    fn test_continue_after_change_follows_new_line() {
        let network = paris();
        let mut engine = paris_engine();
        board(&mut engine, "chatelet", "1", Direction::Forward);
        play(&mut engine, CHANGE_SLOT);
        let new_line = engine.current_line().expect("line").to_string();
        let expected = network
            .next_station("chatelet", &new_line, Direction::Forward)
            .map_or("chatelet", |s| s.id.as_str());

        play(&mut engine, CONTINUE_SLOT);
        assert_eq!(engine.current_station_id(), Some(expected));
    }

    #[test]
    fn test_change_picks_every_alternate_eventually() {
        let mut seen = std::collections::HashSet::new();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let mut engine = paris_engine();
            board(&mut engine, "chatelet", "1", Direction::Forward);
            engine.spin_to_slot(CHANGE_SLOT, 3, &mut rng).expect("spin accepted");
            engine.finish_spin();
            seen.insert(engine.current_line().expect("line").to_string());
        }
        assert_eq!(seen.len(), 4);
        assert!(!seen.contains("1"));
    }

    #[test]
    fn test_change_without_alternate_is_a_no_op() {
        let mut engine = paris_engine();
        board(&mut engine, "la-defense", "1", Direction::Forward);
        let history = engine.history().to_vec();
        engine.change_line(None);
        assert_eq!(engine.history(), history.as_slice());
        assert_eq!(engine.current_line(), Some("1"));
        assert_eq!(engine.message(), &GameMessage::NoLineChange);
        assert_eq!(engine.state(), GameState::Playing);
    }

    #[test]
    fn test_chatelet_end_to_end() {
        let mut engine = paris_engine();

        assert!(engine.start("chatelet"));
        assert_eq!(engine.state(), GameState::SelectLine);
        assert_eq!(engine.available_lines().len(), 5);

        assert!(engine.select_line("1"));
        assert_eq!(engine.state(), GameState::SelectDirection);
        assert!(engine.select_direction(Direction::Forward));
        assert_eq!(engine.state(), GameState::Playing);

        let result = engine.spin_to_slot(EXIT_SLOT_WITH_CHANGE, 3, &mut rng()).expect("spin accepted");
        assert_eq!(result.wheel, Wheel::WithChange);
        assert_eq!(result.slot.kind, SlotKind::Exit);
        assert_eq!(engine.finish_spin(), Some(SlotKind::Exit));
        assert_eq!(engine.state(), GameState::ConfirmExit);
        assert!(matches!(engine.message(), GameMessage::ConfirmExit { station_id, .. } if station_id == "chatelet"));
        assert!(engine.message_text().contains("Châtelet"));

        assert!(engine.confirm_exit(false));
        assert_eq!(engine.state(), GameState::Playing);
        assert_eq!(engine.current_station_id(), Some("chatelet"));
        assert_eq!(engine.current_line(), Some("1"));
        assert_eq!(engine.direction(), Direction::Forward);
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.message(), &GameMessage::StayInMetro);

        assert_eq!(play(&mut engine, EXIT_SLOT), Some(SlotKind::Exit));
        assert!(engine.confirm_exit(true));
        assert_eq!(engine.state(), GameState::Won);
        assert_eq!(engine.current_station_id(), Some("chatelet"));
        assert_eq!(engine.history().len(), 2);
        assert_eq!(
            engine.history().last(),
            Some(&HistoryEntry::new("chatelet", JourneyAction::Exit, None))
        );
        assert!(!engine.recommendations().is_empty());
        assert_eq!(engine.message_text(), "🎉 Vous sortez à Châtelet !");
    }

    #[test]
    fn test_won_is_terminal_until_reset() {
        let mut engine = paris_engine();
        board(&mut engine, "bastille", "1", Direction::Forward);
        play(&mut engine, EXIT_SLOT);
        assert!(engine.confirm_exit(true));

        assert!(!engine.confirm_exit(true));
        assert!(engine.spin(&mut rng()).is_none());
        assert!(!engine.start("chatelet"));
        assert_eq!(engine.history().len(), 2);
    }

    #[test]
    fn test_confirm_exit_ignored_outside_confirmation() {
        let mut engine = paris_engine();
        assert!(!engine.confirm_exit(true));
        board(&mut engine, "chatelet", "1", Direction::Forward);
        assert!(!engine.confirm_exit(true));
        assert_eq!(engine.state(), GameState::Playing);
    }

    #[test]
    fn test_recommendation_failure_still_wins() {
        let mut engine = tiny_engine();
        board(&mut engine, "a", "a", Direction::Forward);
        play(&mut engine, EXIT_SLOT);
        assert!(engine.confirm_exit(true));
        assert_eq!(engine.state(), GameState::Won);
        assert!(engine.recommendations().is_empty());
    }

    #[test]
    fn test_station_without_recommendations_wins_with_empty_list() {
        let mut engine = paris_engine();
        board(&mut engine, "la-defense", "1", Direction::Forward);
        play(&mut engine, EXIT_SLOT);
        assert!(engine.confirm_exit(true));
        assert!(engine.recommendations().is_empty());
    }

    #[test]
    fn test_reset_from_every_state_is_blank() {
        let mut engine = paris_engine();
        engine.reset();
        assert_blank(&engine);

        assert!(engine.start("chatelet"));
        engine.reset();
        assert_blank(&engine);

        assert!(engine.start("la-defense"));
        engine.reset();
        assert_blank(&engine);

        board(&mut engine, "chatelet", "1", Direction::Backward);
        play(&mut engine, CONTINUE_SLOT);
        engine.reset();
        assert_blank(&engine);

        board(&mut engine, "chatelet", "1", Direction::Backward);
        play(&mut engine, EXIT_SLOT);
        assert_eq!(engine.state(), GameState::ConfirmExit);
        engine.reset();
        assert_blank(&engine);

        board(&mut engine, "chatelet", "1", Direction::Backward);
        play(&mut engine, EXIT_SLOT);
        engine.confirm_exit(true);
        engine.reset();
        assert_blank(&engine);
        assert!(engine.recommendations().is_empty());
        assert_eq!(engine.rotation(), 0.0);

        engine.reset();
        assert_blank(&engine);
    }

    #[test]
    fn test_reset_discards_pending_spin() {
        let mut engine = paris_engine();
        board(&mut engine, "la-defense", "1", Direction::Forward);
        engine.spin_to_slot(CONTINUE_SLOT, 3, &mut rng()).expect("spin accepted");
        engine.reset();
        assert!(engine.finish_spin().is_none());
        assert_blank(&engine);
    }

    #[test]
    fn test_stale_spin_id_does_not_reveal_repeated_spin() {
        let mut engine = paris_engine();
        board(&mut engine, "la-defense", "1", Direction::Forward);
        let first = engine.spin_to_slot(CONTINUE_SLOT, 3, &mut rng()).expect("spin accepted");
        engine.reset();

        board(&mut engine, "la-defense", "1", Direction::Forward);
        let second = engine.spin_to_slot(CONTINUE_SLOT, 3, &mut rng()).expect("spin accepted");
        assert_eq!(first.rotation, second.rotation);
        assert_ne!(first.spin_id, second.spin_id);

        assert!(engine.finish_spin_if(first.spin_id).is_none());
        assert!(engine.is_spinning());
        assert_eq!(engine.current_station_id(), Some("la-defense"));

        assert_eq!(engine.finish_spin_if(second.spin_id), Some(SlotKind::Continue));
        assert_eq!(engine.current_station_id(), Some("esplanade-de-la-defense"));
        assert!(engine.finish_spin_if(second.spin_id).is_none());
    }

    #[test]
    fn test_current_line_always_serves_current_station() {
        let network = paris();
        let mut engine = paris_engine();
        let mut rng = StdRng::seed_from_u64(11);
        board(&mut engine, "chatelet", "7", Direction::Forward);

        for _ in 0..500 {
            if engine.spin(&mut rng).is_none() {
                break;
            }
            engine.finish_spin();
            if engine.state() == GameState::ConfirmExit {
                engine.confirm_exit(false);
            }
            let station = engine.current_station_id().expect("station");
            let line = engine.current_line().expect("line");
            assert!(network.line_station_ids(line).iter().any(|id| id == station), "{line} at {station}");
        }
    }

    #[test]
    fn test_direction_labels_follow_current_line() {
        let mut engine = paris_engine();
        assert!(engine.start("chatelet"));
        assert_eq!(engine.direction_labels().forward, "Direction 1");
        assert!(engine.select_line("11"));
        let labels = engine.direction_labels();
        assert_eq!(labels.forward, "→ Belleville");
        assert_eq!(labels.backward, "← Châtelet");
    }
}
