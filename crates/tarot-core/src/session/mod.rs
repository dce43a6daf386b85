//! Reading session management.
//!
//! `SessionController` owns the single live session and drives it through
//! question capture, draw, batch reveal, interpretation, display, and reset.
//! Time only moves through [`SessionController::tick`]; every timer belongs to
//! a session generation, and closing the session bumps the generation so
//! timers and replies from before the reset have no visible effect.

mod clock;
mod phase;

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{SessionConfig, TimingConfig};
use crate::data::QuestionBank;
use crate::deck::Deck;
use crate::error::{TarotError, TarotResult};
use crate::hand::{HAND_SIZE, Hand};
use crate::interpreter::Interpreter;
use crate::language::Language;
use crate::prompt::{PromptPayload, build_prompt};
use crate::sections::Sections;

pub use clock::{SessionClock, Timer, TimerKind, TimerQueue};
pub use phase::{Fog, Notice, Overlay, Phase, SessionEvent};

use phase::Stage;

/// An outstanding interpretation request.
///
/// Handed out by [`SessionController::begin_reading`] and redeemed with
/// [`SessionController::complete_reading`]. A ticket from before a reset is
/// discarded on redemption.
#[derive(Debug, Clone)]
pub struct ReadingTicket {
    generation: u64,
    payload: PromptPayload,
}

impl ReadingTicket {
    /// The request to send to the interpretation service.
    pub fn payload(&self) -> &PromptPayload {
        &self.payload
    }

    /// Session generation the request was issued in.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Read-only snapshot of a session, for renderers.
#[derive(Debug, Clone, Copy)]
pub struct SessionView<'a> {
    /// Current phase.
    pub phase: Phase,
    /// Reading language.
    pub language: Language,
    /// The question being asked.
    pub question: &'a str,
    /// Current question suggestions.
    pub suggestions: &'a [String],
    /// The drawn hand, if any.
    pub hand: Option<&'a Hand>,
    /// Overlay state while a reading is requested or shown.
    pub overlay: Option<Overlay>,
    /// Parsed reading; empty until one has arrived.
    pub interpretation: &'a [String],
    /// Pending user notice.
    pub notice: Option<Notice>,
    /// Whether the get-reading trigger is enabled.
    pub can_request_reading: bool,
}

impl SessionView<'_> {
    /// Reading text, hidden until the overlay shows it.
    pub fn visible_interpretation(&self) -> &[String] {
        match self.overlay {
            Some(overlay) if overlay.text_visible => self.interpretation,
            _ => &[],
        }
    }
}

/// The reading session state machine.
pub struct SessionController {
    deck: Deck,
    questions: QuestionBank,
    timing: TimingConfig,
    suggestion_count: usize,
    rng: StdRng,
    clock: SessionClock,
    timers: TimerQueue,
    generation: u64,
    language: Language,
    question: String,
    suggestions: Vec<String>,
    stage: Stage,
    notice: Option<Notice>,
}

impl SessionController {
    /// Create an idle session over a deck and question bank.
    pub fn new(deck: Deck, questions: QuestionBank, config: SessionConfig) -> TarotResult<Self> {
        if deck.len() < HAND_SIZE {
            return Err(TarotError::InvalidArgument(format!(
                "deck has {} cards, a hand needs {HAND_SIZE}",
                deck.len()
            )));
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let suggestions = questions.suggest(config.language, config.suggestion_count, &mut rng);

        Ok(Self {
            deck,
            questions,
            timing: config.timing,
            suggestion_count: config.suggestion_count,
            rng,
            clock: SessionClock::new(),
            timers: TimerQueue::new(),
            generation: 0,
            language: config.language,
            question: String::new(),
            suggestions,
            stage: Stage::Idle,
            notice: None,
        })
    }

    /// Create an idle session over the embedded deck and questions.
    pub fn standard(config: SessionConfig) -> TarotResult<Self> {
        Self::new(Deck::standard()?, QuestionBank::standard()?, config)
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.stage.phase()
    }

    /// The question being asked (empty when idle and nothing typed).
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Reading language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Current question suggestions.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// The drawn hand, if any.
    pub fn hand(&self) -> Option<&Hand> {
        self.stage.hand()
    }

    /// The parsed reading, once it has arrived.
    pub fn sections(&self) -> Option<&Sections> {
        match &self.stage {
            Stage::Displaying { sections, .. } => Some(sections),
            _ => None,
        }
    }

    /// The parsed reading as plain strings; empty until one has arrived.
    pub fn interpretation(&self) -> &[String] {
        self.sections().map(Sections::as_slice).unwrap_or_default()
    }

    /// The reading overlay, open while a reading is requested or shown.
    pub fn overlay(&self) -> Option<Overlay> {
        self.stage.overlay()
    }

    /// The pending user notice, if input was rejected.
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Session generation; increases on every close.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Session time.
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Reveal and display pacing.
    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// The deck cards are drawn from.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Whether the get-reading trigger is enabled.
    pub fn can_request_reading(&self) -> bool {
        self.phase() == Phase::Revealed
    }

    /// Time until the next live timer fires, if any is pending.
    pub fn next_timer_in(&self) -> Option<Duration> {
        self.timers
            .next_due(self.generation)
            .map(|due| due.saturating_sub(self.clock.now()))
    }

    /// Snapshot of everything a renderer needs.
    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            phase: self.phase(),
            language: self.language,
            question: &self.question,
            suggestions: &self.suggestions,
            hand: self.hand(),
            overlay: self.overlay(),
            interpretation: self.interpretation(),
            notice: self.notice,
            can_request_reading: self.can_request_reading(),
        }
    }

    /// Dismiss the pending notice.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Switch language and draw a fresh set of suggestions.
    pub fn set_language(&mut self, language: Language) {
        if language == self.language {
            return;
        }
        self.language = language;
        self.suggestions = self
            .questions
            .suggest(language, self.suggestion_count, &mut self.rng);
        tracing::debug!(%language, "language changed");
    }

    /// Replace the typed question.
    pub fn set_question(&mut self, question: impl Into<String>) -> TarotResult<()> {
        self.require_idle("edit the question")?;
        self.question = question.into();
        Ok(())
    }

    /// Copy suggestion `index` into the question.
    pub fn choose_suggestion(&mut self, index: usize) -> TarotResult<&str> {
        self.require_idle("choose a suggestion")?;
        let suggestion = self.suggestions.get(index).cloned().ok_or_else(|| {
            TarotError::InvalidArgument(format!("no suggestion #{}", index.saturating_add(1)))
        })?;
        self.question = suggestion;
        Ok(self.question.as_str())
    }

    /// Ask a question: draw a face-down hand and schedule its reveal.
    ///
    /// An empty or whitespace-only question is rejected with a notice and
    /// leaves the session untouched.
    pub fn submit(&mut self, question: &str) -> TarotResult<()> {
        self.require_idle("submit a question")?;
        if question.trim().is_empty() {
            return self.reject(TarotError::EmptyQuestion);
        }

        let hand = self.deck.draw_hand(&mut self.rng)?;
        self.question = question.trim().to_string();
        self.notice = None;
        self.stage = Stage::Drawing { hand };

        let delay = self.timing.reveal_delay;
        self.schedule(delay, TimerKind::RevealCards);
        tracing::info!(
            question = %self.question,
            generation = self.generation,
            "cards drawn"
        );
        Ok(())
    }

    /// Open the reading overlay and produce the interpretation request.
    ///
    /// Only valid once the cards are face up; otherwise the request is
    /// rejected with a notice and nothing changes.
    pub fn begin_reading(&mut self) -> TarotResult<ReadingTicket> {
        match self.phase() {
            Phase::Revealed => {}
            Phase::Idle => return self.reject(TarotError::NoHand),
            Phase::Drawing => return self.reject(TarotError::CardsNotRevealed),
            Phase::AwaitingInterpretation => return self.reject(TarotError::ReadingInProgress),
            phase @ Phase::Displaying => {
                return Err(TarotError::OutOfPhase {
                    action: "request a reading",
                    phase,
                });
            }
        }

        let cards = self.stage.hand().map(Hand::cards).unwrap_or_default();
        let payload = build_prompt(&self.question, cards, self.language)?;

        if let Stage::Revealed { hand } = self.take_stage() {
            self.stage = Stage::AwaitingInterpretation {
                hand,
                overlay: Overlay::opened(),
            };
        }
        tracing::info!(generation = self.generation, "reading requested");

        Ok(ReadingTicket {
            generation: self.generation,
            payload,
        })
    }

    /// Store the interpretation for a ticket and schedule its unveiling.
    ///
    /// Returns `false` if the ticket is stale (the session was closed since)
    /// or no reading is outstanding; the text is then dropped.
    pub fn complete_reading(&mut self, ticket: ReadingTicket, text: &str) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding reading from a closed session"
            );
            return false;
        }

        let (hand, overlay) = match self.take_stage() {
            Stage::AwaitingInterpretation { hand, overlay } => (hand, overlay),
            other => {
                tracing::debug!(phase = %other.phase(), "no reading outstanding");
                self.stage = other;
                return false;
            }
        };

        let sections = Sections::parse(text);
        tracing::info!(sections = sections.len(), "reading received");
        self.stage = Stage::Displaying {
            hand,
            overlay,
            sections,
        };

        let timing = self.timing;
        self.schedule(timing.text_reveal, TimerKind::ShowText);
        self.schedule(timing.fog_fade, TimerKind::FadeFog);
        self.schedule(timing.fog_clear, TimerKind::ClearFog);
        true
    }

    /// Request, await, and store a reading in one step.
    pub async fn get_reading<I>(&mut self, interpreter: &I) -> TarotResult<()>
    where
        I: Interpreter + ?Sized,
    {
        let ticket = self.begin_reading()?;
        let text = interpreter.interpret(ticket.payload()).await;
        self.complete_reading(ticket, &text);
        Ok(())
    }

    /// Reset to an idle session. Valid from any phase.
    ///
    /// Pending timers and outstanding requests stay where they are but can no
    /// longer affect the session.
    pub fn close(&mut self) {
        let from = self.phase();
        self.generation += 1;
        self.stage = Stage::Idle;
        self.question.clear();
        self.notice = None;
        tracing::info!(%from, generation = self.generation, "session closed");
    }

    /// Advance session time and fire every timer that came due.
    ///
    /// Returns the effects that became visible, in firing order.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<SessionEvent> {
        let now = self.clock.advance(elapsed);
        let mut events = Vec::new();

        for timer in self.timers.pop_due(now) {
            if timer.generation != self.generation {
                tracing::trace!(kind = ?timer.kind, generation = timer.generation, "stale timer");
                continue;
            }
            if let Some(event) = self.fire(timer.kind) {
                events.push(event);
            }
        }

        events
    }

    fn fire(&mut self, kind: TimerKind) -> Option<SessionEvent> {
        if kind == TimerKind::RevealCards {
            return match self.take_stage() {
                Stage::Drawing { mut hand } => {
                    hand.reveal();
                    self.stage = Stage::Revealed { hand };
                    tracing::debug!("cards revealed");
                    Some(SessionEvent::CardsRevealed)
                }
                other => {
                    self.stage = other;
                    None
                }
            };
        }

        let Stage::Displaying { overlay, .. } = &mut self.stage else {
            return None;
        };
        match kind {
            TimerKind::ShowText => {
                overlay.text_visible = true;
                Some(SessionEvent::TextShown)
            }
            TimerKind::FadeFog if overlay.fog == Fog::Active => {
                overlay.fog = Fog::Fading;
                Some(SessionEvent::FogFading)
            }
            TimerKind::ClearFog => {
                overlay.fog = Fog::Cleared;
                Some(SessionEvent::FogCleared)
            }
            TimerKind::FadeFog | TimerKind::RevealCards => None,
        }
    }

    fn schedule(&mut self, delay: Duration, kind: TimerKind) {
        self.timers.schedule(Timer {
            due: self.clock.now() + delay,
            generation: self.generation,
            kind,
        });
    }

    fn take_stage(&mut self) -> Stage {
        std::mem::replace(&mut self.stage, Stage::Idle)
    }

    fn require_idle(&self, action: &'static str) -> TarotResult<()> {
        match self.phase() {
            Phase::Idle => Ok(()),
            phase => Err(TarotError::OutOfPhase { action, phase }),
        }
    }

    fn reject<T>(&mut self, error: TarotError) -> TarotResult<T> {
        if let Some(notice) = error.notice() {
            self.notice = Some(notice);
        }
        tracing::debug!(%error, phase = %self.phase(), "input rejected");
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Arcana, Card};
    use crate::prompt::Role;
    use crate::sections::SectionLabel;
    use async_trait::async_trait;
    use std::collections::HashSet;

    struct Scripted(&'static str);

    #[async_trait]
    impl Interpreter for Scripted {
        async fn interpret(&self, _payload: &PromptPayload) -> String {
            self.0.to_string()
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn session() -> SessionController {
        SessionController::standard(SessionConfig::default().with_seed(42)).unwrap()
    }

    fn revealed_session() -> SessionController {
        let mut s = session();
        s.submit("Will I find love?").unwrap();
        s.tick(ms(500));
        assert_eq!(s.phase(), Phase::Revealed);
        s
    }

    fn displaying_session(text: &str) -> SessionController {
        let mut s = revealed_session();
        let ticket = s.begin_reading().unwrap();
        assert!(s.complete_reading(ticket, text));
        s
    }

    fn assert_reset(s: &SessionController) {
        assert_eq!(s.phase(), Phase::Idle);
        assert!(s.question().is_empty());
        assert!(s.hand().is_none());
        assert!(s.interpretation().is_empty());
        assert!(s.overlay().is_none());
        assert!(s.notice().is_none());
    }

    #[test]
    fn new_session_is_idle() {
        let s = session();
        assert_reset(&s);
        assert_eq!(s.suggestions().len(), 5);
        assert_eq!(s.generation(), 0);
        assert!(!s.can_request_reading());
        assert!(s.next_timer_in().is_none());
    }

    #[test]
    fn deck_too_small_rejected() {
        let deck = Deck::new(vec![
            Card::new("The Sun", Arcana::Major, ""),
            Card::new("The Moon", Arcana::Major, ""),
        ])
        .unwrap();
        let bank = QuestionBank::standard().unwrap();
        let result = SessionController::new(deck, bank, SessionConfig::default());
        assert!(matches!(result, Err(TarotError::InvalidArgument(_))));
    }

    #[test]
    fn empty_question_stays_idle() {
        let mut s = session();
        for q in ["", "   ", "\n\t"] {
            let err = s.submit(q).unwrap_err();
            assert!(matches!(err, TarotError::EmptyQuestion));
            assert_eq!(s.phase(), Phase::Idle);
            assert!(s.hand().is_none());
        }
        assert_eq!(s.notice(), Some(Notice::EmptyQuestion));

        s.dismiss_notice();
        assert!(s.notice().is_none());
    }

    #[test]
    fn submit_draws_face_down_hand() {
        let mut s = session();
        s.submit("  Will I find love?  ").unwrap();
        assert_eq!(s.phase(), Phase::Drawing);
        assert_eq!(s.question(), "Will I find love?");

        let hand = s.hand().unwrap();
        assert!(!hand.is_revealed());
        let names: HashSet<_> = hand.cards().iter().map(|c| &c.name).collect();
        assert_eq!(names.len(), 3);
        assert_eq!(s.next_timer_in(), Some(ms(500)));
    }

    #[test]
    fn cards_revealed_as_one_batch_after_delay() {
        let mut s = session();
        s.submit("Career?").unwrap();

        assert!(s.tick(ms(499)).is_empty());
        assert_eq!(s.phase(), Phase::Drawing);
        assert!(!s.can_request_reading());

        assert_eq!(s.tick(ms(1)), vec![SessionEvent::CardsRevealed]);
        assert_eq!(s.phase(), Phase::Revealed);
        assert!(s.hand().unwrap().is_revealed());
        assert!(s.can_request_reading());
    }

    #[test]
    fn submit_outside_idle_rejected() {
        let mut s = session();
        s.submit("Career?").unwrap();
        let err = s.submit("Love?").unwrap_err();
        assert!(matches!(
            err,
            TarotError::OutOfPhase {
                phase: Phase::Drawing,
                ..
            }
        ));
        assert_eq!(s.question(), "Career?");
    }

    #[test]
    fn reading_before_draw_rejected() {
        let mut s = session();
        let err = s.begin_reading().unwrap_err();
        assert!(matches!(err, TarotError::NoHand));
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.notice(), Some(Notice::NoHand));
    }

    #[test]
    fn reading_before_reveal_rejected() {
        let mut s = session();
        s.submit("Career?").unwrap();
        let err = s.begin_reading().unwrap_err();
        assert!(matches!(err, TarotError::CardsNotRevealed));
        assert_eq!(s.phase(), Phase::Drawing);
    }

    #[test]
    fn begin_reading_opens_fogged_overlay() {
        let mut s = revealed_session();
        let ticket = s.begin_reading().unwrap();

        assert_eq!(s.phase(), Phase::AwaitingInterpretation);
        assert_eq!(s.overlay(), Some(Overlay::opened()));
        assert_eq!(ticket.generation(), 0);

        let user = ticket.payload().content(Role::User).unwrap();
        assert!(user.contains("Will I find love?"));
        for card in s.hand().unwrap().cards() {
            assert!(user.contains(&card.name));
        }
    }

    #[test]
    fn second_request_rejected_while_waiting() {
        let mut s = revealed_session();
        s.begin_reading().unwrap();
        let err = s.begin_reading().unwrap_err();
        assert!(matches!(err, TarotError::ReadingInProgress));
        assert_eq!(s.phase(), Phase::AwaitingInterpretation);
        assert_eq!(s.notice(), Some(Notice::ReadingInProgress));
    }

    #[test]
    fn display_timers_run_from_completion() {
        let mut s = revealed_session();
        let ticket = s.begin_reading().unwrap();
        // time spent waiting on the service does not count
        s.tick(ms(3000));
        assert!(s.complete_reading(ticket, "P1\n\nP2\n\nP3\n\nP4"));

        assert_eq!(s.phase(), Phase::Displaying);
        assert_eq!(s.overlay(), Some(Overlay::opened()));

        assert!(s.tick(ms(1499)).is_empty());
        assert_eq!(
            s.tick(ms(1)),
            vec![SessionEvent::TextShown, SessionEvent::FogFading]
        );
        let overlay = s.overlay().unwrap();
        assert!(overlay.text_visible);
        assert_eq!(overlay.fog, Fog::Fading);

        assert!(s.tick(ms(999)).is_empty());
        assert_eq!(s.tick(ms(1)), vec![SessionEvent::FogCleared]);
        assert_eq!(s.overlay().unwrap().fog, Fog::Cleared);
        assert!(s.next_timer_in().is_none());
    }

    #[test]
    fn one_big_tick_fires_everything_in_order() {
        let mut s = displaying_session("P1");
        assert_eq!(
            s.tick(ms(10_000)),
            vec![
                SessionEvent::TextShown,
                SessionEvent::FogFading,
                SessionEvent::FogCleared
            ]
        );
    }

    #[tokio::test]
    async fn end_to_end_reading() {
        let mut s = session();
        s.submit("Will I find love?").unwrap();
        s.tick(ms(500));

        s.get_reading(&Scripted("P1\n\nP2\n\nP3\n\nP4")).await.unwrap();

        assert_eq!(s.phase(), Phase::Displaying);
        assert_eq!(s.interpretation(), ["P1", "P2", "P3", "P4"]);
        assert_eq!(s.sections().unwrap().get(SectionLabel::Overall), "P4");
    }

    #[tokio::test]
    async fn short_reading_leaves_blanks() {
        let mut s = revealed_session();
        s.get_reading(&Scripted("Only the past speaks.")).await.unwrap();

        assert_eq!(s.phase(), Phase::Displaying);
        let sections = s.sections().unwrap();
        assert_eq!(sections.get(SectionLabel::Past), "Only the past speaks.");
        assert_eq!(sections.get(SectionLabel::Future), "");
    }

    #[tokio::test]
    async fn get_reading_without_hand_never_waits() {
        let mut s = session();
        let err = s.get_reading(&Scripted("ignored")).await.unwrap_err();
        assert!(matches!(err, TarotError::NoHand));
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn close_resets_from_every_phase() {
        let mut idle = session();
        idle.set_question("typed but not sent").unwrap();
        idle.close();
        assert_reset(&idle);

        let mut drawing = session();
        drawing.submit("Career?").unwrap();
        drawing.close();
        assert_reset(&drawing);

        let mut revealed = revealed_session();
        revealed.close();
        assert_reset(&revealed);

        let mut waiting = revealed_session();
        waiting.begin_reading().unwrap();
        waiting.close();
        assert_reset(&waiting);

        let mut displaying = displaying_session("P1\n\nP2");
        displaying.close();
        assert_reset(&displaying);
        assert_eq!(displaying.generation(), 1);
    }

    #[test]
    fn close_during_drawing_suppresses_reveal() {
        let mut s = session();
        s.submit("Career?").unwrap();
        s.close();
        assert!(s.tick(ms(500)).is_empty());
        assert_eq!(s.phase(), Phase::Idle);
        assert!(s.next_timer_in().is_none());
    }

    #[test]
    fn late_reply_after_close_is_dropped() {
        let mut s = revealed_session();
        let ticket = s.begin_reading().unwrap();
        s.close();

        assert!(!s.complete_reading(ticket, "P1\n\nP2"));
        assert_reset(&s);
    }

    #[test]
    fn late_reply_does_not_leak_into_next_session() {
        let mut s = revealed_session();
        let old = s.begin_reading().unwrap();
        s.close();

        s.submit("A new question").unwrap();
        s.tick(ms(500));
        s.begin_reading().unwrap();

        assert!(!s.complete_reading(old, "stale"));
        assert_eq!(s.phase(), Phase::AwaitingInterpretation);
    }

    #[test]
    fn stale_display_timers_do_not_touch_new_session() {
        let mut s = displaying_session("P1\n\nP2\n\nP3\n\nP4");
        s.close();
        s.submit("Another question").unwrap();

        let events = s.tick(ms(2500));
        assert_eq!(events, vec![SessionEvent::CardsRevealed]);
        assert_eq!(s.phase(), Phase::Revealed);
        assert!(s.overlay().is_none());
    }

    #[test]
    fn set_language_resamples_suggestions() {
        let mut s = session();
        let bank = QuestionBank::standard().unwrap();
        s.set_language(Language::Vi);
        assert_eq!(s.language(), Language::Vi);
        assert_eq!(s.suggestions().len(), 5);
        assert!(
            s.suggestions()
                .iter()
                .all(|q| bank.questions(Language::Vi).contains(q))
        );
    }

    #[test]
    fn choose_suggestion_fills_question() {
        let mut s = session();
        let expected = s.suggestions()[2].clone();
        assert_eq!(s.choose_suggestion(2).unwrap(), expected);
        assert_eq!(s.question(), expected);

        assert!(matches!(
            s.choose_suggestion(9),
            Err(TarotError::InvalidArgument(_))
        ));
    }

    #[test]
    fn choose_suggestion_huge_index_is_rejected() {
        let mut s = session();
        assert!(matches!(
            s.choose_suggestion(usize::MAX),
            Err(TarotError::InvalidArgument(_))
        ));
        assert_eq!(s.question(), "");
    }

    #[test]
    fn same_seed_same_hand() {
        let mut a = session();
        let mut b = session();
        a.submit("Career?").unwrap();
        b.submit("Career?").unwrap();
        assert_eq!(a.hand(), b.hand());
    }

    #[test]
    fn immediate_timing_reveals_on_next_tick() {
        let config = SessionConfig::default()
            .with_seed(1)
            .with_timing(TimingConfig::immediate());
        let mut s = SessionController::standard(config).unwrap();
        s.submit("Career?").unwrap();
        assert_eq!(s.next_timer_in(), Some(Duration::ZERO));
        assert_eq!(s.tick(Duration::ZERO), vec![SessionEvent::CardsRevealed]);
    }

    #[test]
    fn view_hides_text_until_shown() {
        let mut s = displaying_session("P1\n\nP2\n\nP3\n\nP4");
        let view = s.view();
        assert_eq!(view.phase, Phase::Displaying);
        assert_eq!(view.question, "Will I find love?");
        assert_eq!(view.interpretation.len(), 4);
        assert!(view.visible_interpretation().is_empty());
        assert!(!view.can_request_reading);

        s.tick(ms(1500));
        assert_eq!(s.view().visible_interpretation(), ["P1", "P2", "P3", "P4"]);
    }

    #[test]
    fn view_of_idle_session() {
        let s = session();
        let view = s.view();
        assert_eq!(view.phase, Phase::Idle);
        assert!(view.hand.is_none());
        assert!(view.overlay.is_none());
        assert_eq!(view.suggestions.len(), 5);
    }
}
