//! The card's state machine: which screen is up, how many times she has
//! said no, and whether she has said yes.
//!
//! Everything here is a pure value transition. The page component owns one
//! `CardState` and swaps it for the result of `advance`/`decline`/`accept`
//! on each click; rendering and animation live elsewhere.

/// The "No" button's label, cycled by how many times it has been pressed.
pub const DECLINE_MESSAGES: [&str; 5] = ["No", "leh?", "ma ana hebik", "please?", "dandounte?"];

/// Index of the final "Will you be my Valentine?" screen.
const FINAL_STEP: u8 = 3;

/// Each state maps to exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Greeting,
    Photo,
    Letter,
    Question,
    Celebration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardState {
    step: u8,
    declines: u32,
    accepted: bool,
}

impl CardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn declines(&self) -> u32 {
        self.declines
    }

    pub fn accepted(&self) -> bool {
        self.accepted
    }

    pub fn screen(&self) -> Screen {
        if self.accepted {
            Screen::Celebration
        } else {
            match self.step {
                0 => Screen::Greeting,
                1 => Screen::Photo,
                2 => Screen::Letter,
                _ => Screen::Question,
            }
        }
    }

    /// Move to the next screen. A no-op on the question screen and after
    /// acceptance; the card never goes backwards or skips ahead.
    pub fn advance(self) -> Self {
        if self.accepted || self.step >= FINAL_STEP {
            return self;
        }
        Self {
            step: self.step + 1,
            ..self
        }
    }

    /// Press the "No" button. Only counts while the question is showing.
    pub fn decline(self) -> Self {
        if self.accepted || self.step != FINAL_STEP {
            return self;
        }
        Self {
            declines: self.declines + 1,
            ..self
        }
    }

    /// Press "YES". Terminal: no later click changes anything.
    pub fn accept(self) -> Self {
        if self.accepted || self.step != FINAL_STEP {
            return self;
        }
        Self {
            accepted: true,
            ..self
        }
    }

    pub fn decline_label(&self) -> &'static str {
        DECLINE_MESSAGES[self.declines as usize % DECLINE_MESSAGES.len()]
    }

    /// The YES button grows a little with every rejection.
    pub fn accept_scale(&self) -> f64 {
        1.0 + self.declines as f64 * 0.15
    }

    /// The No button shrinks, but stays big enough to press.
    pub fn decline_scale(&self) -> f64 {
        (1.0 - self.declines as f64 * 0.15).max(0.6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_walks_the_screens_in_order() {
        let s = CardState::new();
        assert_eq!((s.step(), s.screen()), (0, Screen::Greeting));
        let s = s.advance();
        assert_eq!((s.step(), s.screen()), (1, Screen::Photo));
        let s = s.advance();
        assert_eq!((s.step(), s.screen()), (2, Screen::Letter));
        let s = s.advance();
        assert_eq!((s.step(), s.screen()), (3, Screen::Question));
    }

    #[test]
    fn advance_stops_at_the_question() {
        let mut s = CardState::new();
        for _ in 0..10 {
            s = s.advance();
        }
        assert_eq!(s.step(), 3);
        assert_eq!(s.declines(), 0);
        assert!(!s.accepted());
    }

    #[test]
    fn decline_only_counts_on_the_question_screen() {
        assert_eq!(CardState::new().decline().declines(), 0);
        assert_eq!(CardState::new().advance().decline().declines(), 0);

        let s = CardState::new().advance().advance().advance();
        assert_eq!(s.decline().declines(), 1);
    }

    #[test]
    fn accept_before_the_question_does_nothing() {
        let s = CardState::new().accept();
        assert!(!s.accepted());
        assert_eq!(s.screen(), Screen::Greeting);
    }

    #[test]
    fn decline_labels_cycle_through_all_five() {
        let mut s = CardState::new().advance().advance().advance();
        assert_eq!(s.decline_label(), "No");

        let mut seen = Vec::new();
        for _ in 0..7 {
            s = s.decline();
            seen.push(s.decline_label());
        }
        assert_eq!(
            seen,
            ["leh?", "ma ana hebik", "please?", "dandounte?", "No", "leh?", "ma ana hebik"]
        );
    }

    #[test]
    fn button_scales_follow_the_decline_count() {
        let mut s = CardState::new().advance().advance().advance();
        assert_eq!(s.accept_scale(), 1.0);
        assert_eq!(s.decline_scale(), 1.0);

        s = s.decline().decline();
        assert_eq!(s.accept_scale(), 1.3);
        assert_eq!(s.decline_scale(), 0.7);

        for _ in 0..10 {
            s = s.decline();
        }
        assert_eq!(s.accept_scale(), 1.0 + 12.0 * 0.15);
        // The floor keeps the button pressable no matter how stubborn she is.
        assert_eq!(s.decline_scale(), 0.6);
    }

    #[test]
    fn the_whole_card_runs_through() {
        let s = CardState::new().advance().advance().advance();
        assert_eq!((s.step(), s.declines(), s.accepted()), (3, 0, false));

        let s = s.decline().decline();
        assert_eq!((s.step(), s.declines(), s.accepted()), (3, 2, false));
        assert_eq!(s.decline_label(), "ma ana hebik");

        let s = s.accept();
        assert_eq!((s.step(), s.declines(), s.accepted()), (3, 2, true));
        assert_eq!(s.screen(), Screen::Celebration);
    }

    #[test]
    fn acceptance_is_terminal() {
        let s = CardState::new()
            .advance()
            .advance()
            .advance()
            .decline()
            .accept();

        let after = s.advance().decline().accept();
        assert_eq!(after, s);
        assert_eq!(after.screen(), Screen::Celebration);
    }
}
