//! Question exchange
//!
//! Client-side record of one question/answer cycle against the relay.
//! Transient: a new submission replaces the previous exchange outright.

/// Lifecycle of a single question/answer cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeState {
    Idle,
    Pending,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone)]
pub struct QuestionExchange {
    question: String,
    answer: Option<String>,
    state: ExchangeState,
}

impl Default for QuestionExchange {
    fn default() -> Self {
        Self {
            question: String::new(),
            answer: None,
            state: ExchangeState::Idle,
        }
    }
}

impl QuestionExchange {
    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    pub fn state(&self) -> &ExchangeState {
        &self.state
    }

    /// Submit a question. Whitespace-only input is refused locally, before
    /// any request is made, and leaves the exchange untouched.
    pub fn submit(&mut self, question: impl Into<String>) -> bool {
        let question = question.into();
        if question.trim().is_empty() {
            return false;
        }
        self.question = question;
        self.answer = None;
        self.state = ExchangeState::Pending;
        true
    }

    /// Record the relayed answer.
    pub fn succeed(&mut self, answer: impl Into<String>) {
        self.answer = Some(answer.into());
        self.state = ExchangeState::Succeeded;
    }

    /// Record a relay failure; any partial answer is discarded.
    pub fn fail(&mut self) {
        self.answer = None;
        self.state = ExchangeState::Failed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_question_never_leaves_idle() {
        let mut exchange = QuestionExchange::default();
        assert!(!exchange.submit("   \n\t"));
        assert_eq!(*exchange.state(), ExchangeState::Idle);
    }

    #[test]
    fn full_cycle_reaches_succeeded() {
        let mut exchange = QuestionExchange::default();
        assert!(exchange.submit("What is consideration?"));
        assert_eq!(*exchange.state(), ExchangeState::Pending);
        assert_eq!(exchange.answer(), None);

        exchange.succeed("A bargained-for exchange.");
        assert_eq!(*exchange.state(), ExchangeState::Succeeded);
        assert_eq!(exchange.answer(), Some("A bargained-for exchange."));
    }

    #[test]
    fn failure_discards_any_answer() {
        let mut exchange = QuestionExchange::default();
        exchange.submit("What is consideration?");
        exchange.fail();
        assert_eq!(*exchange.state(), ExchangeState::Failed);
        assert_eq!(exchange.answer(), None);

        // Re-asking resets the cycle
        assert!(exchange.submit("Try again?"));
        assert_eq!(*exchange.state(), ExchangeState::Pending);
    }
}
