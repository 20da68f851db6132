//! Assessment session lifecycle.
//!
//! Drives a single run of the questionnaire:
//! `Welcome -> ContactCollected -> Answering(0..9) -> Scored -> ReportDispatched`.
//! Recording the tenth answer triggers scoring and classification. Report
//! dispatch is fire-and-forget from the session's perspective: a dispatch
//! failure leaves the session in `Scored`, which is acceptable as a final
//! state, and never hides the result from the user.

use crate::domain::foundation::{AssessmentId, DomainError, StateMachine, Timestamp, ValidationError};

use super::questionnaire::QUESTION_COUNT;
use super::report::ContactInfo;
use super::scoring::{score, AnswerSet};
use super::severity::{classify, SeverityAssessment};

/// Lifecycle states of an assessment session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Welcome,
    ContactCollected,
    /// Currently answering the question at this 0-based index.
    Answering(usize),
    Scored,
    ReportDispatched,
}

impl StateMachine for SessionState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionState::*;
        match (self, target) {
            (Welcome, ContactCollected) => true,
            (ContactCollected, Answering(0)) => true,
            (Answering(i), Answering(j)) => *j == i + 1 && *j < QUESTION_COUNT,
            (Answering(i), Scored) => *i == QUESTION_COUNT - 1,
            (Scored, ReportDispatched) => true,
            _ => false,
        }
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionState::*;
        match self {
            Welcome => vec![ContactCollected],
            ContactCollected => vec![Answering(0)],
            Answering(i) if *i < QUESTION_COUNT - 1 => vec![Answering(i + 1)],
            Answering(_) => vec![Scored],
            Scored => vec![ReportDispatched],
            ReportDispatched => vec![],
        }
    }
}

/// The outcome available once a session reaches `Scored`.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    pub total_score: u8,
    pub assessment: SeverityAssessment,
}

/// A single assessment run: contact details, answers, and derived outcome.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    id: AssessmentId,
    state: SessionState,
    contact: Option<ContactInfo>,
    answers: AnswerSet,
    outcome: Option<SessionOutcome>,
    started_at: Timestamp,
}

impl AssessmentSession {
    /// Starts a new session at the welcome screen.
    pub fn new() -> Self {
        Self {
            id: AssessmentId::new(),
            state: SessionState::Welcome,
            contact: None,
            answers: AnswerSet::new(),
            outcome: None,
            started_at: Timestamp::now(),
        }
    }

    pub fn id(&self) -> AssessmentId {
        self.id
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn contact(&self) -> Option<&ContactInfo> {
        self.contact.as_ref()
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn outcome(&self) -> Option<&SessionOutcome> {
        self.outcome.as_ref()
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    /// Records contact details, moving `Welcome -> ContactCollected`.
    pub fn collect_contact(&mut self, contact: ContactInfo) -> Result<(), DomainError> {
        self.state = self
            .state
            .transition_to(SessionState::ContactCollected)
            .map_err(domain_err)?;
        self.contact = Some(contact);
        Ok(())
    }

    /// Begins the questionnaire, moving `ContactCollected -> Answering(0)`.
    pub fn begin_questions(&mut self) -> Result<(), DomainError> {
        self.state = self
            .state
            .transition_to(SessionState::Answering(0))
            .map_err(domain_err)?;
        Ok(())
    }

    /// Records the answer for the current question and advances.
    ///
    /// The tenth answer moves the session to `Scored`, computing the total
    /// score and its severity classification.
    pub fn record_answer(&mut self, question_id: u8, option_index: u8) -> Result<(), DomainError> {
        let index = match self.state {
            SessionState::Answering(i) => i,
            _ => {
                return Err(DomainError::invalid_input(format!(
                    "Cannot record an answer in state {:?}",
                    self.state
                )))
            }
        };

        if question_id as usize != index + 1 {
            return Err(DomainError::invalid_input(format!(
                "Expected an answer for question {}, got question {question_id}",
                index + 1
            )));
        }

        self.answers.record(question_id, option_index);

        if index + 1 < QUESTION_COUNT {
            self.state = self
                .state
                .transition_to(SessionState::Answering(index + 1))
                .map_err(domain_err)?;
        } else {
            let total_score = score(&self.answers)?;
            let assessment = classify(total_score)?;
            self.outcome = Some(SessionOutcome {
                total_score,
                assessment,
            });
            self.state = self
                .state
                .transition_to(SessionState::Scored)
                .map_err(domain_err)?;
        }
        Ok(())
    }

    /// Marks the guardian report as dispatched.
    ///
    /// Only called after the email collaborator reports success; a failed
    /// dispatch leaves the session in `Scored`.
    pub fn mark_report_dispatched(&mut self) -> Result<(), DomainError> {
        self.state = self
            .state
            .transition_to(SessionState::ReportDispatched)
            .map_err(domain_err)?;
        Ok(())
    }
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

fn domain_err(err: ValidationError) -> DomainError {
    err.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::severity::Severity;

    fn contact() -> ContactInfo {
        ContactInfo {
            user_name: "Jamie".to_string(),
            user_email: "jamie@example.com".to_string(),
            parent_name: "Alex".to_string(),
            parent_email: "alex@example.com".to_string(),
            parent_phone: "555-0100".to_string(),
        }
    }

    fn session_at_questions() -> AssessmentSession {
        let mut session = AssessmentSession::new();
        session.collect_contact(contact()).unwrap();
        session.begin_questions().unwrap();
        session
    }

    #[test]
    fn full_flow_reaches_scored_after_ten_answers() {
        let mut session = session_at_questions();
        for q in 1..=10 {
            assert_eq!(*session.state(), SessionState::Answering(q as usize - 1));
            session.record_answer(q, 0).unwrap();
        }
        assert_eq!(*session.state(), SessionState::Scored);

        let outcome = session.outcome().unwrap();
        assert_eq!(outcome.total_score, 0);
        assert_eq!(outcome.assessment.level, Severity::Minimal);
    }

    #[test]
    fn all_three_answers_classify_severe() {
        let mut session = session_at_questions();
        for q in 1..=10 {
            session.record_answer(q, 3).unwrap();
        }
        let outcome = session.outcome().unwrap();
        assert_eq!(outcome.total_score, 30);
        assert_eq!(outcome.assessment.level, Severity::Severe);
    }

    #[test]
    fn answers_cannot_be_recorded_before_contact() {
        let mut session = AssessmentSession::new();
        assert!(session.record_answer(1, 0).is_err());
    }

    #[test]
    fn out_of_order_answer_is_rejected() {
        let mut session = session_at_questions();
        session.record_answer(1, 2).unwrap();
        let err = session.record_answer(3, 2).unwrap_err();
        assert!(err.message().contains("Expected an answer for question 2"));
    }

    #[test]
    fn dispatch_only_after_scoring() {
        let mut session = session_at_questions();
        assert!(session.mark_report_dispatched().is_err());

        for q in 1..=10 {
            session.record_answer(q, 1).unwrap();
        }
        session.mark_report_dispatched().unwrap();
        assert_eq!(*session.state(), SessionState::ReportDispatched);
        assert!(session.state().is_terminal());
    }

    #[test]
    fn scored_session_keeps_outcome_when_dispatch_is_skipped() {
        let mut session = session_at_questions();
        for q in 1..=10 {
            session.record_answer(q, 2).unwrap();
        }
        // No dispatch: the outcome is still available to show the user.
        assert_eq!(*session.state(), SessionState::Scored);
        assert_eq!(session.outcome().unwrap().total_score, 20);
    }

    #[test]
    fn contact_cannot_be_collected_twice() {
        let mut session = AssessmentSession::new();
        session.collect_contact(contact()).unwrap();
        assert!(session.collect_contact(contact()).is_err());
    }
}
