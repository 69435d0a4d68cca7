//! Program readiness quiz.
//!
//! A short fixed questionnaire. Each option carries a weight; the weighted
//! total picks a readiness tier and the tier picks the programs to suggest.

use crate::core::analytics::{AnalyticsEvent, AnalyticsSink, QUIZ_ANSWER, QUIZ_COMPLETE};
use crate::{debug, info};
use serde::Serialize;
use serde_json::json;
use std::fmt;
use thiserror::Error;

/// One selectable answer
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnswerOption {
    /// Text shown to the learner
    pub label: &'static str,
    /// Points this answer contributes
    pub weight: u32,
}

/// One quiz question
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    /// Stable identifier used in analytics
    pub id: &'static str,
    /// Question text
    pub prompt: &'static str,
    /// Answers, in display order
    pub options: &'static [AnswerOption],
}

impl Question {
    /// Highest weight any answer can contribute
    #[must_use]
    pub fn max_weight(&self) -> u32 {
        self.options.iter().map(|o| o.weight).max().unwrap_or(0)
    }
}

const fn option(label: &'static str, weight: u32) -> AnswerOption {
    AnswerOption { label, weight }
}

const QUESTION_COUNT: usize = 5;

/// The question set, in order
pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        id: "experience",
        prompt: "How many years of professional experience do you have?",
        options: &[
            option("Less than 2 years", 0),
            option("2 to 5 years", 1),
            option("5 to 10 years", 2),
            option("More than 10 years", 3),
        ],
    },
    Question {
        id: "technical-background",
        prompt: "How comfortable are you with programming or data analysis?",
        options: &[
            option("I have not tried it yet", 0),
            option("I have dabbled", 1),
            option("I use it at work sometimes", 2),
            option("It is a core part of my job", 3),
        ],
    },
    Question {
        id: "goal",
        prompt: "What are you hoping to get out of a program?",
        options: &[
            option("Explore a new field", 0),
            option("Add a specific skill", 1),
            option("Move into a new role", 2),
            option("Earn a full graduate degree", 3),
        ],
    },
    Question {
        id: "time",
        prompt: "How many hours a week can you set aside for coursework?",
        options: &[
            option("Fewer than 5", 0),
            option("5 to 10", 1),
            option("10 to 15", 2),
            option("More than 15", 3),
        ],
    },
    Question {
        id: "employer-support",
        prompt: "Will your employer support your studies?",
        options: &[
            option("No", 0),
            option("Not sure yet", 1),
            option("Yes, with time or flexibility", 2),
            option("Yes, with tuition reimbursement", 3),
        ],
    },
];

/// Readiness tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadinessTier {
    /// Start with a short certificate
    Exploring,
    /// Ready for a stackable certificate path
    Building,
    /// Ready for a full degree
    Ready,
}

impl ReadinessTier {
    /// Tier for a score fraction in `[0, 1]`
    #[must_use]
    pub fn from_fraction(fraction: f64) -> Self {
        if fraction >= 0.75 {
            Self::Ready
        } else if fraction >= 0.4 {
            Self::Building
        } else {
            Self::Exploring
        }
    }

    /// Program codes suggested for the tier
    #[must_use]
    pub const fn recommended_programs(self) -> &'static [&'static str] {
        match self {
            Self::Exploring => &["cert-eai", "cert-dsa"],
            Self::Building => &["cert-cyber", "cert-tl", "msbia"],
            Self::Ready => &["mscs", "msds", "mba"],
        }
    }
}

impl fmt::Display for ReadinessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exploring => write!(f, "Exploring"),
            Self::Building => write!(f, "Building"),
            Self::Ready => write!(f, "Ready"),
        }
    }
}

/// Scored quiz
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadinessResult {
    /// Weighted total
    pub score: u32,
    /// Highest possible total
    pub max_score: u32,
    /// Tier picked from `score / max_score`
    pub tier: ReadinessTier,
    /// Suggested program codes
    pub recommended: Vec<String>,
}

/// Invalid answers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// No such question
    #[error("question {0} does not exist")]
    UnknownQuestion(usize),
    /// No such answer for the question
    #[error("question {question} has no answer {answer}")]
    UnknownAnswer {
        /// Question index
        question: usize,
        /// Answer index
        answer: usize,
    },
    /// Wrong number of answers for a one-shot score
    #[error("expected {expected} answers, got {got}")]
    AnswerCount {
        /// Number of questions
        expected: usize,
        /// Number supplied
        got: usize,
    },
}

/// Score a complete set of answers (one option index per question)
///
/// # Errors
///
/// Returns [`QuizError`] when the count is wrong or an index is out of range.
pub fn score_answers(answers: &[usize]) -> Result<ReadinessResult, QuizError> {
    if answers.len() != QUESTIONS.len() {
        return Err(QuizError::AnswerCount {
            expected: QUESTIONS.len(),
            got: answers.len(),
        });
    }
    let mut score = 0;
    for (question, &answer) in answers.iter().enumerate() {
        score += weight_of(question, answer)?;
    }
    let max_score: u32 = QUESTIONS.iter().map(Question::max_weight).sum();
    let tier = ReadinessTier::from_fraction(f64::from(score) / f64::from(max_score.max(1)));

    Ok(ReadinessResult {
        score,
        max_score,
        tier,
        recommended: tier
            .recommended_programs()
            .iter()
            .map(ToString::to_string)
            .collect(),
    })
}

fn weight_of(question: usize, answer: usize) -> Result<u32, QuizError> {
    let q = QUESTIONS
        .get(question)
        .ok_or(QuizError::UnknownQuestion(question))?;
    q.options
        .get(answer)
        .map(|o| o.weight)
        .ok_or(QuizError::UnknownAnswer { question, answer })
}

/// Interactive quiz state
pub struct ReadinessQuiz<'a> {
    answers: [Option<usize>; QUESTION_COUNT],
    analytics: &'a dyn AnalyticsSink,
    completed: bool,
}

impl<'a> ReadinessQuiz<'a> {
    /// Start with nothing answered
    #[must_use]
    pub const fn new(analytics: &'a dyn AnalyticsSink) -> Self {
        Self {
            answers: [None; QUESTION_COUNT],
            analytics,
            completed: false,
        }
    }

    /// Record (or change) an answer
    ///
    /// # Errors
    ///
    /// Returns [`QuizError`] for an out-of-range question or answer.
    pub fn answer(&mut self, question: usize, answer: usize) -> Result<(), QuizError> {
        weight_of(question, answer)?;
        self.answers[question] = Some(answer);
        self.analytics.track(AnalyticsEvent::new(
            QUIZ_ANSWER,
            json!({ "question": QUESTIONS[question].id, "answer": answer }),
        ));
        debug!("Answered question {question} with option {answer}");
        Ok(())
    }

    /// Index of the first unanswered question
    #[must_use]
    pub fn current_question(&self) -> Option<usize> {
        self.answers.iter().position(Option::is_none)
    }

    /// Whether every question has an answer
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current_question().is_none()
    }

    /// Score the quiz once complete. Completion is tracked the first time
    /// only.
    pub fn result(&mut self) -> Option<ReadinessResult> {
        let answers: Vec<usize> = self.answers.iter().copied().collect::<Option<_>>()?;
        let result = score_answers(&answers).ok()?;
        if !self.completed {
            self.completed = true;
            self.analytics
                .track(AnalyticsEvent::new(QUIZ_COMPLETE, &result));
            info!("Readiness quiz complete: {} ({}/{})", result.tier, result.score, result.max_score);
        }
        Some(result)
    }
}
