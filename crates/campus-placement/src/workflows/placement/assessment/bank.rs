use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a question in the soft-skills bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "question-{}", self.0)
    }
}

/// One of the four option letters of a multiple-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
}

impl OptionLetter {
    pub const ALL: [OptionLetter; 4] = [
        OptionLetter::A,
        OptionLetter::B,
        OptionLetter::C,
        OptionLetter::D,
    ];

    /// Case-insensitive match of a single submitted letter.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "a" | "A" => Some(OptionLetter::A),
            "b" | "B" => Some(OptionLetter::B),
            "c" | "C" => Some(OptionLetter::C),
            "d" | "D" => Some(OptionLetter::D),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            OptionLetter::A => "A",
            OptionLetter::B => "B",
            OptionLetter::C => "C",
            OptionLetter::D => "D",
        }
    }

    const fn index(self) -> usize {
        match self {
            OptionLetter::A => 0,
            OptionLetter::B => 1,
            OptionLetter::C => 2,
            OptionLetter::D => 3,
        }
    }
}

impl fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Multiple-choice item with exactly one correct option. Immutable once seeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentQuestion {
    pub id: QuestionId,
    pub prompt: String,
    pub options: [String; 4],
    pub correct: OptionLetter,
    pub explanation: Option<String>,
}

impl AssessmentQuestion {
    pub fn option(&self, letter: OptionLetter) -> &str {
        &self.options[letter.index()]
    }

    pub fn is_correct(&self, submitted: &str) -> bool {
        OptionLetter::parse(submitted) == Some(self.correct)
    }

    /// Question as shown to students, without the answer key.
    pub fn view(&self) -> QuestionView {
        QuestionView {
            id: self.id,
            prompt: self.prompt.clone(),
            options: OptionLetter::ALL
                .iter()
                .map(|letter| OptionView {
                    letter: *letter,
                    text: self.option(*letter).to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: QuestionId,
    pub prompt: String,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionView {
    pub letter: OptionLetter,
    pub text: String,
}

fn question(
    id: u32,
    prompt: &str,
    options: [&str; 4],
    correct: OptionLetter,
    explanation: &str,
) -> AssessmentQuestion {
    AssessmentQuestion {
        id: QuestionId(id),
        prompt: prompt.to_string(),
        options: options.map(str::to_string),
        correct,
        explanation: Some(explanation.to_string()),
    }
}

/// The five-question soft-skills bank seeded into empty stores.
pub fn standard_bank() -> Vec<AssessmentQuestion> {
    vec![
        question(
            1,
            "During a team meeting, a colleague strongly disagrees with your proposal. How do you respond?",
            [
                "Defend your idea aggressively and refuse to compromise",
                "Listen to their concerns, ask clarifying questions, and find common ground",
                "Ignore their input and proceed with your original plan",
                "Complain to your manager about the colleague",
            ],
            OptionLetter::B,
            "Effective communication and collaboration require active listening and seeking win-win solutions.",
        ),
        question(
            2,
            "You have a tight deadline, but a teammate asks for help with their urgent task. What do you do?",
            [
                "Refuse immediately, explaining you're too busy",
                "Assess both priorities, offer partial assistance or suggest alternatives",
                "Drop your work completely and help them",
                "Ignore their request",
            ],
            OptionLetter::B,
            "Balancing your commitments while being a supportive team member shows good prioritization skills.",
        ),
        question(
            3,
            "Your manager gives you negative feedback about your recent work. Your response?",
            [
                "Get defensive and make excuses",
                "Listen carefully, ask for specific examples, and create an action plan to improve",
                "Avoid the manager afterward",
                "Blame your teammates",
            ],
            OptionLetter::B,
            "Receiving feedback constructively and taking action demonstrates growth mindset and professionalism.",
        ),
        question(
            4,
            "You notice a critical error in a project just before the deadline. What's your approach?",
            [
                "Hide it and hope no one notices",
                "Immediately inform your team, assess impact, and propose solutions",
                "Blame someone else",
                "Wait until after the deadline to mention it",
            ],
            OptionLetter::B,
            "Taking ownership, communicating transparently, and problem-solving demonstrates integrity and accountability.",
        ),
        question(
            5,
            "Multiple stakeholders request conflicting changes to a project. How do you handle this?",
            [
                "Choose one stakeholder's request randomly",
                "Facilitate a discussion to understand priorities, constraints, and find alignment",
                "Implement all requests without discussing trade-offs",
                "Ignore all requests",
            ],
            OptionLetter::B,
            "Stakeholder management requires negotiation, clear communication, and finding balanced solutions.",
        ),
    ]
}
