use serde::{Deserialize, Serialize};

/// Número de opciones por pregunta
pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub chapter: u32,
    pub prompt: String,                             // Pregunta
    pub options: [String; OPTIONS_PER_QUESTION],    // Opciones en orden
    pub answer: usize,                              // Índice de la opción correcta
}

/// Una entrada por pregunta; `None` = sin responder
pub type AnswerSet = Vec<Option<usize>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub correct: usize,
    pub percentage: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
}

impl Outcome {
    /// Texto exacto del aviso modal
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Pass => "Congratulations! You passed the quiz.",
            Outcome::Fail => "Your score is too low. Please retake the course.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanInputs {
    pub principal: f64,
    pub term_years: f64,
    pub annual_rate_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsInputs {
    pub initial: f64,
    pub monthly_contribution: f64,
    pub annual_rate_percent: f64,
    pub years: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanSummary {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

/// Sección visible de la página
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Video,
    Infographic,
    Calculators,
    Quiz,
}

impl Default for Section {
    fn default() -> Self {
        Section::Video
    }
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Video,
        Section::Infographic,
        Section::Calculators,
        Section::Quiz,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Video => "🎬 Video",
            Section::Infographic => "📊 Infographic",
            Section::Calculators => "🧮 Calculators",
            Section::Quiz => "📝 Quiz",
        }
    }
}
