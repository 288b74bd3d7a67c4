use crate::chart::PieChartSpec;
use crate::config::{CourseConfig, read_config_embedded};
use crate::data::read_questions_embedded;
use crate::finance::{LoanForm, SavingsForm};
use crate::gate::PlaybackGate;
use crate::media::{MediaSurface, SimulatedVideo};
use crate::model::{Question, ScoreResult, Section};
use crate::quiz::QuizForm;

// Submódulos
pub mod actions;
pub mod alerts;
pub mod navigation;
pub mod playback;

pub struct CourseApp {
    pub config: CourseConfig,
    pub questions: Vec<Question>,
    pub section: Section,
    pub quiz_form: Option<QuizForm>,    // None hasta que se navega al quiz
    pub last_score: Option<ScoreResult>,
    pub gate: PlaybackGate,
    pub video: Box<dyn MediaSurface>,
    pub prompt_message: Option<String>, // banner del quiz gate
    pub loan_form: LoanForm,
    pub loan_result: String,
    pub savings_form: SavingsForm,
    pub savings_result: String,
    pub alert: Option<String>,          // aviso modal pendiente
    pub chart: PieChartSpec,
    pub chart_started_at: Option<f64>,
}

impl CourseApp {
    pub fn new() -> Self {
        let config = read_config_embedded();
        let video = Box::new(SimulatedVideo::new(config.video_length_secs));
        Self::with_parts(config, read_questions_embedded(), video)
    }

    /// Construye la app con un banco de preguntas y un reproductor concretos
    pub fn with_parts(
        config: CourseConfig,
        questions: Vec<Question>,
        video: Box<dyn MediaSurface>,
    ) -> Self {
        Self {
            gate: PlaybackGate::from_config(&config),
            config,
            questions,
            section: Section::default(),
            quiz_form: None,
            last_score: None,
            video,
            prompt_message: None,
            loan_form: LoanForm::default(),
            loan_result: String::new(),
            savings_form: SavingsForm::default(),
            savings_result: String::new(),
            alert: None,
            chart: PieChartSpec::financial_distribution(),
            chart_started_at: None,
        }
    }
}

impl Default for CourseApp {
    fn default() -> Self {
        Self::new()
    }
}
