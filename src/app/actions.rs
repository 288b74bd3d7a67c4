use super::*;
use crate::model::Outcome;
use crate::quiz::{collect_answers, report_outcome, score};

impl CourseApp {
    /// Botón "Enviar" del quiz. Devuelve `None` si el quiz aún no se ha
    /// renderizado (el botón no se muestra en ese caso).
    pub fn submit_quiz(&mut self) -> Option<Outcome> {
        let form = self.quiz_form.as_ref()?;
        let answers = collect_answers(form);
        let result = score(&answers, &self.questions);
        let outcome = report_outcome(&result, self.config.pass_threshold);

        log::info!(
            "quiz enviado: {}/{} ({}%) -> {:?}",
            result.correct,
            self.questions.len(),
            result.percentage,
            outcome
        );

        self.last_score = Some(result);
        self.alert = Some(outcome.message().to_string());

        if outcome == Outcome::Fail {
            // suspenso: el curso empieza otra vez
            self.video.set_current_time(0.0);
            self.video.play();
        }
        Some(outcome)
    }

    pub fn calculate_loan_clicked(&mut self) {
        self.loan_result = self.loan_form.submit();
    }

    pub fn calculate_savings_clicked(&mut self) {
        self.savings_result = self.savings_form.submit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::INVALID_INPUT_MESSAGE;

    fn answer_first(app: &mut CourseApp, n: usize) {
        let answers: Vec<usize> = app.questions.iter().map(|q| q.answer).collect();
        let form = app.quiz_form.as_mut().unwrap();
        for (i, a) in answers.into_iter().take(n).enumerate() {
            form.select(i, a);
        }
    }

    #[test]
    fn submit_without_rendered_quiz_does_nothing() {
        let mut app = CourseApp::new();
        assert_eq!(app.submit_quiz(), None);
        assert!(app.alert.is_none());
    }

    #[test]
    fn failing_rewinds_and_plays_video() {
        let mut app = CourseApp::new();
        app.video.set_current_time(120.0);
        app.open_quiz_section();
        answer_first(&mut app, 4);

        assert_eq!(app.submit_quiz(), Some(Outcome::Fail));
        assert_eq!(app.last_score.map(|s| s.percentage), Some(57));
        assert_eq!(
            app.alert.as_deref(),
            Some("Your score is too low. Please retake the course.")
        );
        assert_eq!(app.video.current_time(), 0.0);
        assert!(!app.video.is_paused());
    }

    #[test]
    fn passing_leaves_video_alone() {
        let mut app = CourseApp::new();
        app.video.set_current_time(120.0);
        app.open_quiz_section();
        answer_first(&mut app, 5);

        assert_eq!(app.submit_quiz(), Some(Outcome::Pass));
        assert_eq!(app.last_score.map(|s| s.percentage), Some(71));
        assert_eq!(app.alert.as_deref(), Some("Congratulations! You passed the quiz."));
        assert_eq!(app.video.current_time(), 120.0);
        assert!(app.video.is_paused());
    }

    #[test]
    fn calculators_write_their_result_areas() {
        let mut app = CourseApp::new();
        app.loan_form.amount = "200000".into();
        app.loan_form.term = "30".into();
        app.loan_form.rate = "6".into();
        app.calculate_loan_clicked();
        assert!(app.loan_result.contains("Monthly Payment: $1199.10"));

        app.savings_form.initial = "abc".into();
        app.calculate_savings_clicked();
        assert_eq!(app.savings_result, INVALID_INPUT_MESSAGE);
    }
}
