// src/quiz.rs
//
// Motor del quiz: renderizado, recogida de respuestas, puntuación y resultado.

use crate::model::{AnswerSet, OPTIONS_PER_QUESTION, Outcome, Question, ScoreResult};

/// Grupo de opciones de una pregunta tal como se muestra
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionGroup {
    pub heading: String,
    pub options: [String; OPTIONS_PER_QUESTION],
    pub selected: Option<usize>,
}

/// El quiz renderizado: un grupo de selección única por pregunta
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuizForm {
    pub groups: Vec<QuestionGroup>,
}

/// Dibuja el quiz desde cero: nada preseleccionado.
pub fn render(questions: &[Question]) -> QuizForm {
    let groups = questions
        .iter()
        .enumerate()
        .map(|(i, q)| QuestionGroup {
            heading: format!("{}. {}", i + 1, q.prompt),
            options: q.options.clone(),
            selected: None,
        })
        .collect();
    QuizForm { groups }
}

impl QuizForm {
    /// Marca una opción; sustituye la selección previa del mismo grupo.
    pub fn select(&mut self, question: usize, option: usize) {
        if option >= OPTIONS_PER_QUESTION {
            return;
        }
        if let Some(group) = self.groups.get_mut(question) {
            group.selected = Some(option);
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

pub fn collect_answers(form: &QuizForm) -> AnswerSet {
    form.groups.iter().map(|g| g.selected).collect()
}

/// Aciertos por posición; una respuesta vacía nunca cuenta.
pub fn score(answers: &[Option<usize>], questions: &[Question]) -> ScoreResult {
    let correct = questions
        .iter()
        .enumerate()
        .filter(|(i, q)| answers.get(*i).copied().flatten() == Some(q.answer))
        .count();
    ScoreResult {
        correct,
        percentage: rounded_percentage(correct, questions.len()),
    }
}

/// round(100 * correct / total), redondeando .5 hacia arriba
fn rounded_percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * correct + total) / (2 * total)) as u32
}

pub fn report_outcome(result: &ScoreResult, pass_threshold: u32) -> Outcome {
    if result.percentage >= pass_threshold {
        Outcome::Pass
    } else {
        Outcome::Fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_questions_embedded;

    fn all_correct(questions: &[Question]) -> AnswerSet {
        questions.iter().map(|q| Some(q.answer)).collect()
    }

    #[test]
    fn render_numbers_prompts_and_selects_nothing() {
        let questions = read_questions_embedded();
        let form = render(&questions);
        assert_eq!(form.len(), 7);
        assert_eq!(form.groups[0].heading, "1. What does financial planning aim to achieve?");
        assert!(form.groups.iter().all(|g| g.selected.is_none()));
    }

    #[test]
    fn rerender_clears_previous_selections() {
        let questions = read_questions_embedded();
        let mut form = render(&questions);
        form.select(3, 2);
        form = render(&questions);
        assert_eq!(form, render(&questions));
        assert!(collect_answers(&form).iter().all(Option::is_none));
    }

    #[test]
    fn selection_is_exclusive_per_group() {
        let questions = read_questions_embedded();
        let mut form = render(&questions);
        form.select(0, 1);
        form.select(0, 3);
        form.select(1, 0);
        form.select(2, 9); // fuera de rango: se ignora
        form.select(42, 0);
        let answers = collect_answers(&form);
        assert_eq!(answers.len(), 7);
        assert_eq!(&answers[..3], &[Some(3), Some(0), None]);
    }

    #[test]
    fn unanswered_questions_score_as_incorrect() {
        let questions = read_questions_embedded();
        let result = score(&vec![None; 7], &questions);
        assert_eq!(result, ScoreResult { correct: 0, percentage: 0 });
        assert_eq!(report_outcome(&result, 70), Outcome::Fail);
    }

    #[test]
    fn percentage_is_rounded_for_every_count() {
        let questions = read_questions_embedded();
        let expected = [0, 14, 29, 43, 57, 71, 86, 100];
        for correct in 0..=7 {
            let mut answers = all_correct(&questions);
            for a in answers.iter_mut().skip(correct) {
                *a = None;
            }
            let result = score(&answers, &questions);
            assert_eq!(result.correct, correct);
            assert_eq!(result.percentage, expected[correct]);
        }
    }

    #[test]
    fn wrong_option_does_not_count() {
        let questions = read_questions_embedded();
        let mut answers = all_correct(&questions);
        answers[0] = Some((questions[0].answer + 1) % 4);
        assert_eq!(score(&answers, &questions).correct, 6);
    }

    #[test]
    fn seventy_percent_passes() {
        let exactly = ScoreResult { correct: 7, percentage: 70 };
        let below = ScoreResult { correct: 0, percentage: 69 };
        assert_eq!(report_outcome(&exactly, 70), Outcome::Pass);
        assert_eq!(report_outcome(&below, 70), Outcome::Fail);

        // 5/7 = 71% aprueba, 4/7 = 57% suspende
        let questions = read_questions_embedded();
        let mut answers = all_correct(&questions);
        answers[5] = None;
        answers[6] = None;
        assert_eq!(report_outcome(&score(&answers, &questions), 70), Outcome::Pass);
        answers[4] = None;
        assert_eq!(report_outcome(&score(&answers, &questions), 70), Outcome::Fail);
    }

    #[test]
    fn empty_quiz_scores_zero() {
        assert_eq!(score(&[], &[]).percentage, 0);
    }
}
