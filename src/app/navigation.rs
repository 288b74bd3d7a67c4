use super::*;
use crate::quiz::render;

impl CourseApp {
    /// Enlace del menú al quiz: siempre vuelve a dibujarlo desde cero,
    /// independientemente del quiz gate.
    pub fn open_quiz_section(&mut self) {
        self.quiz_form = Some(render(&self.questions));
        self.section = Section::Quiz;
        log::debug!("quiz renderizado con {} preguntas", self.questions.len());
    }

    pub fn open_section(&mut self, section: Section) {
        match section {
            Section::Quiz => self.open_quiz_section(),
            other => self.section = other,
        }
    }
}
