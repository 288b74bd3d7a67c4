// src/data.rs

use crate::model::{OPTIONS_PER_QUESTION, Question};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("YAML inválido: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("el banco de preguntas está vacío")]
    EmptyBank,
    #[error("la pregunta {index} marca la opción {answer} como correcta (rango 0-3)")]
    AnswerOutOfRange { index: usize, answer: usize },
}

/// Parsea un banco de preguntas en YAML y comprueba que cada una
/// tenga exactamente una opción correcta válida.
pub fn parse_questions(yaml: &str) -> Result<Vec<Question>, DataError> {
    // `options` es un array fijo de 4: serde rechaza cualquier otra longitud
    let questions: Vec<Question> = serde_yaml::from_str(yaml)?;
    if questions.is_empty() {
        return Err(DataError::EmptyBank);
    }
    if let Some((index, q)) = questions
        .iter()
        .enumerate()
        .find(|(_, q)| q.answer >= OPTIONS_PER_QUESTION)
    {
        return Err(DataError::AnswerOutOfRange {
            index,
            answer: q.answer,
        });
    }
    log::debug!("banco de preguntas cargado: {} preguntas", questions.len());
    Ok(questions)
}

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_questions_embedded() -> Vec<Question> {
    let file_content = include_str!("data/quiz_questions.yaml");
    parse_questions(file_content).expect("No se pudo parsear el banco de preguntas YAML")
}
