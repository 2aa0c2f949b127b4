use super::catalog::QuestionCatalog;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum AnswerImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    UnknownQuestion(u16),
    DuplicateQuestion(u16),
    MissingQuestion(u16),
}

impl std::fmt::Display for AnswerImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerImportError::Io(err) => write!(f, "failed to read answer sheet: {}", err),
            AnswerImportError::Csv(err) => write!(f, "invalid answer sheet CSV: {}", err),
            AnswerImportError::UnknownQuestion(id) => {
                write!(f, "answer sheet references unknown question {}", id)
            }
            AnswerImportError::DuplicateQuestion(id) => {
                write!(f, "answer sheet answers question {} more than once", id)
            }
            AnswerImportError::MissingQuestion(id) => {
                write!(f, "answer sheet has no response for question {}", id)
            }
        }
    }
}

impl std::error::Error for AnswerImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnswerImportError::Io(err) => Some(err),
            AnswerImportError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AnswerImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for AnswerImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads a `question_id,answer` CSV into an answer vector aligned with the
/// catalog order. Rows may arrive in any order; every catalog question must
/// be answered exactly once. Likert range checks stay with the scoring
/// engine so import and scoring report violations consistently.
pub struct AnswerSheetImporter;

impl AnswerSheetImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        catalog: &QuestionCatalog,
    ) -> Result<Vec<u8>, AnswerImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, catalog)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        catalog: &QuestionCatalog,
    ) -> Result<Vec<u8>, AnswerImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut by_id: HashMap<u16, u8> = HashMap::with_capacity(catalog.len());
        for record in csv_reader.deserialize::<AnswerRow>() {
            let row = record?;
            if !catalog
                .questions()
                .iter()
                .any(|question| question.id == row.question_id)
            {
                return Err(AnswerImportError::UnknownQuestion(row.question_id));
            }
            if by_id.insert(row.question_id, row.answer).is_some() {
                return Err(AnswerImportError::DuplicateQuestion(row.question_id));
            }
        }

        catalog
            .questions()
            .iter()
            .map(|question| {
                by_id
                    .get(&question.id)
                    .copied()
                    .ok_or(AnswerImportError::MissingQuestion(question.id))
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    question_id: u16,
    answer: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reader_orders_rows_by_catalog_position() {
        let catalog = QuestionCatalog::standard();
        let mut csv = String::from("question_id,answer\n");
        for question in catalog.questions().iter().rev() {
            csv.push_str(&format!("{},3\n", question.id));
        }

        let answers = AnswerSheetImporter::from_reader(Cursor::new(csv), &catalog)
            .expect("sheet imports");
        assert_eq!(answers.len(), catalog.len());
        assert!(answers.iter().all(|value| *value == 3));
    }

    #[test]
    fn reader_rejects_unknown_question() {
        let catalog = QuestionCatalog::standard();
        let csv = "question_id,answer\n999,3\n";

        match AnswerSheetImporter::from_reader(Cursor::new(csv), &catalog) {
            Err(AnswerImportError::UnknownQuestion(999)) => {}
            other => panic!("expected unknown question error, got {other:?}"),
        }
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let catalog = QuestionCatalog::standard();
        match AnswerSheetImporter::from_path("./does-not-exist.csv", &catalog) {
            Err(AnswerImportError::Io(_)) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
