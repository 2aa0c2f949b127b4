use super::catalog::QuestionCatalog;
use super::domain::{Dimension, Keying, PersonalityType, ScoringError, TraitLetter};
use serde::Serialize;

/// Stateless scorer folding an ordered answer sheet into a type profile.
///
/// Answers are raw Likert responses, one per catalog question in catalog
/// order: 1 strong agreement, 3 neutral, 5 strong disagreement. Scoring is a
/// pure function of the answers and the catalog; callers may share one engine
/// across threads freely.
pub struct ScoringEngine {
    catalog: QuestionCatalog,
}

impl ScoringEngine {
    pub fn new(catalog: QuestionCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn score(&self, answers: &[u8]) -> Result<TypeProfile, ScoringError> {
        if answers.len() != self.catalog.len() {
            return Err(ScoringError::InvalidInputLength {
                expected: self.catalog.len(),
                actual: answers.len(),
            });
        }

        if let Some((position, value)) = answers
            .iter()
            .enumerate()
            .find(|(_, value)| !(1..=5).contains(*value))
        {
            return Err(ScoringError::InvalidAnswerValue {
                position,
                value: *value,
            });
        }

        let mut first_totals = [0u16; 4];
        let mut second_totals = [0u16; 4];

        for (question, value) in self.catalog.questions().iter().zip(answers) {
            let delta = match question.keying {
                Keying::Second => i16::from(*value) - 3,
                Keying::First => 3 - i16::from(*value),
            };

            let axis = axis_index(question.dimension);
            if delta > 0 {
                first_totals[axis] += delta as u16;
            } else {
                second_totals[axis] += (-delta) as u16;
            }
        }

        let mut letters = [TraitLetter::E; 4];
        let mut tallies = Vec::with_capacity(4);
        for (axis, dimension) in Dimension::ordered().into_iter().enumerate() {
            // Ties go to the first letter of the pair, so an all-neutral
            // sheet resolves to ESTJ rather than an undetermined marker.
            let winner = if first_totals[axis] >= second_totals[axis] {
                dimension.first()
            } else {
                dimension.second()
            };

            letters[axis] = winner;
            tallies.push(DimensionTally {
                dimension,
                first: first_totals[axis],
                second: second_totals[axis],
                winner,
            });
        }

        Ok(TypeProfile {
            personality: PersonalityType::new(letters),
            tallies,
        })
    }
}

/// Accumulated agreement weight for one axis, kept in the output so callers
/// can show how decisive each letter was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionTally {
    pub dimension: Dimension,
    pub first: u16,
    pub second: u16,
    pub winner: TraitLetter,
}

/// Scoring output: the four-letter code plus the per-axis tallies behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeProfile {
    pub personality: PersonalityType,
    pub tallies: Vec<DimensionTally>,
}

impl TypeProfile {
    pub fn code(&self) -> String {
        self.personality.code()
    }
}

const fn axis_index(dimension: Dimension) -> usize {
    match dimension {
        Dimension::EnergyOrientation => 0,
        Dimension::InformationIntake => 1,
        Dimension::DecisionStyle => 2,
        Dimension::OuterStructure => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::Question;

    fn four_item_catalog() -> QuestionCatalog {
        let questions = vec![
            Question {
                id: 1,
                dimension: Dimension::EnergyOrientation,
                keying: Keying::Second,
                text: "ei",
            },
            Question {
                id: 2,
                dimension: Dimension::InformationIntake,
                keying: Keying::Second,
                text: "sn",
            },
            Question {
                id: 3,
                dimension: Dimension::DecisionStyle,
                keying: Keying::First,
                text: "tf",
            },
            Question {
                id: 4,
                dimension: Dimension::OuterStructure,
                keying: Keying::Second,
                text: "jp",
            },
        ];

        QuestionCatalog::new(questions).expect("catalog covers all axes")
    }

    #[test]
    fn worked_example_scores_istj() {
        let engine = ScoringEngine::new(four_item_catalog());
        let profile = engine.score(&[1, 5, 1, 3]).expect("valid sheet");

        assert_eq!(profile.code(), "ISTJ");
        assert_eq!(profile.tallies[0].second, 2);
        assert_eq!(profile.tallies[1].first, 2);
        assert_eq!(profile.tallies[2].first, 2);
        assert_eq!(profile.tallies[3], DimensionTally {
            dimension: Dimension::OuterStructure,
            first: 0,
            second: 0,
            winner: TraitLetter::J,
        });
    }

    #[test]
    fn neutral_sheet_defaults_to_estj() {
        let engine = ScoringEngine::new(QuestionCatalog::standard());
        let profile = engine.score(&[3; 60]).expect("valid sheet");

        assert_eq!(profile.code(), "ESTJ");
        for tally in &profile.tallies {
            assert_eq!(tally.first, 0);
            assert_eq!(tally.second, 0);
        }
    }

    #[test]
    fn rejects_short_sheet() {
        let engine = ScoringEngine::new(four_item_catalog());
        assert_eq!(
            engine.score(&[3, 3, 3]).unwrap_err(),
            ScoringError::InvalidInputLength {
                expected: 4,
                actual: 3,
            }
        );
    }

    #[test]
    fn rejects_out_of_range_value() {
        let engine = ScoringEngine::new(four_item_catalog());
        assert_eq!(
            engine.score(&[3, 0, 3, 3]).unwrap_err(),
            ScoringError::InvalidAnswerValue {
                position: 1,
                value: 0,
            }
        );
        assert_eq!(
            engine.score(&[3, 3, 3, 6]).unwrap_err(),
            ScoringError::InvalidAnswerValue {
                position: 3,
                value: 6,
            }
        );
    }
}
