use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four binary axes composing an MBTI type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    EnergyOrientation,
    InformationIntake,
    DecisionStyle,
    OuterStructure,
}

impl Dimension {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::EnergyOrientation,
            Self::InformationIntake,
            Self::DecisionStyle,
            Self::OuterStructure,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EnergyOrientation => "Extraversion / Introversion",
            Self::InformationIntake => "Sensing / Intuition",
            Self::DecisionStyle => "Thinking / Feeling",
            Self::OuterStructure => "Judging / Perceiving",
        }
    }

    /// Letter that wins ties and heads the axis's pair.
    pub const fn first(self) -> TraitLetter {
        match self {
            Self::EnergyOrientation => TraitLetter::E,
            Self::InformationIntake => TraitLetter::S,
            Self::DecisionStyle => TraitLetter::T,
            Self::OuterStructure => TraitLetter::J,
        }
    }

    pub const fn second(self) -> TraitLetter {
        match self {
            Self::EnergyOrientation => TraitLetter::I,
            Self::InformationIntake => TraitLetter::N,
            Self::DecisionStyle => TraitLetter::F,
            Self::OuterStructure => TraitLetter::P,
        }
    }
}

/// Single letter of the eight-letter MBTI alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraitLetter {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl TraitLetter {
    pub const fn glyph(self) -> char {
        match self {
            Self::E => 'E',
            Self::I => 'I',
            Self::S => 'S',
            Self::N => 'N',
            Self::T => 'T',
            Self::F => 'F',
            Self::J => 'J',
            Self::P => 'P',
        }
    }
}

impl fmt::Display for TraitLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Which letter of the axis an agreeing response counts toward.
///
/// Responses run 1 (strong agreement) to 5 (strong disagreement), with 3
/// neutral. A prompt keyed `First` phrases the axis's first letter, so
/// agreement pushes the first-letter tally; a `Second`-keyed prompt works the
/// other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Keying {
    First,
    Second,
}

/// Static questionnaire item. The prompt text is presentation-only; scoring
/// reads the dimension and keying.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: u16,
    pub dimension: Dimension,
    pub keying: Keying,
    pub text: &'static str,
}

/// A complete four-letter type code, one letter per axis in fixed
/// `EI, SN, TF, JP` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonalityType {
    letters: [TraitLetter; 4],
}

impl PersonalityType {
    pub(crate) fn new(letters: [TraitLetter; 4]) -> Self {
        Self { letters }
    }

    pub fn letters(&self) -> [TraitLetter; 4] {
        self.letters
    }

    pub fn letter(&self, dimension: Dimension) -> TraitLetter {
        let index = Dimension::ordered()
            .iter()
            .position(|axis| *axis == dimension)
            .unwrap_or(0);
        self.letters[index]
    }

    pub fn code(&self) -> String {
        self.letters.iter().map(|letter| letter.glyph()).collect()
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{}", letter.glyph())?;
        }
        Ok(())
    }
}

impl Serialize for PersonalityType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ScoringError {
    InvalidInputLength { expected: usize, actual: usize },
    InvalidAnswerValue { position: usize, value: u8 },
}

impl fmt::Display for ScoringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringError::InvalidInputLength { expected, actual } => write!(
                f,
                "answer sheet has {} responses but the catalog has {} questions",
                actual, expected
            ),
            ScoringError::InvalidAnswerValue { position, value } => write!(
                f,
                "response {} at position {} is outside the Likert range 1..=5",
                value, position
            ),
        }
    }
}

impl std::error::Error for ScoringError {}
