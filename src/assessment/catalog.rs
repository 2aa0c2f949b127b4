use super::domain::{Dimension, Keying, Question};
use std::fmt;

/// Ordered, immutable set of questionnaire items. Built once and handed to
/// the scoring engine; callers may supply their own catalog through
/// [`QuestionCatalog::new`], which is what the test suites do.
#[derive(Debug)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// The production questionnaire: 60 items, 15 per axis, mixed keying.
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        let mut seen = Vec::with_capacity(questions.len());
        for question in &questions {
            if seen.contains(&question.id) {
                return Err(CatalogError::DuplicateId(question.id));
            }
            seen.push(question.id);
        }

        for dimension in Dimension::ordered() {
            if !questions
                .iter()
                .any(|question| question.dimension == dimension)
            {
                return Err(CatalogError::EmptyDimension(dimension));
            }
        }

        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions_for_dimension(&self, dimension: Dimension) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.dimension == dimension)
            .collect()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum CatalogError {
    DuplicateId(u16),
    EmptyDimension(Dimension),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateId(id) => {
                write!(f, "question id {} appears more than once", id)
            }
            CatalogError::EmptyDimension(dimension) => {
                write!(f, "no questions cover the {} axis", dimension.label())
            }
        }
    }
}

impl std::error::Error for CatalogError {}

// Items cycle through the four axes so adjacent prompts never probe the same
// one. A `First`-keyed prompt phrases the axis's first letter (agreement
// pushes E/S/T/J); a `Second`-keyed prompt phrases the second.
const STANDARD_ITEMS: [(Dimension, Keying, &str); 60] = [
    (
        Dimension::EnergyOrientation,
        Keying::First,
        "Meeting new people energizes me.",
    ),
    (
        Dimension::InformationIntake,
        Keying::First,
        "I trust concrete facts over hunches.",
    ),
    (
        Dimension::DecisionStyle,
        Keying::First,
        "I decide with my head rather than my heart.",
    ),
    (
        Dimension::OuterStructure,
        Keying::First,
        "I make to-do lists and actually finish them.",
    ),
    (
        Dimension::EnergyOrientation,
        Keying::Second,
        "I need time alone to recharge after socializing.",
    ),
    (
        Dimension::InformationIntake,
        Keying::Second,
        "I enjoy imagining how things could be different.",
    ),
    (
        Dimension::DecisionStyle,
        Keying::Second,
        "I consider how a decision will make everyone feel.",
    ),
    (
        Dimension::OuterStructure,
        Keying::Second,
        "I keep my options open as long as possible.",
    ),
    (
        Dimension::EnergyOrientation,
        Keying::First,
        "I think out loud when working through a problem.",
    ),
    (
        Dimension::InformationIntake,
        Keying::First,
        "Step-by-step instructions suit me better than open-ended briefs.",
    ),
    (
        Dimension::DecisionStyle,
        Keying::First,
        "Honest criticism is more useful than tactful praise.",
    ),
    (
        Dimension::OuterStructure,
        Keying::First,
        "Deadlines help me work better.",
    ),
    (
        Dimension::EnergyOrientation,
        Keying::Second,
        "I prefer a few close friends to a wide circle.",
    ),
    (
        Dimension::InformationIntake,
        Keying::Second,
        "Patterns and connections jump out at me before details do.",
    ),
    (
        Dimension::DecisionStyle,
        Keying::Second,
        "Keeping harmony is worth a small compromise on accuracy.",
    ),
    (
        Dimension::OuterStructure,
        Keying::Second,
        "I work in bursts of energy rather than on a schedule.",
    ),
    (
        Dimension::EnergyOrientation,
        Keying::First,
        "I am usually the one who starts conversations.",
    ),
    (
        Dimension::InformationIntake,
        Keying::First,
        "I notice small physical details others overlook.",
    ),
    (
        Dimension::DecisionStyle,
        Keying::First,
        "I stay objective when friends disagree.",
    ),
    (
        Dimension::OuterStructure,
        Keying::First,
        "I like decisions settled rather than left open.",
    ),
    (
        Dimension::EnergyOrientation,
        Keying::Second,
        "I rehearse what I am going to say before speaking.",
    ),
    (
        Dimension::InformationIntake,
        Keying::Second,
        "I often daydream about future possibilities.",
    ),
    (
        Dimension::DecisionStyle,
        Keying::Second,
        "Other people's moods strongly affect mine.",
    ),
    (
        Dimension::OuterStructure,
        Keying::Second,
        "Improvising is more fun than following a plan.",
    ),
    (
        Dimension::EnergyOrientation,
        Keying::First,
        "Group work brings out my best ideas.",
    ),
    (
        Dimension::InformationIntake,
        Keying::First,
        "Practical results matter more to me than interesting theories.",
    ),
    (
        Dimension::DecisionStyle,
        Keying::First,
        "Being right matters more to me than being liked.",
    ),
    (
        Dimension::OuterStructure,
        Keying::First,
        "My workspace stays tidy and organized.",
    ),
    (
        Dimension::EnergyOrientation,
        Keying::Second,
        "Long stretches of quiet feel restful rather than boring.",
    ),
    (
        Dimension::InformationIntake,
        Keying::Second,
        "Metaphors come naturally when I explain things.",
    ),
    (
        Dimension::DecisionStyle,
        Keying::Second,
        "I praise first and correct later.",
    ),
    (
        Dimension::OuterStructure,
        Keying::Second,
        "I often start new projects before finishing old ones.",
    ),
    (
        Dimension::EnergyOrientation,
        Keying::First,
        "I would rather go out after work than head straight home.",
    ),
    (
        Dimension::InformationIntake,
        Keying::First,
        "I describe events exactly as they happened.",
    ),
    (
        Dimension::DecisionStyle,
        Keying::First,
        "I weigh costs and benefits before considering feelings.",
    ),
    (
        Dimension::OuterStructure,
        Keying::First,
        "I plan trips in detail before leaving.",
    ),
    (
        Dimension::EnergyOrientation,
        Keying::Second,
        "I let others take the lead in group introductions.",
    ),
    (
        Dimension::InformationIntake,
        Keying::Second,
        "Routine tasks bore me quickly.",
    ),
    (
        Dimension::DecisionStyle,
        Keying::Second,
        "A decision that hurts someone is hard for me to defend.",
    ),
    (
        Dimension::OuterStructure,
        Keying::Second,
        "Rules feel more like suggestions to me.",
    ),
    (
        Dimension::EnergyOrientation,
        Keying::First,
        "At parties I talk to many different people.",
    ),
    (
        Dimension::InformationIntake,
        Keying::First,
        "I prefer refining a proven method to inventing a new one.",
    ),
    (
        Dimension::DecisionStyle,
        Keying::First,
        "Debating ideas is fun even when it gets heated.",
    ),
    (
        Dimension::OuterStructure,
        Keying::First,
        "Unexpected changes to my schedule annoy me.",
    ),
    (
        Dimension::EnergyOrientation,
        Keying::Second,
        "I do my best thinking away from other people.",
    ),
    (
        Dimension::InformationIntake,
        Keying::Second,
        "I am drawn to novel ideas even when they are impractical.",
    ),
    (
        Dimension::DecisionStyle,
        Keying::Second,
        "I go out of my way to make others comfortable.",
    ),
    (
        Dimension::OuterStructure,
        Keying::Second,
        "Last-minute pressure brings out my best work.",
    ),
    (
        Dimension::EnergyOrientation,
        Keying::First,
        "I volunteer to present in front of groups.",
    ),
    (
        Dimension::InformationIntake,
        Keying::First,
        "When assembling something I follow the manual.",
    ),
    (
        Dimension::DecisionStyle,
        Keying::First,
        "Rules should apply equally regardless of circumstances.",
    ),
    (
        Dimension::OuterStructure,
        Keying::First,
        "I start assignments well before they are due.",
    ),
    (
        Dimension::EnergyOrientation,
        Keying::Second,
        "Crowded events leave me drained.",
    ),
    (
        Dimension::InformationIntake,
        Keying::Second,
        "I read between the lines of what people say.",
    ),
    (
        Dimension::DecisionStyle,
        Keying::Second,
        "Personal values outweigh impersonal logic in my choices.",
    ),
    (
        Dimension::OuterStructure,
        Keying::Second,
        "I decide things as they come instead of in advance.",
    ),
    (
        Dimension::EnergyOrientation,
        Keying::First,
        "Busy, lively places help me concentrate.",
    ),
    (
        Dimension::InformationIntake,
        Keying::First,
        "I judge an idea by whether it works today.",
    ),
    (
        Dimension::DecisionStyle,
        Keying::Second,
        "I find it hard to deliver bad news.",
    ),
    (
        Dimension::OuterStructure,
        Keying::First,
        "A clear routine makes my week run smoothly.",
    ),
];

fn standard_questions() -> Vec<Question> {
    STANDARD_ITEMS
        .iter()
        .enumerate()
        .map(|(index, (dimension, keying, text))| Question {
            id: (index + 1) as u16,
            dimension: *dimension,
            keying: *keying,
            text,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_is_balanced() {
        let catalog = QuestionCatalog::standard();
        assert_eq!(catalog.len(), 60);

        for dimension in Dimension::ordered() {
            let items = catalog.questions_for_dimension(dimension);
            assert_eq!(items.len(), 15, "{} axis unbalanced", dimension.label());
            assert!(items.iter().any(|item| item.keying == Keying::First));
            assert!(items.iter().any(|item| item.keying == Keying::Second));
        }
    }

    #[test]
    fn standard_catalog_ids_are_sequential() {
        let catalog = QuestionCatalog::standard();
        for (index, question) in catalog.questions().iter().enumerate() {
            assert_eq!(question.id as usize, index + 1);
        }
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let questions = vec![
            Question {
                id: 1,
                dimension: Dimension::EnergyOrientation,
                keying: Keying::First,
                text: "a",
            },
            Question {
                id: 1,
                dimension: Dimension::InformationIntake,
                keying: Keying::First,
                text: "b",
            },
        ];

        assert_eq!(
            QuestionCatalog::new(questions).unwrap_err(),
            CatalogError::DuplicateId(1)
        );
    }

    #[test]
    fn new_rejects_uncovered_axis() {
        let questions = vec![Question {
            id: 1,
            dimension: Dimension::EnergyOrientation,
            keying: Keying::First,
            text: "a",
        }];

        assert_eq!(
            QuestionCatalog::new(questions).unwrap_err(),
            CatalogError::EmptyDimension(Dimension::InformationIntake)
        );
    }
}
