use super::domain::{Dimension, PersonalityType};
use serde::Serialize;

/// Display copy for one of the sixteen type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeDescription {
    pub code: &'static str,
    pub name: &'static str,
    pub blurb: &'static str,
}

impl TypeDescription {
    pub fn for_type(personality: &PersonalityType) -> TypeDescription {
        DESCRIPTIONS[table_index(personality)]
    }

    pub fn all() -> &'static [TypeDescription; 16] {
        &DESCRIPTIONS
    }
}

fn table_index(personality: &PersonalityType) -> usize {
    let mut index = 0;
    for (weight, dimension) in [8usize, 4, 2, 1].into_iter().zip(Dimension::ordered()) {
        if personality.letter(dimension) != dimension.first() {
            index += weight;
        }
    }
    index
}

const DESCRIPTIONS: [TypeDescription; 16] = [
    TypeDescription {
        code: "ESTJ",
        name: "Executive",
        blurb: "Organizers who run on facts, plans, and visible follow-through.",
    },
    TypeDescription {
        code: "ESTP",
        name: "Entrepreneur",
        blurb: "Energetic pragmatists who think on their feet and act in the moment.",
    },
    TypeDescription {
        code: "ESFJ",
        name: "Consul",
        blurb: "Attentive hosts who keep groups connected and cared for.",
    },
    TypeDescription {
        code: "ESFP",
        name: "Entertainer",
        blurb: "Spontaneous performers who bring warmth and fun wherever they go.",
    },
    TypeDescription {
        code: "ENTJ",
        name: "Commander",
        blurb: "Decisive strategists who mobilize people around ambitious goals.",
    },
    TypeDescription {
        code: "ENTP",
        name: "Debater",
        blurb: "Quick-witted challengers who test every idea from every angle.",
    },
    TypeDescription {
        code: "ENFJ",
        name: "Protagonist",
        blurb: "Charismatic mentors who rally others toward shared ideals.",
    },
    TypeDescription {
        code: "ENFP",
        name: "Campaigner",
        blurb: "Enthusiastic free spirits who find possibility in everyone they meet.",
    },
    TypeDescription {
        code: "ISTJ",
        name: "Logistician",
        blurb: "Reliable inspectors who honor commitments and keep systems running.",
    },
    TypeDescription {
        code: "ISTP",
        name: "Virtuoso",
        blurb: "Hands-on problem solvers who master tools through experimentation.",
    },
    TypeDescription {
        code: "ISFJ",
        name: "Defender",
        blurb: "Quiet protectors who remember the details that matter to people.",
    },
    TypeDescription {
        code: "ISFP",
        name: "Adventurer",
        blurb: "Gentle explorers guided by personal values and aesthetics.",
    },
    TypeDescription {
        code: "INTJ",
        name: "Architect",
        blurb: "Independent planners who see the long game and engineer toward it.",
    },
    TypeDescription {
        code: "INTP",
        name: "Logician",
        blurb: "Abstract analysts who chase precision in ideas above all else.",
    },
    TypeDescription {
        code: "INFJ",
        name: "Advocate",
        blurb: "Insightful idealists who work steadily toward a vision of better.",
    },
    TypeDescription {
        code: "INFP",
        name: "Mediator",
        blurb: "Reflective dreamers loyal to their values and the people they love.",
    },
];
