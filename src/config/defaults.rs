//! Korean reference tables.

use std::collections::{BTreeMap, HashMap};

use crate::hint::{DetailSuffixes, LevelTemplates};
use crate::scoring::{RelationTemplate, RelationType};
use crate::text::Template;

/// Built-in sources are checked by `test_default_templates_parse_strictly`.
fn template(source: &str) -> Template {
    Template::parse_lenient(source)
}

pub(super) fn affirmative_templates() -> Vec<Template> {
    [
        "{input}은 {answer}과 관련이 있다.",
        "{input}는 {answer}와 같은 맥락에서 언급된다.",
        "{input}는 {answer}의 상황에서 나타날 수 있다.",
        "{input}와 {answer}는 비슷한 의미를 가진다.",
    ]
    .into_iter()
    .map(template)
    .collect()
}

pub(super) fn contradiction_templates() -> Vec<Template> {
    [
        "{input}은 {answer}과 반대되는 의미다.",
        "{input}와 {answer}는 서로 상반된다.",
    ]
    .into_iter()
    .map(template)
    .collect()
}

pub(super) fn relationship_taxonomy() -> Vec<RelationTemplate> {
    [
        (RelationType::Situation, "{answer}는 {input} 상황에서 발생할 수 있다."),
        (RelationType::EmotionCause, "{input}는 {answer}의 원인이 될 수 있다."),
        (RelationType::Attribute, "{answer}는 {input}의 특성을 가지고 있다."),
        (RelationType::Place, "{answer}는 {input}에서 일어나는 일이다."),
        (RelationType::People, "{answer}는 {input} 사이에서 나타나는 것이다."),
        (RelationType::SimilarGenre, "{answer}는 {input}와 비슷한 종류다."),
        (RelationType::Opposite, "{answer}는 {input}과 반대되는 것이다."),
        (RelationType::PartWhole, "{answer}는 {input}의 일부분이다."),
        (RelationType::Time, "{answer}는 {input} 때 일어나는 것이다."),
        (RelationType::Result, "{answer}는 {input}의 결과로 생기는 것이다."),
    ]
    .into_iter()
    .map(|(relation, source)| RelationTemplate::new(relation, template(source)))
    .collect()
}

pub(super) fn contextual_hints() -> HashMap<RelationType, LevelTemplates> {
    [
        (
            RelationType::Situation,
            [
                "{input} 상황에서 나타나는 것이에요",
                "{input}와/과 관련된 상황에서 일어나는 일이에요",
                "{input} 맥락과 연결된 개념이에요",
            ],
        ),
        (
            RelationType::EmotionCause,
            [
                "{input}에서 비롯되는 감정이나 행동이에요",
                "{input} 때문에 생길 수 있는 것이에요",
                "{input}와/과 인과관계가 있어요",
            ],
        ),
        (
            RelationType::Attribute,
            [
                "{input}의 성질을 가진 것이에요",
                "{input}와/과 비슷한 특징이 있어요",
                "{input} 계열의 것이에요",
            ],
        ),
        (
            RelationType::Place,
            [
                "{input}에서 경험할 수 있는 것이에요",
                "{input}와/과 관련된 장소에서 일어나는 일이에요",
                "{input} 공간과 연결되어 있어요",
            ],
        ),
        (
            RelationType::People,
            [
                "{input} 사이에서 나타나는 것이에요",
                "{input} 관계에서 발생할 수 있는 일이에요",
                "{input}와/과 관련된 인간관계 개념이에요",
            ],
        ),
        (
            RelationType::SimilarGenre,
            [
                "{input}와/과 비슷한 방식으로 진행되는 것이에요",
                "{input}와/과 같은 종류에 속해요",
                "{input} 계열의 또 다른 것이에요",
            ],
        ),
        (
            RelationType::Opposite,
            [
                "{input}과는 반대되는 개념이에요",
                "{input}의 반대 방향에 있는 것이에요",
                "{input}와/과 대조적인 것이에요",
            ],
        ),
        (
            RelationType::PartWhole,
            [
                "{input}의 한 부분이에요",
                "{input}를/을 구성하는 요소예요",
                "{input}와/과 포함관계에 있어요",
            ],
        ),
        (
            RelationType::Time,
            [
                "{input} 시기에 일어나는 것이에요",
                "{input} 때 경험하는 것이에요",
                "{input}와/과 시간적으로 연결되어 있어요",
            ],
        ),
        (
            RelationType::Result,
            [
                "{input}의 결과로 나타나는 것이에요",
                "{input} 이후에 생기는 것이에요",
                "{input}에서 파생된 것이에요",
            ],
        ),
    ]
    .into_iter()
    .map(|(relation, [high, medium, low])| {
        (
            relation,
            LevelTemplates::new(template(high), template(medium), template(low)),
        )
    })
    .collect()
}

pub(super) fn hint_thresholds() -> BTreeMap<u32, String> {
    [
        (95, "거의 정답이에요! 더 정확한 표현이 있어요."),
        (80, "아주 가까워요! 조금만 더 생각해보세요."),
        (60, "비슷한 방향이에요. 더 구체적으로 표현해보세요."),
        (40, "관련이 있지만 정확하지 않아요."),
        (20, "방향이 조금 다른 것 같아요."),
        (0, "전혀 다른 방향이에요. 다시 생각해보세요."),
    ]
    .into_iter()
    .map(|(bound, message)| (bound, message.to_string()))
    .collect()
}

pub(super) fn detail_suffixes() -> DetailSuffixes {
    DetailSuffixes {
        semantic_high: "의미적으로 매우 가까워요".to_string(),
        relational_high: "맥락이나 상황은 정확해요".to_string(),
        formative_high: "철자가 거의 비슷해요".to_string(),
        contradiction: "하지만 반대 의미는 아니에요".to_string(),
    }
}
