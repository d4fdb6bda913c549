use serde::Serialize;

/// Number of questions every submission must answer.
pub const QUESTION_COUNT: usize = 9;

/// One selectable answer and the weight it contributes to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOption {
    pub label: &'static str,
    pub weight: u8,
}

/// Fixed question with its ordered answer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [AnswerOption],
}

impl Question {
    /// Position of the option whose label equals `answer` exactly.
    pub fn position_of(&self, answer: &str) -> Option<usize> {
        self.options.iter().position(|option| option.label == answer)
    }

    pub fn max_weight(&self) -> u8 {
        self.options
            .iter()
            .map(|option| option.weight)
            .max()
            .unwrap_or(0)
    }
}

const fn option(label: &'static str, weight: u8) -> AnswerOption {
    AnswerOption { label, weight }
}

static QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        prompt: "Você sente que tem algo errado nas suas pernas, mas não sabe o que?",
        options: &[
            option("Sim, pernas grandes, parecem troncos, gordura no tornozelo.", 3),
            option("Sim, pernas maiores comparadas ao corpo.", 2),
            option("Sim, pernas grandes e proporcionais.", 1),
            option("Não, minhas pernas estão bem.", 0),
        ],
    },
    Question {
        prompt: "A parte de baixo do corpo é maior e desproporcional ao tronco?",
        options: &[
            option("Sim, tamanho da calça é 3x maior que camisa.", 2),
            option("Sim, calça 1 a 2x maior que camisa.", 1),
            option("Não, tronco maior que a parte de baixo.", 0),
            option("Não, ambos proporcionais.", 0),
        ],
    },
    Question {
        prompt: "Você tem problema para perder peso, principalmente na parte de baixo do corpo?",
        options: &[
            option(
                "Sim, não consigo perder peso, principalmente nas coxas/pernas/quadril/braços.",
                2,
            ),
            option("Sim, perco peso no tronco, excluindo braços.", 1),
            option("Não, perco peso proporcionalmente.", 0),
            option("Não tenho problema de peso ou dificuldade para perder.", 0),
        ],
    },
    Question {
        prompt: "Durante a puberdade, você ganhou peso principalmente nas coxas/pernas/quadris/nádegas/braços?",
        options: &[
            option(
                "Sim, ganhei muito peso, principalmente nas coxas/pernas/quadris/braços.",
                2,
            ),
            option("Sim, ganhei algum peso nas coxas/pernas/quadris.", 1),
            option("Não, ganhei pouco peso, distribuído no corpo inteiro.", 0),
            option("Não, ganhei pouco ou nenhum peso.", 0),
        ],
    },
    Question {
        prompt: "Durante ou logo após a gravidez/amamentação, você ganhou peso ou teve mudança nas coxas/pernas/quadris/nádegas/braços?",
        options: &[
            option("Sim, ganhei muito peso (mais de 23kg) nessas áreas.", 2),
            option("Sim, ganhei entre 16-23kg nessas áreas.", 1),
            option("Não, ganho de peso normal (11-15kg).", 0),
            option("Não, ganhei menos peso do que o esperado ou perdi peso.", 0),
        ],
    },
    Question {
        prompt: "Durante a menopausa, você ganhou peso ou teve mudança nas coxas/pernas/quadris/nádegas/braços?",
        options: &[
            option("Sim, ganhei bastante peso, especialmente nessas áreas.", 2),
            option("Sim, ganhei peso e essas áreas cresceram um pouco.", 1),
            option("Não muito, ganhei pouco peso, distribuído no corpo.", 0),
            option("Não, não ganhei peso.", 0),
        ],
    },
    Question {
        prompt: "Suas pernas doem?",
        options: &[
            option(
                "Sim, são muito sensíveis, dolorosas ou com sensação de queimação.",
                3,
            ),
            option("Sim, dolorosas com qualquer toque.", 2),
            option("Às vezes, doem ao pressionar ou ficar muito tempo em pé.", 1),
            option("Não, não doem.", 0),
        ],
    },
    Question {
        prompt: "Você tem inchaço nas pernas?",
        options: &[
            option(
                "Sim, incham quase o tempo todo, pioram no calor, e não melhora com elevação.",
                2,
            ),
            option("Sim , frequentemente incham, mas melhora com elevação.", 1),
            option("Não, às vezes incham no calor ou após longas viagens.", 0),
            option("Não, raramente sinto inchaço nas pernas.", 0),
        ],
    },
    Question {
        prompt: "Suas pernas ou braços formam hematomas facilmente?",
        options: &[
            option("Sim, formam hematomas muito facilmente, nem percebo como.", 2),
            option("Sim, formam hematomas com contato mínimo.", 1),
            option("Não formam hematomas facilmente.", 0),
        ],
    },
];

/// The full questionnaire in presentation order.
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

/// Highest score a submission can reach.
pub fn max_score() -> u16 {
    QUESTIONS
        .iter()
        .map(|question| u16::from(question.max_weight()))
        .sum()
}

/// Resolve the weight of `answer` for the question at `question_index`.
pub fn weight_for(question_index: usize, answer: &str) -> Result<u8, CatalogError> {
    let question = QUESTIONS
        .get(question_index)
        .ok_or(CatalogError::UnknownQuestion(question_index))?;
    let position = question
        .position_of(answer)
        .ok_or_else(|| CatalogError::UnknownAnswer {
            question: question_index,
            answer: answer.to_string(),
        })?;
    Ok(question.options[position].weight)
}

/// Resolve the label of the option at `position` for the question at `question_index`.
pub fn label_at(question_index: usize, position: usize) -> Result<&'static str, CatalogError> {
    let question = QUESTIONS
        .get(question_index)
        .ok_or(CatalogError::UnknownQuestion(question_index))?;
    question
        .options
        .get(position)
        .map(|option| option.label)
        .ok_or(CatalogError::UnknownPosition {
            question: question_index,
            position,
        })
}

/// Public projection of a question; weights stay server side.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub number: usize,
    pub prompt: &'static str,
    pub options: Vec<&'static str>,
}

pub fn question_views() -> Vec<QuestionView> {
    QUESTIONS
        .iter()
        .enumerate()
        .map(|(index, question)| QuestionView {
            number: index + 1,
            prompt: question.prompt,
            options: question.options.iter().map(|option| option.label).collect(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("question {0} does not exist")]
    UnknownQuestion(usize),
    #[error("answer '{answer}' is not an option for question {}", .question + 1)]
    UnknownAnswer { question: usize, answer: String },
    #[error("question {} has no option at position {position}", .question + 1)]
    UnknownPosition { question: usize, position: usize },
}
