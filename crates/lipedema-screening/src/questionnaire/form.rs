//! Server-rendered questionnaire page and urlencoded field mapping.

use std::collections::HashMap;

use super::catalog::{self, QUESTION_COUNT};
use super::domain::ScreeningSubmission;

pub const PAGE_TITLE: &str = "Faça o Seu Teste e Descubra se Você Apresenta Sinais de LIPEDEMA";
pub const PAGE_DESCRIPTION: &str = "Esta ferramenta auxilia na identificação de sintomas de lipedema, mas não substitui diagnóstico profissional.";

pub const FIELD_FULL_NAME: &str = "nome_completo";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_AGE: &str = "idade";
pub const FIELD_WEIGHT: &str = "peso";
pub const FIELD_PROFESSION: &str = "profissao";
pub const FIELD_WHATSAPP: &str = "whatsapp";

/// Form field name carrying the answer to question `number` (1-based).
pub fn answer_field(number: usize) -> String {
    format!("pergunta_{number}")
}

/// Build a submission from urlencoded form fields. Absent fields become blank
/// so intake validation can report them.
pub fn submission_from_fields(mut fields: HashMap<String, String>) -> ScreeningSubmission {
    let mut take = |name: &str| fields.remove(name).unwrap_or_default();

    let full_name = take(FIELD_FULL_NAME);
    let email = take(FIELD_EMAIL);
    let age = take(FIELD_AGE);
    let weight_kg = take(FIELD_WEIGHT);
    let profession = take(FIELD_PROFESSION);
    let whatsapp = take(FIELD_WHATSAPP);
    let answers = (1..=QUESTION_COUNT)
        .map(|number| Some(take(&answer_field(number))).filter(|answer| !answer.is_empty()))
        .collect();

    ScreeningSubmission {
        full_name,
        email,
        age,
        weight_kg,
        profession,
        whatsapp,
        answers,
    }
}

/// Render the questionnaire page, pre-filled with `previous` and showing
/// `output` in the result box when present.
pub fn render_page(previous: &ScreeningSubmission, output: Option<&str>) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str(&format!("  <title>{}</title>\n", escape_html(PAGE_TITLE)));
    html.push_str(STYLES);
    html.push_str("</head>\n<body>\n");

    html.push_str(&format!("<h1>{}</h1>\n", escape_html(PAGE_TITLE)));
    html.push_str(&format!("<p>{}</p>\n", escape_html(PAGE_DESCRIPTION)));
    html.push_str("<form method=\"post\" action=\"/\">\n");

    html.push_str(&text_field(FIELD_FULL_NAME, "Nome Completo", "text", &previous.full_name));
    html.push_str(&text_field(FIELD_EMAIL, "Email", "email", &previous.email));

    let age = if previous.age.trim().is_empty() {
        "0"
    } else {
        previous.age.trim()
    };
    html.push_str("  <div class=\"field\">\n");
    html.push_str(&format!(
        "    <label for=\"{FIELD_AGE}\">Idade: <output id=\"idade_valor\">{}</output></label>\n",
        escape_html(age)
    ));
    html.push_str(&format!(
        "    <input type=\"range\" id=\"{FIELD_AGE}\" name=\"{FIELD_AGE}\" min=\"0\" max=\"120\" step=\"1\" value=\"{}\" oninput=\"idade_valor.value = this.value\">\n",
        escape_html(age)
    ));
    html.push_str("  </div>\n");

    html.push_str("  <div class=\"field\">\n");
    html.push_str(&format!(
        "    <label for=\"{FIELD_WEIGHT}\">Peso (kg)</label>\n    <input type=\"number\" id=\"{FIELD_WEIGHT}\" name=\"{FIELD_WEIGHT}\" step=\"0.1\" min=\"0\" value=\"{}\">\n",
        escape_html(&previous.weight_kg)
    ));
    html.push_str("  </div>\n");

    html.push_str(&text_field(FIELD_PROFESSION, "Profissão", "text", &previous.profession));
    html.push_str(&text_field(
        FIELD_WHATSAPP,
        "Whatsapp - Coloque o DDD e o Número Corretamente",
        "tel",
        &previous.whatsapp,
    ));

    for (index, question) in catalog::questions().iter().enumerate() {
        let number = index + 1;
        let name = answer_field(number);
        let selected = previous
            .answers
            .get(index)
            .and_then(|answer| answer.as_deref());

        html.push_str("  <fieldset class=\"question\">\n");
        html.push_str(&format!(
            "    <legend>{}</legend>\n",
            escape_html(question.prompt)
        ));
        for (position, option) in question.options.iter().enumerate() {
            let id = format!("{name}_{position}");
            let checked = if selected == Some(option.label) {
                " checked"
            } else {
                ""
            };
            html.push_str(&format!(
                "    <div><input type=\"radio\" id=\"{id}\" name=\"{name}\" value=\"{}\"{checked}> <label for=\"{id}\">{}</label></div>\n",
                escape_html(option.label),
                escape_html(option.label)
            ));
        }
        html.push_str("  </fieldset>\n");
    }

    html.push_str("  <button type=\"submit\">Enviar</button>\n");
    html.push_str("</form>\n");

    html.push_str("<section class=\"result\">\n");
    html.push_str("  <h2>Resultado Final</h2>\n");
    html.push_str(&format!(
        "  <pre id=\"resultado\">{}</pre>\n",
        escape_html(output.unwrap_or_default())
    ));
    html.push_str("</section>\n");

    html.push_str("</body>\n</html>\n");
    html
}

fn text_field(name: &str, label: &str, input_type: &str, value: &str) -> String {
    format!(
        "  <div class=\"field\">\n    <label for=\"{name}\">{}</label>\n    <input type=\"{input_type}\" id=\"{name}\" name=\"{name}\" value=\"{}\">\n  </div>\n",
        escape_html(label),
        escape_html(value)
    )
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const STYLES: &str = r#"  <style>
    body { max-width: 720px; margin: 2rem auto; padding: 0 1rem; font-family: sans-serif; }
    .field { margin-bottom: 1rem; display: flex; flex-direction: column; }
    .question { margin-bottom: 1rem; }
    .result pre { white-space: pre-wrap; background: #f5f5f5; padding: 1rem; min-height: 3rem; }
  </style>
"#;
