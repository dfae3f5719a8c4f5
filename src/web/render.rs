//! Server-side HTML for the single form page.

use crate::domain::{
    CategoricalField, CategoryMapping, Label, NumericField, PredictionResult, RawInput,
};
use std::fmt::Write;

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the page. `values` pre-fills the form after a submission.
pub fn page(
    mapping: &CategoryMapping,
    values: Option<&RawInput>,
    result: Option<&PredictionResult>,
) -> String {
    let mut html = String::with_capacity(8 * 1024);
    html.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Heart Disease Risk</title>\n<style>\n\
         body{font-family:system-ui,sans-serif;max-width:44rem;margin:2rem auto;padding:0 1rem;color:#1f2937}\n\
         label{display:block;margin:.6rem 0 .2rem;font-weight:600}\n\
         input,select{width:100%;padding:.4rem;box-sizing:border-box}\n\
         button{margin-top:1.2rem;padding:.6rem 1.4rem}\n\
         .result{margin:1.2rem 0;padding:1rem;border-radius:.4rem;background:#ecfdf5}\n\
         .result.yes{background:#fff1f2}\n\
         .error{margin:1.2rem 0;padding:1rem;border-radius:.4rem;background:#fef3c7}\n\
         </style>\n</head>\n<body>\n<h1>Heart Disease Risk</h1>\n",
    );

    if let Some(result) = result {
        render_result(&mut html, result);
    }

    html.push_str("<form method=\"post\" action=\"/\">\n");

    for field in NumericField::ALL {
        let current = values.and_then(|v| v.get(field.name())).unwrap_or("");
        let _ = writeln!(
            html,
            "<label for=\"{name}\">{prompt}</label>\n\
             <input type=\"number\" id=\"{name}\" name=\"{name}\" step=\"{step}\" min=\"0\" value=\"{value}\" required>",
            name = field.name(),
            prompt = escape_html(field.prompt()),
            step = field.step(),
            value = escape_html(current),
        );
    }

    for field in CategoricalField::ALL {
        let current = values.and_then(|v| v.get(field.name()));
        let _ = writeln!(
            html,
            "<label for=\"{name}\">{prompt}</label>\n<select id=\"{name}\" name=\"{name}\" required>",
            name = field.name(),
            prompt = escape_html(field.prompt()),
        );
        for choice in mapping.choices(field) {
            let selected = if current == Some(choice.label) {
                " selected"
            } else {
                ""
            };
            let label = escape_html(choice.label);
            let _ = writeln!(html, "<option value=\"{label}\"{selected}>{label}</option>");
        }
        html.push_str("</select>\n");
    }

    html.push_str(
        "<button type=\"submit\">Predict</button>\n</form>\n\
         <script src=\"/static/script.js\" defer></script>\n</body>\n</html>\n",
    );
    html
}

fn render_result(html: &mut String, result: &PredictionResult) {
    match result {
        PredictionResult::Predicted(p) => {
            let class = if p.label == Label::Yes {
                "result yes"
            } else {
                "result"
            };
            let _ = writeln!(
                html,
                "<div class=\"{class}\" id=\"prediction\">\n\
                 <h2>Heart disease predicted: {label}</h2>\n\
                 <p>Probability of heart disease: <strong>{yes:.2}%</strong></p>\n\
                 <p>Probability of no heart disease: <strong>{no:.2}%</strong></p>\n</div>",
                label = p.label,
                yes = p.probability_yes,
                no = p.probability_no,
            );
        }
        PredictionResult::Failed(message) => {
            let _ = writeln!(
                html,
                "<div class=\"error\" id=\"error\" role=\"alert\">{}</div>",
                escape_html(message)
            );
        }
    }
}
