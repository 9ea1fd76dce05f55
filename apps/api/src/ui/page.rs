//! Server-rendered page: the form, the results pane and the small script that
//! drives the loading placeholder and the per-item copy indicator in the browser.

use crate::bio::models::{
    BioTone, BioType, FieldErrors, MAX_CONTENT_CHARS, MAX_TEMPERATURE, MIN_CONTENT_CHARS,
    MIN_TEMPERATURE, MODEL_CATALOG,
};
use crate::ui::session::FormSession;

/// How long a copy button shows "Copied!" before reverting.
pub const COPIED_RESET_MS: u64 = 2000;
/// Placeholder blocks shown while a submission is outstanding.
pub const SKELETON_COUNT: usize = 3;

const TEMPERATURE_STEP: f64 = 0.1;

const PAGE_TITLE: &str = "AI Bio Generator | Craft Your Perfect Bio";
const PAGE_DESCRIPTION: &str =
    "Harness the power of AI to create a bio that captures your essence in seconds";

const STYLES: &str = r##"
body { margin: 0; font-family: system-ui, sans-serif; background: #f1f5f9; color: #1f2937; }
main { max-width: 72rem; margin: 0 auto; padding: 3rem 1.5rem; }
header { text-align: center; margin-bottom: 3rem; }
h1 { font-size: 2.75rem; color: #2563eb; margin: 0 0 1rem; }
.grid { display: grid; gap: 2rem; grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr)); }
.card { background: #fff; border: 1px solid #d1d5db; border-radius: 1rem; padding: 1.5rem; }
fieldset { border: 1px solid #dbeafe; border-radius: .75rem; margin-bottom: 1.5rem; padding: 1rem 1.5rem; }
legend { font-weight: 600; color: #2563eb; padding: 0 .5rem; }
label { display: block; margin: .75rem 0 .25rem; }
select, textarea, input[type=range] { width: 100%; box-sizing: border-box; }
textarea { min-height: 10rem; resize: none; }
.field-error { color: #dc2626; font-size: .875rem; margin: .25rem 0 0; }
button.generate { width: 100%; padding: .75rem; font-size: 1.1rem; color: #fff; background: #4f46e5; border: 0; border-radius: .5rem; }
button.generate:disabled { opacity: .6; }
.bio { display: flex; justify-content: space-between; gap: 1rem; border: 1px solid #e5e7eb; border-radius: .5rem; padding: 1rem; margin-bottom: 1rem; }
.bio p { margin: 0; flex-grow: 1; }
.skeleton { height: 6rem; border-radius: .5rem; margin-bottom: 1rem; background: #e5e7eb; animation: pulse 1.5s infinite; }
@keyframes pulse { 50% { opacity: .5; } }
"##;

// `__COPIED_RESET_MS__` is substituted at render time.
const SCRIPT: &str = r##"
const COPIED_RESET_MS = __COPIED_RESET_MS__;
let copiedTimer = null;

function resetCopyButtons() {
  document.querySelectorAll('[data-copy-index]').forEach((b) => { b.textContent = 'Copy'; });
}

document.addEventListener('click', async (event) => {
  const button = event.target.closest('[data-copy-index]');
  if (!button) return;
  const bio = document.getElementById('bio-' + button.dataset.copyIndex);
  try {
    await navigator.clipboard.writeText(bio.textContent);
    resetCopyButtons();
    button.textContent = 'Copied!';
    clearTimeout(copiedTimer);
    copiedTimer = setTimeout(resetCopyButtons, COPIED_RESET_MS);
  } catch (err) {
    console.error('Failed to copy text: ', err);
  }
});

document.getElementById('temperature').addEventListener('input', (event) => {
  document.getElementById('temperature-value').textContent = event.target.value;
});

document.getElementById('bio-form').addEventListener('submit', (event) => {
  const button = document.getElementById('generate-button');
  if (button.disabled) { event.preventDefault(); return; }
  button.disabled = true;
  button.textContent = 'Generating...';
  document.getElementById('bio-output').innerHTML =
    document.getElementById('submitting-output').innerHTML;
});
"##;

/// Renders the whole page for the session's current state.
pub fn render_page(session: &FormSession) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<style>{styles}</style>
</head>
<body>
<main>
<header>
<h1>Your Bio, Perfectly Crafted by AI.</h1>
<p>Just answer a few simple questions, and let AI do the rest.</p>
</header>
<div class="grid">
{form}
<section class="card">
<h2>Generated Bios</h2>
<div id="bio-output">{output}</div>
</section>
</div>
</main>
<template id="submitting-output">{submitting_output}</template>
<script>{script}</script>
</body>
</html>
"##,
        title = escape_html(PAGE_TITLE),
        description = escape_html(PAGE_DESCRIPTION),
        styles = STYLES,
        form = render_form(session),
        output = render_output(session),
        submitting_output = render_skeletons(),
        script = SCRIPT.replace("__COPIED_RESET_MS__", &COPIED_RESET_MS.to_string()),
    )
}

/// Results pane: skeletons while loading, otherwise one card per bio.
pub fn render_output(session: &FormSession) -> String {
    if session.is_loading() {
        return render_skeletons();
    }

    let Some(output) = session.output() else {
        return String::new();
    };

    output
        .bios()
        .enumerate()
        .map(|(index, bio)| render_bio_card(index, bio))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_skeletons() -> String {
    (0..SKELETON_COUNT)
        .map(|_| r#"<div class="skeleton"></div>"#)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_bio_card(index: usize, bio: &str) -> String {
    format!(
        r#"<div class="bio"><p id="bio-{index}">{bio}</p><button type="button" data-copy-index="{index}">Copy</button></div>"#,
        bio = escape_html(bio),
    )
}

fn render_form(session: &FormSession) -> String {
    let values = session.values();
    let errors = session.errors();

    let mut model_options: Vec<String> = MODEL_CATALOG
        .iter()
        .map(|m| option(m.id, m.label, m.id == values.model))
        .collect();
    if !values.model.is_empty() && !MODEL_CATALOG.iter().any(|m| m.id == values.model) {
        model_options.push(option(&values.model, &values.model, true));
    }

    let type_options: Vec<String> = BioType::ALL
        .iter()
        .map(|t| option(t.as_str(), t.label(), t.as_str() == values.bio_type))
        .collect();

    let tone_options: Vec<String> = BioTone::ALL
        .iter()
        .map(|t| option(t.as_str(), t.label(), t.as_str() == values.tone))
        .collect();

    let (button_attrs, button_label) = if session.is_loading() {
        (" disabled", "Generating...")
    } else {
        ("", "Generate Bio")
    };

    format!(
        r##"<section class="card">
<h2>Customize Your Bio</h2>
<form id="bio-form" method="post" action="/generate">
<fieldset>
<legend>AI Settings</legend>
<label for="model">AI Model</label>
<select id="model" name="model">{model_options}</select>
{model_error}
<label for="temperature">Creativity Level <span id="temperature-value">{temperature}</span></label>
<input id="temperature" name="temperature" type="range" min="{t_min}" max="{t_max}" step="{t_step}" value="{temperature}" title="A higher setting generates more imaginative and unexpected bios, while a lower setting produces more traditional and straightforward styles.">
{temperature_error}
</fieldset>
<fieldset>
<legend>Your Bio Details</legend>
<label for="content">About Yourself</label>
<textarea id="content" name="content" required minlength="{content_min}" maxlength="{content_max}" placeholder="Describe yourself (Max 500 Characters)">{content}</textarea>
{content_error}
<label for="type">Bio Type</label>
<select id="type" name="type">{type_options}</select>
{type_error}
<label for="tone">Bio Tone</label>
<select id="tone" name="tone">{tone_options}</select>
{tone_error}
<label><input id="emojis" name="emojis" type="checkbox" value="true"{emojis_checked}> Include Emojis</label>
</fieldset>
<button id="generate-button" class="generate" type="submit"{button_attrs}>{button_label}</button>
</form>
</section>"##,
        model_options = model_options.join(""),
        model_error = field_error(errors, "model"),
        temperature = values.temperature,
        t_min = MIN_TEMPERATURE,
        t_max = MAX_TEMPERATURE,
        t_step = TEMPERATURE_STEP,
        temperature_error = field_error(errors, "temperature"),
        content_min = MIN_CONTENT_CHARS,
        content_max = MAX_CONTENT_CHARS,
        content = escape_html(&values.content),
        content_error = field_error(errors, "content"),
        type_options = type_options.join(""),
        type_error = field_error(errors, "type"),
        tone_options = tone_options.join(""),
        tone_error = field_error(errors, "tone"),
        emojis_checked = if values.emojis { " checked" } else { "" },
    )
}

fn option(value: &str, label: &str, selected: bool) -> String {
    format!(
        r#"<option value="{}"{}>{}</option>"#,
        escape_html(value),
        if selected { " selected" } else { "" },
        escape_html(label)
    )
}

fn field_error(errors: &FieldErrors, field: &str) -> String {
    errors
        .get(field)
        .map(|message| format!(r#"<p class="field-error">{}</p>"#, escape_html(message)))
        .unwrap_or_default()
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bio::models::{Bio, BioRequestBody, BioResponse};

    fn valid_values() -> BioRequestBody {
        BioRequestBody {
            content: "Climate scientist translating ice-core data into stories people remember."
                .to_string(),
            ..BioRequestBody::default()
        }
    }

    fn session_with_bios(bios: &[&str]) -> FormSession {
        let mut session = FormSession::new();
        session.begin_submit(valid_values()).unwrap();
        session.finish(Ok(BioResponse {
            data: bios
                .iter()
                .map(|b| Bio {
                    bio: b.to_string(),
                })
                .collect(),
        }));
        session
    }

    #[test]
    fn test_idle_page_shows_defaults() {
        let page = render_page(&FormSession::new());
        assert!(page.contains(r#"<option value="llama3-8b-8192" selected>Llama 3 8B</option>"#));
        assert!(page.contains(r#"<option value="mixtral-8x7b-32768">Mixtral 8x7B</option>"#));
        assert!(page.contains(r#"<option value="personal" selected>Personal</option>"#));
        assert!(page.contains(r#"<option value="professional" selected>Professional</option>"#));
        assert!(page.contains(r#"<span id="temperature-value">1</span>"#));
        assert!(page.contains(r#"type="checkbox" value="true">"#));
        assert!(page.contains(r#"type="submit">Generate Bio</button>"#));
        assert!(page.contains(r#"<div id="bio-output"></div>"#));
        assert!(page.contains("<title>AI Bio Generator | Craft Your Perfect Bio</title>"));
    }

    #[test]
    fn test_invalid_submission_renders_field_errors_and_keeps_values() {
        let mut session = FormSession::new();
        let _ = session.begin_submit(BioRequestBody {
            content: "<b>short</b>".to_string(),
            tone: "sarcastic".to_string(),
            emojis: true,
            ..BioRequestBody::default()
        });

        let page = render_page(&session);
        assert!(page.contains(
            r#"<p class="field-error">Describe yourself in at least 50 characters</p>"#
        ));
        assert!(page.contains("&lt;b&gt;short&lt;/b&gt;</textarea>"));
        assert!(page.contains(r#"<option value="sarcastic" selected>Sarcastic</option>"#));
        assert!(page.contains(r#"type="checkbox" value="true" checked>"#));
    }

    #[test]
    fn test_loading_state_shows_skeletons_and_disables_submit() {
        let mut session = FormSession::new();
        session.begin_submit(valid_values()).unwrap();

        let output = render_output(&session);
        assert_eq!(output.matches(r#"class="skeleton""#).count(), SKELETON_COUNT);

        let page = render_page(&session);
        assert!(page.contains(r#"type="submit" disabled>Generating...</button>"#));
    }

    #[test]
    fn test_results_render_one_copy_button_per_bio() {
        let session = session_with_bios(&["first", "second <3", "third", "fourth"]);
        let output = render_output(&session);

        for i in 0..4 {
            assert!(output.contains(&format!(r#"<p id="bio-{i}">"#)));
            assert!(output.contains(&format!(r#"data-copy-index="{i}">Copy</button>"#)));
        }
        assert!(output.contains("second &lt;3"));
        assert!(!output.contains("Copied!"));
    }

    #[test]
    fn test_submitting_template_is_embedded() {
        let page = render_page(&session_with_bios(&["a", "b", "c", "d"]));
        let template_start = page.find(r#"<template id="submitting-output">"#).unwrap();
        let template = &page[template_start..];
        assert!(template.contains(r#"<div class="skeleton"></div>"#));
    }

    #[test]
    fn test_copy_script_uses_fixed_reset_delay() {
        let page = render_page(&FormSession::new());
        assert!(page.contains("const COPIED_RESET_MS = 2000;"));
        assert!(!page.contains("__COPIED_RESET_MS__"));
        // only the clicked button shows the indicator; every other button is reset first
        let reset = page.find("resetCopyButtons();\n    button.textContent = 'Copied!';");
        assert!(reset.is_some());
        assert!(page.contains("setTimeout(resetCopyButtons, COPIED_RESET_MS)"));
    }

    #[test]
    fn test_uncatalogued_model_is_kept_selected() {
        let mut session = FormSession::new();
        let _ = session.begin_submit(BioRequestBody {
            model: "gemma-7b-it".to_string(),
            ..BioRequestBody::default()
        });
        let page = render_page(&session);
        assert!(page.contains(r#"<option value="gemma-7b-it" selected>gemma-7b-it</option>"#));
        assert!(page.contains(r#"<option value="llama3-8b-8192">Llama 3 8B</option>"#));
    }

    #[test]
    fn test_content_length_is_enforced_by_the_browser() {
        let page = render_page(&FormSession::new());
        let start = page.find(r#"<textarea id="content""#).unwrap();
        let end = start + page[start..].find('>').unwrap();
        let textarea = &page[start..end];
        assert!(textarea.contains(" required"));
        assert!(textarea.contains(r#"minlength="50""#));
        assert!(textarea.contains(r#"maxlength="500""#));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }
}
