//! Mask command - read JSON, mask configured fields, write JSON

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use fieldmask_core::{Error as MaskError, MaskInfo, Masker};
use serde_json::Value;
use tracing::{debug, info};

use super::load_config;

#[derive(Debug, Clone, Copy, Default)]
pub struct MaskOptions {
    pub pretty: bool,
    pub lines: bool,
    pub report: bool,
}

pub fn handle(
    input: Option<&Path>,
    fields: Vec<String>,
    options: MaskOptions,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let masker = Masker::with_fields(config.field_set(fields));
    debug!("Masking {} field name(s)", masker.fields().len());

    let options = MaskOptions {
        pretty: options.pretty || config.output.pretty,
        ..options
    };

    let content = read_input(input)?;
    let (output, report) = render(&masker, &content, options)?;

    if options.report {
        for MaskInfo { field, count } in &report {
            info!(field = %field, count, "masked values");
        }
    }

    print!("{}", output);
    Ok(())
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(content)
        }
    }
}

/// Mask `content` and return the text to print plus the per-field tally
fn render(masker: &Masker, content: &str, options: MaskOptions) -> Result<(String, Vec<MaskInfo>)> {
    if !options.lines {
        let (masked, report) = mask_document(masker, content)?;
        let mut output = if options.pretty {
            serde_json::to_string_pretty(&masked)?
        } else {
            serde_json::to_string(&masked)?
        };
        output.push('\n');
        return Ok((output, report));
    }

    let mut output = String::with_capacity(content.len());
    let mut totals: Vec<MaskInfo> = Vec::new();

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let (masked, report) =
            mask_document(masker, line).with_context(|| format!("Line {}", index + 1))?;
        output.push_str(&serde_json::to_string(&masked)?);
        output.push('\n');

        for info in report {
            match totals.iter_mut().find(|t| t.field == info.field) {
                Some(total) => total.count += info.count,
                None => totals.push(info),
            }
        }
    }

    totals.sort_by(|a, b| a.field.cmp(&b.field));
    Ok((output, totals))
}

fn mask_document(masker: &Masker, text: &str) -> Result<(Value, Vec<MaskInfo>)> {
    let value: Value = serde_json::from_str(text).map_err(MaskError::InvalidJson)?;
    Ok(masker.mask_with_report(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_document() {
        let masker = Masker::new(["email"]);
        let (output, report) = render(
            &masker,
            r#"{"email": "a@b.com", "userName": "alice"}"#,
            MaskOptions::default(),
        )
        .unwrap();

        assert_eq!(output, "{\"email\":\"a@b.co*\",\"userName\":\"al**e\"}\n");
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn test_render_pretty() {
        let masker = Masker::default();
        let options = MaskOptions {
            pretty: true,
            ..Default::default()
        };
        let (output, _) = render(&masker, r#"{"userName": "bob"}"#, options).unwrap();

        assert_eq!(output, "{\n  \"userName\": \"bo*\"\n}\n");
    }

    #[test]
    fn test_render_lines() {
        let masker = Masker::default();
        let options = MaskOptions {
            lines: true,
            ..Default::default()
        };
        let input = "{\"userName\": \"alice\"}\n\n{\"userName\": \"carol\", \"n\": 1}\n";
        let (output, report) = render(&masker, input, options).unwrap();

        assert_eq!(
            output,
            "{\"userName\":\"al**e\"}\n{\"userName\":\"ca**l\",\"n\":1}\n"
        );
        assert_eq!(
            report,
            vec![MaskInfo {
                field: "userName".to_string(),
                count: 2
            }]
        );
    }

    #[test]
    fn test_render_reports_bad_line() {
        let masker = Masker::default();
        let options = MaskOptions {
            lines: true,
            ..Default::default()
        };
        let err = render(&masker, "{}\n{broken\n", options).unwrap_err();

        assert!(err.to_string().contains("Line 2"));
    }

    #[test]
    fn test_render_rejects_invalid_document() {
        let masker = Masker::default();
        assert!(render(&masker, "not json", MaskOptions::default()).is_err());
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.json");
        std::fs::write(&path, "{\"userName\":\"x\"}").unwrap();

        assert_eq!(read_input(Some(&path)).unwrap(), "{\"userName\":\"x\"}");
    }
}
