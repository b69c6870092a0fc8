use anyhow::Result;
use fieldmask_core::obscure_str;

pub fn handle(text: &[String]) -> Result<()> {
    print!("{}", render(text));
    Ok(())
}

/// One obscured line per input string
fn render(text: &[String]) -> String {
    text.iter()
        .map(|item| format!("{}\n", obscure_str(item)))
        .collect()
}
