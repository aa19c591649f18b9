//! Line editor for canto REPL

use rustyline::{
    history::DefaultHistory,
    validate::{ValidationResult, Validator},
    Completer, Helper, Highlighter, Hinter, Result,
};

/// Custom rustyline::Editor
pub(crate) type Editor = rustyline::Editor<ReplEditor, DefaultHistory>;

/// Create a line editor
pub fn editor() -> Result<Editor> {
    let editor = ReplEditor {};
    let mut rl = rustyline::Editor::new()?;
    rl.set_helper(Some(editor));
    Ok(rl)
}

/// Editor for canto repl
#[derive(Completer, Helper, Highlighter, Hinter)]
pub struct ReplEditor {}

impl Validator for ReplEditor {
    fn validate(
        &self,
        ctx: &mut rustyline::validate::ValidationContext,
    ) -> Result<rustyline::validate::ValidationResult> {
        Ok(scan(ctx.input()))
    }

    fn validate_while_typing(&self) -> bool {
        false
    }
}

/// Balance parentheses, skipping over string literals and comments
fn scan(input: &str) -> ValidationResult {
    let mut depth: usize = 0;
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return ValidationResult::Invalid(Some(") is not paired".to_string())),
            },
            '"' => loop {
                match chars.next() {
                    Some('\\') => {
                        let _ = chars.next();
                    }
                    Some('"') => break,
                    Some(_) => {}
                    None => return ValidationResult::Incomplete,
                }
            },
            '#' => loop {
                match chars.next() {
                    Some('\n') | None => break,
                    Some(_) => {}
                }
            },
            _ => {}
        }
    }
    if depth == 0 {
        ValidationResult::Valid(None)
    } else {
        ValidationResult::Incomplete
    }
}
