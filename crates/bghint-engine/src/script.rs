//! Line-oriented command script fed to the analysis engine.

use std::fmt;

/// The command script for one best-move analysis.
///
/// Renders as three newline-terminated lines: a `set board` command
/// embedding the position verbatim, `show moves`, and `quit`. The position
/// string is opaque text (e.g. an XGID-like identifier); whether it is a
/// valid board encoding is entirely the engine's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisScript {
    commands: Vec<String>,
}

impl AnalysisScript {
    /// Builds the best-move script for a position string.
    pub fn best_move(position: &str) -> Self {
        AnalysisScript {
            commands: vec![
                format!("set board {}", position),
                "show moves".to_string(),
                "quit".to_string(),
            ],
        }
    }

    /// The exact text written to the engine's stdin.
    pub fn render(&self) -> String {
        let mut text = String::new();
        for command in &self.commands {
            text.push_str(command);
            text.push('\n');
        }
        text
    }
}

impl fmt::Display for AnalysisScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_move_renders_three_terminated_lines() {
        let script = AnalysisScript::best_move("4HPwATDgc/ABMA");
        assert_eq!(
            script.render(),
            "set board 4HPwATDgc/ABMA\nshow moves\nquit\n"
        );
    }

    #[test]
    fn position_is_embedded_verbatim() {
        let script = AnalysisScript::best_move("  spaced / weird : chars  ");
        assert!(script
            .render()
            .starts_with("set board   spaced / weird : chars  \n"));
    }

    #[test]
    fn display_matches_render() {
        let script = AnalysisScript::best_move("abc");
        assert_eq!(script.to_string(), script.render());
    }
}
