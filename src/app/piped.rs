//! Line-oriented session for non-terminal stdin/stdout.

use replshim::config::Config;
use replshim::editor::LineEditor;
use replshim::error::ReplError;
use replshim::responder::BuiltinResponder;
use replshim::session::run_piped;
use replshim::terminal::TerminalDisplay;
use std::io;
use tokio::io::BufReader;

pub(crate) async fn run(config: &Config, responder: BuiltinResponder) -> Result<(), ReplError> {
    // Piped output is usually captured; styling would only add noise.
    let display = TerminalDisplay::new(io::stdout(), false);
    let mut editor = LineEditor::new(display, config.editor.to_options());
    let input = BufReader::new(tokio::io::stdin());

    let result = run_piped(&mut editor, input, &responder).await;
    if let Some(err) = editor.display_mut().take_error() {
        return Err(ReplError::Io(err));
    }
    result?;
    Ok(())
}
