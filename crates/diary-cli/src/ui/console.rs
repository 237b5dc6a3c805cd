//! Line-oriented console shared by the menu, the commands and the browser.
//!
//! On a terminal, single-line prompts go through `dialoguer`; with piped
//! input the same prompts read plain lines, so the whole program can be
//! driven from a script. Free text (new entries, edits) is always read up to
//! end of input.

use std::io::{self, BufRead, BufReader, Read, Write};

use dialoguer::console::Term;
use dialoguer::Input;

use diary_core::storage::Entry;
use diary_core::{BrowseAction, BrowserConsole, EntryView};

use super::context::UiContext;
use super::render::entry_block;
use super::theme::{styled, styles};

pub struct Console {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
    ui: UiContext,
}

impl Console {
    pub fn new(input: Box<dyn BufRead>, output: Box<dyn Write>, ui: UiContext) -> Self {
        Self { input, output, ui }
    }

    /// Console over the process's stdin and stdout.
    pub fn stdio(ui: UiContext) -> Self {
        Self::new(
            Box::new(BufReader::new(io::stdin())),
            Box::new(io::stdout()),
            ui,
        )
    }

    /// Write text as-is and flush.
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    pub fn println(&mut self, text: &str) -> io::Result<()> {
        self.print(text)?;
        self.print("\n")
    }

    /// Print a success message.
    pub fn success(&mut self, text: &str) -> io::Result<()> {
        let line = styled(text, styles::success(), self.ui.color);
        self.println(&line)
    }

    /// Print a warning or hint.
    pub fn warn(&mut self, text: &str) -> io::Result<()> {
        let line = styled(text, styles::warning(), self.ui.color);
        self.println(&line)
    }

    /// Ask for one line of input, trimmed. `None` at end of input.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if self.ui.interactive {
            let answer = Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text_on(&Term::stdout())
                .map_err(|e| io::Error::other(e.to_string()))?;
            return Ok(Some(answer.trim().to_string()));
        }

        self.print(&format!("{} ", prompt))?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.println("")?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask a yes/no question.
    ///
    /// When `default` is yes, anything but `n` agrees; when it is no, only
    /// `y` agrees. End of input takes the default. The answer is a typed line
    /// on a terminal too, so any other reply is accepted at once.
    pub fn confirm(&mut self, prompt: &str, default: bool) -> io::Result<bool> {
        let hint = if default { "[Yn]" } else { "[yN]" };
        let answer = match self.prompt(&format!("{} {}", prompt, hint))? {
            Some(answer) => answer.to_lowercase(),
            None => return Ok(default),
        };
        Ok(if default { answer != "n" } else { answer == "y" })
    }

    /// Read free text up to end of input, trimmed.
    pub fn read_text(&mut self) -> io::Result<String> {
        let mut buffer = String::new();
        self.input.read_to_string(&mut buffer)?;
        Ok(buffer.trim().to_string())
    }
}

impl BrowserConsole for Console {
    fn show_entry(&mut self, view: &EntryView<'_>) -> diary_core::Result<()> {
        let block = entry_block(&self.ui, view);
        self.print(&block)?;
        Ok(())
    }

    fn read_action(&mut self) -> diary_core::Result<BrowseAction> {
        let action = match self.prompt("Action:[Npedq]")? {
            Some(answer) => BrowseAction::parse(&answer),
            // Nobody left to answer; stop rather than page through everything.
            None => BrowseAction::Quit,
        };
        self.println("")?;
        Ok(action)
    }

    fn read_replacement(&mut self, entry: &Entry) -> diary_core::Result<String> {
        self.println("Old text:")?;
        self.println(&entry.content)?;
        self.println("Enter the new text. Press Ctrl+D (Ctrl+Z on Windows) to finish.")?;
        Ok(self.read_text()?)
    }

    fn entry_updated(&mut self, _entry: &Entry) -> diary_core::Result<()> {
        self.println("")?;
        self.success("Entry saved successfully.")?;
        self.println("")?;
        Ok(())
    }

    fn confirm_delete(&mut self, _entry: &Entry) -> diary_core::Result<bool> {
        let confirmed = self.confirm("Are you sure?", false)?;
        self.println("")?;
        Ok(confirmed)
    }

    fn no_more_entries(&mut self) -> diary_core::Result<()> {
        self.println("No more entries.")?;
        self.println("")?;
        Ok(())
    }
}
