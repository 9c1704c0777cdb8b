use std::io::{BufRead, Write};

use arena_core::{ActionProvider, GameError, ProviderError, Robot, TurnChoice};

use super::parse_menu_choice;

const ACTION_MENU_RETRY: &str = "Invalid choice. Please choose 1 or 2.";

/// Action provider that prompts on a text stream and reads answers line by line.
///
/// Invalid answers are re-prompted forever; only end of input stops it.
pub struct ConsoleProvider<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleProvider<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives back the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_line(&mut self) -> Result<String, ProviderError> {
        self.output.flush()?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(ProviderError::Closed);
        }
        // Undecodable bytes become U+FFFD and fail menu parsing.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Reads lines until one is a valid `1..=max` choice.
    fn prompt_menu(&mut self, max: usize, retry: &str) -> Result<usize, ProviderError> {
        loop {
            let line = self.read_line()?;
            match parse_menu_choice(&line, max) {
                Ok(choice) => return Ok(choice),
                Err(err) => {
                    tracing::debug!(
                        code = err.error_code(),
                        severity = %err.severity(),
                        %err,
                        "menu input rejected"
                    );
                    writeln!(self.output, "{retry}")?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> ActionProvider for ConsoleProvider<R, W> {
    fn choose_action(&mut self, robot: &Robot) -> Result<TurnChoice, ProviderError> {
        writeln!(self.output)?;
        writeln!(self.output, "Choose an action:")?;
        writeln!(self.output, "1. Attack the boss")?;
        writeln!(self.output, "2. Use an ability")?;

        if self.prompt_menu(2, ACTION_MENU_RETRY)? == 1 {
            return Ok(TurnChoice::Attack);
        }

        let abilities = robot.abilities();
        writeln!(self.output)?;
        writeln!(self.output, "Choose an ability:")?;
        for (i, ability) in abilities.iter().enumerate() {
            if ability.can_use() {
                writeln!(self.output, "{}. {}", i + 1, ability.kind().label())?;
            } else {
                writeln!(
                    self.output,
                    "{}. {} (cooldown: {})",
                    i + 1,
                    ability.kind().label(),
                    ability.cooldown()
                )?;
            }
        }

        let retry = format!(
            "Invalid choice. Please choose 1 to {}.",
            abilities.len()
        );
        let slot = self.prompt_menu(abilities.len(), &retry)?;
        Ok(TurnChoice::Ability(slot - 1))
    }

    fn confirm_next_round(&mut self, _next_round: u32) -> Result<(), ProviderError> {
        writeln!(self.output)?;
        writeln!(self.output, "Press Enter to continue")?;
        self.read_line().map(drop)
    }
}
