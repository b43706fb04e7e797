//! Line commands typed during `pomofocus run`.

use pomofocus_core::{Action, TimerMode};

pub const HELP: &str = "\
commands:
  s, start, pause     start or pause the timer
  r, reset            reset the current interval
  w, work             switch to focus time
  sb, short           switch to a short break
  lb, long            switch to a long break
  mode <name>         switch to work | short_break | long_break
  add <text>          add a task
  done <id>           toggle a task's completion
  del <id>            delete a task
  help                show this list
  q, quit             end the session";

#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Action(Action),
    Help,
    Quit,
}

type ParseResult = Result<Option<Input>, Box<dyn std::error::Error + Send + Sync>>;

/// Parse one line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> ParseResult {
    let line = line.trim();
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    let input = match cmd.to_lowercase().as_str() {
        "" => return Ok(None),
        "s" | "start" | "p" | "pause" | "toggle" => Input::Action(Action::ToggleRunning),
        "r" | "reset" => Input::Action(Action::Reset),
        "w" | "work" => Input::Action(Action::SwitchMode(TimerMode::Work)),
        "sb" | "short" => Input::Action(Action::SwitchMode(TimerMode::ShortBreak)),
        "lb" | "long" => Input::Action(Action::SwitchMode(TimerMode::LongBreak)),
        "mode" => Input::Action(Action::SwitchMode(rest.parse::<TimerMode>()?)),
        "add" => Input::Action(Action::AddTask(rest.to_string())),
        "done" => Input::Action(Action::ToggleTask(task_id(rest)?)),
        "del" | "delete" | "rm" => Input::Action(Action::DeleteTask(task_id(rest)?)),
        "h" | "help" | "?" => Input::Help,
        "q" | "quit" | "exit" => Input::Quit,
        other => return Err(format!("unknown command '{other}' (type 'help')").into()),
    };
    Ok(Some(input))
}

fn task_id(arg: &str) -> Result<u64, String> {
    arg.parse::<u64>()
        .map_err(|_| format!("invalid task id '{arg}'"))
}
