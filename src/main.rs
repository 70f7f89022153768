use {
  anyhow::Context,
  arguments::Arguments,
  clap::Parser,
  comment::Comment,
  crossterm::style::Stylize,
  serde::Deserialize,
  source::Source,
  std::{
    backtrace::BacktraceStatus,
    borrow::Cow,
    fmt::{self, Display, Formatter},
    fs,
    io::{self, IsTerminal, Read, Write},
    path::{Path, PathBuf},
    process,
  },
  thread::Thread,
  thread_renderer::ThreadRenderer,
  utils::{escape, format_count, format_percentage},
};

mod arguments;
mod comment;
mod source;
#[cfg(test)]
mod test_fixture;
mod thread;
mod thread_renderer;
mod utils;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn label(text: &str, use_color: bool) -> String {
  if use_color {
    text.bold().red().to_string()
  } else {
    text.to_string()
  }
}

fn main() {
  env_logger::init();

  let result = Arguments::parse().run(io::stdin().lock(), &mut io::stdout());

  if let Err(error) = result {
    let stderr = io::stderr();

    let use_color = stderr.is_terminal();

    let _ = report(&error, &mut stderr.lock(), use_color);

    process::exit(1);
  }
}

fn report(
  error: &anyhow::Error,
  stderr: &mut impl Write,
  use_color: bool,
) -> io::Result<()> {
  writeln!(stderr, "{} {error}", label("error:", use_color))?;

  let mut causes = error.chain().skip(1).peekable();

  if causes.peek().is_some() {
    writeln!(stderr, "\n{}", label("because:", use_color))?;
  }

  for cause in causes {
    writeln!(stderr, "{} {cause}", label("-", use_color))?;
  }

  let backtrace = error.backtrace();

  if backtrace.status() == BacktraceStatus::Captured {
    writeln!(stderr, "{}\n{backtrace}", label("backtrace:", use_color))?;
  }

  Ok(())
}
