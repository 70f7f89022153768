use super::*;

#[derive(Debug, Parser)]
#[command(
  version,
  about = "Render a scraped discussion thread as an HTML fragment for survey tools"
)]
pub(crate) struct Arguments {
  /// Thread JSON to render, or `-` for stdin [default: stdin]
  pub(crate) input: Option<PathBuf>,
  /// Wrap the fragment in a standalone HTML page for previewing
  #[arg(long)]
  pub(crate) standalone: bool,
}

impl Arguments {
  pub(crate) fn run(
    self,
    stdin: impl Read,
    stdout: &mut impl Write,
  ) -> Result {
    let source = Source::from(self.input);

    let thread = Thread::from_json(&source, &source.read(stdin)?)?;

    log::debug!(
      "rendering `{}` with {} comments",
      thread.title,
      thread.comment_count()
    );

    let html = if self.standalone {
      ThreadRenderer::render_document(&thread)
    } else {
      ThreadRenderer::render(&thread)
    };

    writeln!(stdout, "{html}").context("could not write to stdout")?;

    Ok(())
  }
}
