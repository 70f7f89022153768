use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Source {
  Path(PathBuf),
  Stdin,
}

impl Display for Source {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Self::Path(path) => write!(f, "`{}`", path.display()),
      Self::Stdin => write!(f, "<stdin>"),
    }
  }
}

impl From<Option<PathBuf>> for Source {
  fn from(path: Option<PathBuf>) -> Self {
    match path {
      Some(path) if path != Path::new("-") => Self::Path(path),
      _ => Self::Stdin,
    }
  }
}

impl Source {
  pub(crate) fn read(&self, mut stdin: impl Read) -> Result<String> {
    log::debug!("reading thread from {self}");

    match self {
      Self::Path(path) => fs::read_to_string(path)
        .with_context(|| format!("could not read {self}")),
      Self::Stdin => {
        let mut input = String::new();

        stdin
          .read_to_string(&mut input)
          .with_context(|| format!("could not read {self}"))?;

        Ok(input)
      }
    }
  }
}
