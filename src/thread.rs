use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub(crate) struct Thread {
  pub(crate) author: String,
  pub(crate) comments: Vec<Comment>,
  #[serde(alias = "num_comments (reported by reddit)")]
  pub(crate) num_comments: u64,
  pub(crate) score: i64,
  #[serde(default)]
  pub(crate) selftext: String,
  pub(crate) subreddit: String,
  pub(crate) title: String,
  pub(crate) upvote_ratio: f64,
}

impl Thread {
  /// Total number of comments in the forest, replies included.
  pub(crate) fn comment_count(&self) -> usize {
    self.comments.iter().map(Comment::subtree_size).sum()
  }

  /// Parses a thread, failing on missing or mistyped fields.
  ///
  /// `serde_json` stops at 128 nested containers. Each reply level costs an
  /// object and its `replies` array, so the deepest accepted reply sits at
  /// depth 61; anything deeper fails with `recursion limit exceeded`.
  pub(crate) fn from_json(source: &Source, json: &str) -> Result<Self> {
    serde_json::from_str(json)
      .with_context(|| format!("invalid thread JSON in {source}"))
  }
}
