use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub(crate) struct Comment {
  pub(crate) author: String,
  pub(crate) body: String,
  #[serde(default)]
  pub(crate) replies: Vec<Comment>,
  pub(crate) score: i64,
}

impl Comment {
  /// Number of comments in the subtree rooted here, this one included.
  pub(crate) fn subtree_size(&self) -> usize {
    1 + self.replies.iter().map(Comment::subtree_size).sum::<usize>()
  }
}
