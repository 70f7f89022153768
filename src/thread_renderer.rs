use super::*;

/// Renders a thread as an HTML fragment with fixed inline styling, ready to
/// paste into a survey question.
pub(crate) struct ThreadRenderer;

impl ThreadRenderer {
  const ACTIONS: &str = r#"<div style="font-size: 12px; color: #878a8c; margin-bottom: 8px;">
<span style="margin-right: 8px;">⬆</span>
<span style="margin-right: 8px;">⬇</span>
<span style="margin-right: 8px;">Reply</span>
<span>Share</span>
</div>
"#;

  const EVEN_BORDER_COLOR: &str = "#e9ebee";

  const INDENT_PX: usize = 16;

  const ODD_BORDER_COLOR: &str = "#dae0e6";

  fn border_color(depth: usize) -> &'static str {
    match depth % 2 {
      0 => Self::EVEN_BORDER_COLOR,
      _ => Self::ODD_BORDER_COLOR,
    }
  }

  pub(crate) fn render(thread: &Thread) -> String {
    let Thread {
      author,
      comments,
      num_comments,
      score,
      selftext,
      subreddit,
      title,
      upvote_ratio,
    } = thread;

    let mut html = format!(
      r#"<div style="font-family: 'Helvetica', Arial, sans-serif; max-width: 800px; margin: 0 auto; color: #1a1a1b;">
<div style="background-color: #f8f9fa; padding: 12px; border-radius: 4px; margin-bottom: 12px; border: 1px solid #edeff1;">
<div style="font-weight: bold; font-size: 18px; margin-bottom: 6px; color: #222;">{title}</div>
<div style="font-size: 12px; color: #787c7e; margin-bottom: 4px;">
Posted in <span style="color: #0079d3;">r/{subreddit}</span> by <span style="color: #0079d3;">u/{author}</span> &middot; {points} &middot; {comments_label}
</div>
<div style="font-size: 12px; color: #787c7e;">
<span style="color: #46d160;">{percentage} Upvoted</span>
</div>
</div>
<div style="margin-bottom: 24px; line-height: 1.5; font-size: 14px; white-space: pre-line;">{selftext}</div>
<div style="border-left: 4px solid {border}; padding-left: 8px;">
<div style="font-size: 12px; color: #787c7e; margin-bottom: 12px; font-weight: bold;">{comment_heading}</div>
"#,
      title = escape(title),
      subreddit = escape(subreddit),
      author = escape(author),
      points = format_count(*score, "point"),
      percentage = format_percentage(*upvote_ratio),
      selftext = escape(selftext),
      border = Self::EVEN_BORDER_COLOR,
      comments_label = format_count(*num_comments, "comment"),
      comment_heading = format_count(*num_comments, "Comment"),
    );

    for comment in comments {
      html.push_str(&Self::render_comment(comment, 0));
    }

    html.push_str("</div>\n</div>");

    html
  }

  fn render_comment(comment: &Comment, depth: usize) -> String {
    let (border_width, padding) =
      if depth > 0 { ("2px", "8px") } else { ("0", "0") };

    let mut html = format!(
      r#"<div data-depth="{depth}" style="margin-bottom: 16px; margin-left: {margin}px;">
<div style="border-left: {border_width} solid {border_color}; padding-left: {padding};">
<div style="font-size: 12px; color: #787c7e; margin-bottom: 4px;">
<span style="color: #0079d3; font-weight: bold;">u/{author}</span> &middot; {points}
</div>
<div style="margin-bottom: 8px; line-height: 1.4; font-size: 14px;">{body}</div>
"#,
      margin = depth * Self::INDENT_PX,
      border_color = Self::border_color(depth),
      author = escape(&comment.author),
      points = format_count(comment.score, "point"),
      body = escape(&comment.body),
    );

    html.push_str(Self::ACTIONS);

    for reply in &comment.replies {
      html.push_str(&Self::render_comment(reply, depth + 1));
    }

    html.push_str("</div>\n</div>\n");

    html
  }

  /// Wraps the fragment in a minimal standalone page for previewing in a
  /// browser.
  pub(crate) fn render_document(thread: &Thread) -> String {
    format!(
      r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
{fragment}
</body>
</html>"#,
      title = escape(&thread.title),
      fragment = Self::render(thread),
    )
  }
}
