use {
  super::*,
  std::{
    env,
    sync::atomic::{AtomicUsize, Ordering},
  },
};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A scraped r/Conservative thread, in the scraper's JSON shape.
pub(crate) const SAMPLE_THREAD: &str = r#"{
  "title": "NASA astronauts splash down on Earth after 9 months stranded in space",
  "author": "f1sh98",
  "subreddit": "Conservative",
  "rank": 2,
  "score": 1093,
  "upvote_ratio": 0.93,
  "num_comments (reported by reddit)": 71,
  "url": "https://www.foxnews.com/video/5614615980001",
  "id": "1jehe6z",
  "selftext": "",
  "comments": [
    {
      "author": "DandierChip",
      "body": "Awesome news!",
      "score": 71,
      "replies": []
    },
    {
      "author": "KyleforUSA",
      "body": "Thank you Musk and space X.   Suck it Boeing.",
      "score": 294,
      "replies": [
        {
          "author": "Batbuckleyourpants",
          "body": "The last few years have not been kind to Boeing at all.",
          "score": 20,
          "replies": []
        }
      ]
    },
    {
      "author": "murderinthedark",
      "body": "Super happy they got back safe.  Now homie can get that crazy hair cut.  lol <3",
      "score": 66,
      "replies": []
    },
    {
      "author": "gittenlucky",
      "body": "It\u2019s funny seeing all the \u201cElon musk\u2019s ____ <does bad thing>\u201d all over Reddit leftist subs, then this happens and the posts are \u201castronauts return safe\u201d with no mention of musk\u2026",
      "score": 25,
      "replies": []
    },
    {
      "author": "Flare4roach",
      "body": "I\u2019m sure the Left will put aside politics to celebrate that Elon brought fellow Americans home after being abandoned.",
      "score": 146,
      "replies": [
        {
          "author": "_AlexSupertramp_",
          "body": "Lol",
          "score": 54,
          "replies": []
        },
        {
          "author": "Drawer-Imaginary",
          "body": "Too busy vandalizing teslas and then complaining about more expensive insurance prices to notice",
          "score": 45,
          "replies": []
        }
      ]
    },
    {
      "author": "roaming_art",
      "body": "USA, USA, USA!!!",
      "score": 40,
      "replies": []
    },
    {
      "author": "Sure-Wishbone-4293",
      "body": "Thank you to the Trump administration for taking care of this. \n\nThe Biden administration didn\u2019t do anything about this issue.",
      "score": 119,
      "replies": [
        {
          "author": "D_Ethan_Bones",
          "body": "They did negative, they blocked things from happening that could have happened without their petty interference. \n\nNow we get to see people folding their arms over their chests and going out of their way to *loudly* deny credit to Musk.",
          "score": 66,
          "replies": [
            {
              "author": "Sure-Wishbone-4293",
              "body": "\ud83d\udc4d\ud83c\udffb yup!",
              "score": 17,
              "replies": []
            }
          ]
        }
      ]
    },
    {
      "author": "intrigue-bliss4331",
      "body": "Biden\u2019s regime left 2 Americans stranded because they hate Trump that much. Just realize there is no depth to which the left won\u2019t sink.",
      "score": 35,
      "replies": [
        {
          "author": "hey_ringworm",
          "body": "Didn\u2019t want Elon (who had endorsed Trump) to get the win before the election.\n\nThere is no low to which Biden/Democrats would not sink in order to retain power.",
          "score": 13,
          "replies": []
        }
      ]
    },
    {
      "author": "CombatDeffective",
      "body": "What? No! President Biden exiled them from Earth for a reason! (/s)",
      "score": 6,
      "replies": []
    },
    {
      "author": "Silly_Ad_4612",
      "body": "Unreal. Thank God. Crazy news.\u00a0",
      "score": 3,
      "replies": []
    },
    {
      "author": "Praising_God_777",
      "body": "Praising God that they\u2019re home! I\u2019ve been praying for months!",
      "score": 4,
      "replies": []
    },
    {
      "author": "None",
      "body": "[removed]",
      "score": 1,
      "replies": []
    },
    {
      "author": "BossJackson222",
      "body": "And liberals will still try to say that Elon Musk had nothing to do with this. And that it was racist somehow lol. Or some Nazi bullshit made up crap lol.",
      "score": 1,
      "replies": []
    }
  ]
}"#;

/// A thread whose only top-level comment starts a chain of `depth` nested
/// replies, every comment carrying an explicit `replies` array.
pub(crate) fn reply_chain(depth: usize) -> String {
  let mut comment =
    r#"{"author": "a", "body": "b", "score": 1, "replies": []}"#.to_string();

  for _ in 0..depth {
    comment = format!(
      r#"{{"author": "a", "body": "b", "score": 1, "replies": [{comment}]}}"#
    );
  }

  format!(
    r#"{{"title": "t", "author": "a", "subreddit": "s", "score": 1,
      "num_comments": 1, "upvote_ratio": 1.0, "comments": [{comment}]}}"#
  )
}

pub(crate) fn temp_thread_file() -> PathBuf {
  let unique = COUNTER.fetch_add(1, Ordering::Relaxed);
  env::temp_dir().join(format!("thread_html_test_{unique}.json"))
}
