//! HTML email rendering for both notification flows.
//!
//! User-submitted text is escaped before it is embedded; everything else
//! in the markup is static or comes from the category table. The markup
//! is deliberately inline-styled, email clients ignore stylesheets.

use relay_core::category::{self, CategoryStyle, CATEGORY_STYLES, DEFAULT_STYLE};
use relay_core::html;
use relay_db::models::feedback::{FeedbackRecord, InsertedFeedback};
use relay_mailer::OutboundEmail;

/// Subject of every digest email.
pub const DIGEST_SUBJECT: &str = "\u{1F4CA} Feedback Digest";

// ---------------------------------------------------------------------------
// Instant notification
// ---------------------------------------------------------------------------

/// Render the notification email for one inserted record.
///
/// Subject and accent follow the record's category; unrecognized or
/// missing categories get the default presentation.
pub fn instant_email(from: &str, recipient: &str, record: &InsertedFeedback) -> OutboundEmail {
    let style = category::style_for(record.kind.as_deref());

    let content = html::escape(&record.content);
    let kind = html::escape(record.kind.as_deref().unwrap_or(category::CATEGORY_OTHER));
    let user = record
        .user_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let html = format!(
        r#"<div style="font-family: sans-serif; padding: 20px;">
  <h1 style="color: {accent};">{emoji} {title}</h1>
  <p>A user just posted new feedback:</p>
  <div style="background-color: #f4f4f4; padding: 15px; border-left: 5px solid {accent}; margin: 20px 0;">
    <p style="font-size: 16px; font-style: italic;">"{content}"</p>
  </div>
  <p style="color: #888; font-size: 12px;">
    Type: <strong>{kind}</strong><br/>
    User ID: {user}<br/>
    Received just now via the feedback hook.
  </p>
</div>"#,
        accent = style.accent,
        emoji = style.emoji,
        title = style.title,
        content = content,
        kind = kind,
        user = user,
    );

    OutboundEmail {
        from: from.to_string(),
        to: vec![recipient.to_string()],
        subject: format!("{} {}", style.emoji, style.title),
        html,
    }
}

// ---------------------------------------------------------------------------
// Digest
// ---------------------------------------------------------------------------

/// Render the digest email for a batch of unprocessed records.
///
/// One section per non-empty category group, in table order; each
/// heading carries the emoji, section label and item count. Records with
/// unrecognized categories land in the `other` section, so the sections
/// always add up to the whole batch.
pub fn digest_email(from: &str, recipient: &str, records: &[FeedbackRecord]) -> OutboundEmail {
    let mut sections = String::new();

    for style in CATEGORY_STYLES.iter().chain(std::iter::once(&DEFAULT_STYLE)) {
        let group: Vec<&FeedbackRecord> = records
            .iter()
            .filter(|record| category::group_key(&record.kind) == style.key)
            .collect();

        if group.is_empty() {
            continue;
        }
        sections.push_str(&render_section(style, &group));
    }

    let html = format!(
        r#"<div style="font-family: sans-serif; padding: 20px;">
  <h1>Feedback Digest</h1>
  <p>Here is the feedback received since the last digest:</p>
{sections}</div>"#
    );

    OutboundEmail {
        from: from.to_string(),
        to: vec![recipient.to_string()],
        subject: DIGEST_SUBJECT.to_string(),
        html,
    }
}

/// Render one category section: heading with emoji and count, then the
/// escaped contents as a list.
fn render_section(style: &CategoryStyle, group: &[&FeedbackRecord]) -> String {
    let mut items = String::new();
    for record in group {
        items.push_str(&format!(
            "    <li style=\"margin: 6px 0;\">{}</li>\n",
            html::escape(&record.content)
        ));
    }

    format!(
        "  <h2 style=\"color: {accent};\">{emoji} {label} ({count})</h2>\n  <ul>\n{items}  </ul>\n",
        accent = style.accent,
        emoji = style.emoji,
        label = style.section,
        count = group.len(),
        items = items,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
