use chrono::{NaiveDate, Utc};
use colored::Colorize;
use folio::commands::posts::BlogListing;
use folio::commands::publications::PublicationListing;
use folio::commands::{CmdMessage, MessageLevel};
use folio::config::FolioConfig;
use folio::model::{Post, Publication};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const ID_WIDTH: usize = 24;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Side-channel messages: problems go to stderr, the rest only to the debug log.
pub(super) fn print_notices(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
            _ => tracing::debug!("{}", message.content),
        }
    }
}

pub(super) fn print_posts(listing: &BlogListing<'_>) {
    if listing.is_empty() {
        println!("No posts match your filters.");
    }

    for post in &listing.posts {
        let id = pad_to_width(&truncate_to_width(&post.id, ID_WIDTH), ID_WIDTH);
        let preview = post.tag_preview();
        let mut tags: Vec<String> = preview.shown.iter().map(|t| format!("#{}", t)).collect();
        tags.extend(preview.more_label());
        let tags = tags.join(" ");

        let fixed = 2 + ID_WIDTH + 1 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed + tags.width() + 1);
        let title = truncate_to_width(&post.title, available);
        let padding = available.saturating_sub(title.width());

        println!(
            "  {} {}{} {}{}",
            id.yellow(),
            title,
            " ".repeat(padding),
            tags.cyan(),
            format_date_ago(post.date).dimmed()
        );
    }

    if !listing.vocabulary.is_empty() {
        let vocabulary: Vec<String> = listing
            .vocabulary
            .iter()
            .map(|tag| {
                if listing.selected_tags.contains(tag) {
                    format!("[{}]", tag).yellow().to_string()
                } else {
                    tag.dimmed().to_string()
                }
            })
            .collect();
        println!();
        println!("{} {}", "Tags:".bold(), vocabulary.join(" "));
    }

    if listing.has_active_filters {
        println!(
            "{}",
            "Filters active. Run `folio posts` without --search/--tag to clear them.".dimmed()
        );
    }
}

pub(super) fn print_post(post: &Post) {
    println!("{}", post.title.bold());
    let mut meta = vec![post.date.format("%B %-d, %Y").to_string()];
    if !post.read_time.is_empty() {
        meta.push(post.read_time.clone());
    }
    println!("{}", meta.join(" · ").dimmed());
    if !post.tags.is_empty() {
        let tags: Vec<String> = post.tags.iter().map(|t| format!("#{}", t)).collect();
        println!("{}", tags.join(" ").cyan());
    }
    println!();
    println!("{}", post.content.as_deref().unwrap_or(&post.excerpt));
}

pub(super) fn print_tags(tags: &[String]) {
    if tags.is_empty() {
        println!("No tags found.");
        return;
    }
    for tag in tags {
        println!("{}", tag);
    }
}

pub(super) fn print_publications(listing: &PublicationListing<'_>) {
    let tabs: Vec<String> = listing
        .counts
        .tabs()
        .into_iter()
        .map(|(selection, count)| {
            let tab = format!("{} ({})", selection.label(), count);
            if selection == listing.category {
                tab.bold().underline().to_string()
            } else {
                tab.dimmed().to_string()
            }
        })
        .collect();
    println!("{}", tabs.join("  "));

    if listing.is_empty() {
        println!();
        println!("No publications match your filters.");
        return;
    }

    for group in &listing.groups {
        println!();
        println!("{}", group.year.to_string().bold());
        for publication in &group.publications {
            print_publication(publication);
        }
    }
}

fn print_publication(publication: &Publication) {
    let width = LINE_WIDTH.saturating_sub(4);
    println!("  • {}", truncate_to_width(&publication.title, width));
    let authors = publication.author_line();
    if !authors.is_empty() {
        println!("    {}", truncate_to_width(&authors, width).dimmed());
    }
    let mut venue = vec![
        publication.venue.clone(),
        publication.kind.label().to_string(),
    ];
    venue.extend(publication.doi_url());
    println!("    {}", venue.join(" · ").italic());
}

pub(super) fn print_config(config: &FolioConfig) {
    for (key, value) in config.entries() {
        println!("{} = {}", key, value);
    }
}

pub(super) fn print_json<T: serde::Serialize>(value: &T) -> folio::error::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn format_date_ago(date: NaiveDate) -> String {
    let today = Utc::now().date_naive();
    let duration = today.signed_duration_since(date);

    let formatter = Formatter::new();
    let time_str = if duration.num_days() < 1 {
        "today".to_string()
    } else {
        formatter.convert(duration.to_std().unwrap_or_default())
    };

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_untouched() {
        assert_eq!(truncate_to_width("docker", 10), "docker");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        let out = truncate_to_width("Nextflow DSL2 modules", 10);
        assert_eq!(out, "Nextflow …");
        assert_eq!(out.width(), 10);
    }

    #[test]
    fn test_truncate_wide_chars() {
        let out = truncate_to_width("日本語のタイトル", 7);
        assert!(out.width() <= 7);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 4), "abcdef");
    }

    #[test]
    fn test_date_ago_today_and_past() {
        let today = Utc::now().date_naive();
        assert_eq!(format_date_ago(today).trim(), "today");
        let old = today - chrono::Duration::days(400);
        assert!(format_date_ago(old).contains("ago"));
        assert_eq!(format_date_ago(old).width(), TIME_WIDTH);
    }
}
