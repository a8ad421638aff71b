//! Assembly of the final index document.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use itertools::Itertools;
use regex::Regex;

use crate::domain::entities::DirectoryNode;
use crate::domain::render::render_node;

/// Heading level for the contents of a topic; the topic heading itself
/// sits one level above at `###`.
const TOPIC_CONTENT_LEVEL: usize = 4;

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// GitHub-style anchor for a topic heading: lowercased, whitespace runs
/// collapsed to a single dash. Punctuation is left untouched, so topic
/// names containing punctuation can produce anchors that miss the real
/// heading anchor. Known limitation, kept as-is.
pub fn make_anchor(text: &str) -> String {
    whitespace_runs()
        .replace_all(&text.to_lowercase(), "-")
        .into_owned()
}

/// Combine all topic hierarchies into the full index text.
///
/// Categories lists one anchor link per topic; Articles holds the
/// per-topic outlines. Topics appear in case-insensitive name order in
/// both sections, and an empty topic still gets its entry and heading.
pub fn assemble(topics: &BTreeMap<String, DirectoryNode>) -> String {
    let sorted_names: Vec<&String> = topics.keys().sorted_by_key(|n| n.to_lowercase()).collect();

    let categories = sorted_names
        .iter()
        .map(|name| format!("- [{}](#{})", name, make_anchor(name)))
        .join("\n");

    let mut articles_lines: Vec<String> = Vec::new();
    for name in &sorted_names {
        articles_lines.push(format!("### {}", name));
        articles_lines.push(render_node(&topics[*name], TOPIC_CONTENT_LEVEL, name));
    }
    let articles = articles_lines.join("\n");

    format!(
        "# TIL (Today I Learned)\n\
         \n\
         Short write-ups of things I learn day to day.\n\
         \n\
         These are personal study notes and carry no guarantee of correctness.\n\
         \n\
         NOTE: This file is auto-generated. Do not edit it by hand.\n\
         \n\
         ## Categories\n\
         {}\n\
         \n\
         ## Articles\n\
         {}\n",
        categories, articles
    )
}
