//! Tag aggregation
//!
//! Reads the `data-tags` string off every link, counts each tag, drops the
//! ones that only occur once and orders the rest by count, highest first.
//!
//! Malformed input never fails: absent attributes and empty tokens simply
//! contribute nothing.

use std::collections::HashMap;

use crate::config::TagCloudConfig;
use crate::types::{TagCount, TagCounts, TagSource};

/// Split a raw `data-tags` value into tokens, dropping empty ones
pub fn split_tags(raw: &str, config: &TagCloudConfig) -> Vec<String> {
    raw.split(config.separator)
        .map(|token| if config.trim_tokens { token.trim() } else { token })
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Count every token, keeping first-seen order
pub fn count_tags<I, S>(tokens: I) -> Vec<TagCount>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: Vec<TagCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for token in tokens {
        let token = token.as_ref();
        match index.get(token) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(token.to_string(), counts.len());
                counts.push(TagCount::new(token, 1));
            }
        }
    }

    counts
}

/// Order by count descending and keep tags with at least `min_count` hits
///
/// The sort is stable, so equal counts stay in first-seen order unless
/// `alphabetical_ties` is set.
pub fn rank_tags(mut counts: Vec<TagCount>, config: &TagCloudConfig) -> TagCounts {
    if config.alphabetical_ties {
        counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
    } else {
        counts.sort_by(|a, b| b.count.cmp(&a.count));
    }

    counts
        .into_iter()
        .filter(|entry| entry.count >= config.min_count)
        .collect()
}

/// Full pipeline over a link collection
pub fn sorted_tags_with<I, S>(links: I, config: &TagCloudConfig) -> TagCounts
where
    I: IntoIterator<Item = S>,
    S: TagSource,
{
    let all_tags = links
        .into_iter()
        .filter_map(|link| link.raw_tags())
        .flat_map(|raw| split_tags(&raw, config));

    rank_tags(count_tags(all_tags), config)
}

/// [`sorted_tags_with`] using the default configuration
pub fn sorted_tags<I, S>(links: I) -> TagCounts
where
    I: IntoIterator<Item = S>,
    S: TagSource,
{
    sorted_tags_with(links, &TagCloudConfig::default())
}
