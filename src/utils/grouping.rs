//! Alphabetical section grouping for indexed list displays

use std::collections::BTreeMap;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Items bucketed by first letter, sections sorted A-Z with "#" last
#[derive(Debug)]
pub struct GroupedSections<T> {
    pub sections: Vec<(String, Vec<T>)>,
}

impl<T> GroupedSections<T> {
    pub fn section_titles(&self) -> Vec<&str> {
        self.sections.iter().map(|(title, _)| title.as_str()).collect()
    }
}

/// Group items by the first letter of `key`, diacritic-insensitive;
/// anything that doesn't start with a letter lands in the "#" bucket.
pub fn group_alphabetically<T>(
    items: Vec<T>,
    key: impl Fn(&T) -> &str,
) -> GroupedSections<T> {
    let mut buckets: BTreeMap<String, Vec<T>> = BTreeMap::new();
    for item in items {
        let section = section_title(key(&item));
        buckets.entry(section).or_default().push(item);
    }

    let mut sections: Vec<(String, Vec<T>)> = buckets.into_iter().collect();
    if let Some(pos) = sections.iter().position(|(title, _)| title == "#") {
        let bucket = sections.remove(pos);
        sections.push(bucket);
    }

    GroupedSections { sections }
}

fn section_title(value: &str) -> String {
    // Decompose so "É" sections under "E"
    let Some(base) = value.trim().nfd().find(|c| !is_combining_mark(*c)) else {
        return "#".to_string();
    };
    if base.is_alphabetic() {
        base.to_uppercase().to_string()
    } else {
        "#".to_string()
    }
}
