//! "Did you mean" helpers for validation messages.

const MAX_SUGGESTIONS: usize = 5;

/// The options close enough to `input` to suggest, closest first.
pub(crate) fn suggestion_list<'a>(
    input: &str,
    options: impl IntoIterator<Item = &'a str>,
) -> Vec<&'a str> {
    let input_threshold = input.chars().count() as f64 / 2.0;
    let mut by_distance: Vec<(usize, &'a str)> = options
        .into_iter()
        .filter_map(|option| {
            let distance = lexical_distance(input, option);
            let threshold = input_threshold
                .max(option.chars().count() as f64 / 2.0)
                .max(1.0);
            (distance as f64 <= threshold).then_some((distance, option))
        })
        .collect();
    by_distance.sort_by_key(|(distance, _)| *distance);
    by_distance.into_iter().map(|(_, option)| option).collect()
}

/// Damerau-Levenshtein (optimal string alignment) distance. Strings that
/// differ only in case are distance 1 apart.
fn lexical_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();
    if a_lower == b_lower {
        return 1;
    }

    let a: Vec<char> = a_lower.chars().collect();
    let b: Vec<char> = b_lower.chars().collect();
    let mut d = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in d[0].iter_mut().enumerate() {
        *cell = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                d[i][j] = d[i][j].min(d[i - 2][j - 2] + cost);
            }
        }
    }
    d[a.len()][b.len()]
}

/// `"A"`, `"A" or "B"`, `"A", "B", or "C"`; at most five items.
pub(crate) fn quoted_or_list<S: AsRef<str>>(items: &[S]) -> String {
    let selected: Vec<String> = items
        .iter()
        .take(MAX_SUGGESTIONS)
        .map(|item| format!("\"{}\"", item.as_ref()))
        .collect();
    let separator = if selected.len() > 2 { ", " } else { " " };
    let mut list = String::new();
    for (index, quoted) in selected.iter().enumerate() {
        if index > 0 {
            list.push_str(separator);
            if index == selected.len() - 1 {
                list.push_str("or ");
            }
        }
        list.push_str(quoted);
    }
    list
}
