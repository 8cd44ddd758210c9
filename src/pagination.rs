pub const QUESTIONS_PER_PAGE: usize = 10;

pub fn first_page() -> i64 {
    1
}

/// Returns the 1-based `page` of `items`, at most [`QUESTIONS_PER_PAGE`] long.
///
/// Pages past the end, and pages below 1, are empty.
pub fn paginate<T>(items: Vec<T>, page: i64) -> Vec<T> {
    let Some(start) = page
        .checked_sub(1)
        .and_then(|index| usize::try_from(index).ok())
        .and_then(|index| index.checked_mul(QUESTIONS_PER_PAGE))
    else {
        return Vec::new();
    };
    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}
