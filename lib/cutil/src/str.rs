//! String manipulation utilities.

/// Upper-cases the first character and lower-cases the rest.
///
/// # Examples
///
/// ```
/// use cutil::str::capitalize;
///
/// assert_eq!(capitalize("bulbasaur"), "Bulbasaur");
/// assert_eq!(capitalize("mr-MIME"), "Mr-mime");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();

    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Capitalizes every item and joins them with `sep`.
///
/// # Examples
///
/// ```
/// use cutil::str::join_capitalized;
///
/// assert_eq!(join_capitalized(&["grass", "poison"], ", "), "Grass, Poison");
/// ```
pub fn join_capitalized<S: AsRef<str>>(items: &[S], sep: &str) -> String {
    items
        .iter()
        .map(|item| capitalize(item.as_ref()))
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!("", capitalize(""));
        assert_eq!("A", capitalize("a"));
        assert_eq!("Ivysaur", capitalize("IVYSAUR"));
        assert_eq!("Ho-oh", capitalize("ho-oh"));
        assert_eq!("Élan", capitalize("élan"));
    }

    #[test]
    fn test_join_capitalized() {
        assert_eq!("", join_capitalized::<&str>(&[], ", "));
        assert_eq!("Overgrow", join_capitalized(&["overgrow"], ", "));
        assert_eq!(
            "Overgrow, Chlorophyll",
            join_capitalized(&["overgrow", "chlorophyll"], ", ")
        );
    }
}
