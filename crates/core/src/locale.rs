//! Grouping of venues by (state, city) for the directory page.

use std::collections::HashMap;

use serde::Serialize;

/// Anything that sits in a (state, city) locale.
pub trait Locale {
    fn state(&self) -> &str;
    fn city(&self) -> &str;
}

/// A bucket of items sharing one exact (state, city) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleGroup<T> {
    pub state: String,
    pub city: String,
    pub venues: Vec<T>,
}

/// Group items by their (state, city) pair.
///
/// Keys compare by exact, case-sensitive string equality. Groups appear in
/// the order their key is first seen, and items keep input order within
/// their group.
pub fn group_by_locale<T, I>(items: I) -> Vec<LocaleGroup<T>>
where
    T: Locale,
    I: IntoIterator<Item = T>,
{
    let mut groups: Vec<LocaleGroup<T>> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for item in items {
        let key = (item.state().to_string(), item.city().to_string());
        match index.get(&key) {
            Some(&slot) => groups[slot].venues.push(item),
            None => {
                index.insert(key.clone(), groups.len());
                let (state, city) = key;
                groups.push(LocaleGroup {
                    state,
                    city,
                    venues: vec![item],
                });
            }
        }
    }

    groups
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Spot {
        name: &'static str,
        state: &'static str,
        city: &'static str,
    }

    impl Locale for Spot {
        fn state(&self) -> &str {
            self.state
        }
        fn city(&self) -> &str {
            self.city
        }
    }

    fn spot(name: &'static str, state: &'static str, city: &'static str) -> Spot {
        Spot { name, state, city }
    }

    fn names(group: &LocaleGroup<Spot>) -> Vec<&'static str> {
        group.venues.iter().map(|s| s.name).collect()
    }

    #[test]
    fn same_pair_shares_a_group() {
        let groups = group_by_locale(vec![
            spot("The Musical Hop", "CA", "San Francisco"),
            spot("The Dueling Pianos Bar", "NY", "New York"),
            spot("Park Square Live Music & Coffee", "CA", "San Francisco"),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(
            names(&groups[0]),
            vec!["The Musical Hop", "Park Square Live Music & Coffee"]
        );
        assert_eq!(names(&groups[1]), vec!["The Dueling Pianos Bar"]);
    }

    #[test]
    fn group_order_is_first_occurrence() {
        let groups = group_by_locale(vec![
            spot("a", "NY", "New York"),
            spot("b", "CA", "San Francisco"),
            spot("c", "NY", "New York"),
            spot("d", "WA", "Seattle"),
        ]);

        let keys: Vec<(&str, &str)> = groups
            .iter()
            .map(|g| (g.state.as_str(), g.city.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![("NY", "New York"), ("CA", "San Francisco"), ("WA", "Seattle")]
        );
    }

    #[test]
    fn same_city_in_different_states_is_split() {
        let groups = group_by_locale(vec![
            spot("a", "OR", "Portland"),
            spot("b", "ME", "Portland"),
        ]);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn keys_are_case_sensitive() {
        let groups = group_by_locale(vec![
            spot("a", "CA", "San Francisco"),
            spot("b", "CA", "san francisco"),
        ]);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn every_item_lands_in_exactly_one_group() {
        let input = vec![
            spot("a", "CA", "Oakland"),
            spot("b", "CA", "Oakland"),
            spot("c", "TX", "Austin"),
            spot("d", "CA", "Oakland"),
        ];
        let groups = group_by_locale(input.clone());

        let total: usize = groups.iter().map(|g| g.venues.len()).sum();
        assert_eq!(total, input.len());
        for group in &groups {
            assert!(group
                .venues
                .iter()
                .all(|s| s.state == group.state && s.city == group.city));
        }
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_locale(Vec::<Spot>::new()).is_empty());
    }
}
