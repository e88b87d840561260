use crate::model::Meal;

/// Meals whose name starts with `query`, ignoring case.
///
/// A blank query returns every meal. Otherwise the query is matched as typed,
/// surrounding whitespace included. Matching is prefix-only and the input
/// order is preserved.
pub fn filter_meals(meals: &[Meal], query: &str) -> Vec<Meal> {
    if query.trim().is_empty() {
        return meals.to_vec();
    }
    let query = query.to_lowercase();

    meals
        .iter()
        .filter(|meal| meal.name.to_lowercase().starts_with(&query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meals(names: &[&str]) -> Vec<Meal> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Meal {
                id: i.to_string(),
                name: name.to_string(),
                thumbnail_url: String::new(),
                instructions: None,
                ingredients: vec![],
            })
            .collect()
    }

    fn names(meals: &[Meal]) -> Vec<&str> {
        meals.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let all = meals(&["Chocolate Cake", "Apple Pie", "chocolate Mousse"]);
        assert_eq!(filter_meals(&all, ""), all);
        assert_eq!(filter_meals(&all, "   "), all);
    }

    #[test]
    fn test_prefix_is_case_insensitive() {
        let all = meals(&["Chocolate Cake", "Apple Pie", "chocolate Mousse"]);
        let filtered = filter_meals(&all, "choc");
        assert_eq!(names(&filtered), vec!["Chocolate Cake", "chocolate Mousse"]);

        let filtered = filter_meals(&all, "CHOC");
        assert_eq!(names(&filtered), vec!["Chocolate Cake", "chocolate Mousse"]);
    }

    #[test]
    fn test_substring_does_not_match() {
        let all = meals(&["White Chocolate Creme Brulee", "Chocolate Gateau"]);
        let filtered = filter_meals(&all, "choc");
        assert_eq!(names(&filtered), vec!["Chocolate Gateau"]);
    }

    #[test]
    fn test_no_match() {
        let all = meals(&["Apple Pie"]);
        assert!(filter_meals(&all, "zz").is_empty());
    }

    #[test]
    fn test_whitespace_in_query_is_significant() {
        let all = meals(&["Apple Pie", "Applesauce Cake", " Apple Tart"]);

        let filtered = filter_meals(&all, "apple ");
        assert_eq!(names(&filtered), vec!["Apple Pie"]);

        let filtered = filter_meals(&all, " apple");
        assert_eq!(names(&filtered), vec![" Apple Tart"]);
    }
}
