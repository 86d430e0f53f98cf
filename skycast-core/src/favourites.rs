use crate::error::FavouritesError;

/// Maximum number of favourite cities.
pub const MAX_FAVOURITES: usize = 3;

/// Ordered, capacity-bounded list of favourite city names.
///
/// Entries are canonical names as returned by the API and are compared with
/// exact, case-sensitive matching. The list exists only for the process
/// lifetime; it starts empty and is never persisted.
#[derive(Debug, Clone, Default)]
pub struct Favourites {
    cities: Vec<String>,
}

impl Favourites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cities.len() >= MAX_FAVOURITES
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cities.iter().any(|c| c == name)
    }

    /// Append a canonical city name.
    ///
    /// Callers must have validated the name through a successful lookup
    /// first; the store only enforces capacity and uniqueness.
    pub fn add(&mut self, canonical: String) -> Result<(), FavouritesError> {
        if self.is_full() {
            return Err(FavouritesError::CapacityExceeded);
        }
        if self.contains(&canonical) {
            return Err(FavouritesError::Duplicate(canonical));
        }
        self.cities.push(canonical);
        Ok(())
    }

    /// Remove the entry at a 1-based position, as displayed to the user.
    ///
    /// Relative order of the remaining entries is preserved.
    pub fn remove_at(&mut self, position: usize) -> Result<String, FavouritesError> {
        if !(1..=self.cities.len()).contains(&position) {
            return Err(FavouritesError::OutOfRange(position));
        }
        Ok(self.cities.remove(position - 1))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.cities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_cities(names: &[&str]) -> Favourites {
        let mut favourites = Favourites::new();
        for name in names {
            favourites.add((*name).to_string()).expect("setup add should succeed");
        }
        favourites
    }

    #[test]
    fn starts_empty() {
        let favourites = Favourites::new();
        assert!(favourites.is_empty());
        assert_eq!(favourites.as_slice(), &[] as &[String]);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let favourites = with_cities(&["Paris", "Tokyo", "Lagos"]);
        assert_eq!(favourites.as_slice(), ["Paris", "Tokyo", "Lagos"]);
    }

    #[test]
    fn add_rejects_beyond_capacity() {
        let mut favourites = with_cities(&["Paris", "Tokyo", "Lagos"]);
        let err = favourites.add("Berlin".to_string()).unwrap_err();
        assert_eq!(err, FavouritesError::CapacityExceeded);
        assert_eq!(favourites.as_slice(), ["Paris", "Tokyo", "Lagos"]);
    }

    #[test]
    fn add_rejects_exact_duplicates() {
        let mut favourites = with_cities(&["Paris"]);
        let err = favourites.add("Paris".to_string()).unwrap_err();
        assert_eq!(err, FavouritesError::Duplicate("Paris".to_string()));
        assert_eq!(favourites.len(), 1);
    }

    #[test]
    fn duplicate_check_is_case_sensitive() {
        let mut favourites = with_cities(&["Paris"]);
        assert!(favourites.add("paris".to_string()).is_ok());
        assert_eq!(favourites.as_slice(), ["Paris", "paris"]);
    }

    #[test]
    fn remove_at_is_one_based_and_keeps_order() {
        let mut favourites = with_cities(&["Paris", "Tokyo", "Lagos"]);
        let removed = favourites.remove_at(2).expect("position 2 is valid");
        assert_eq!(removed, "Tokyo");
        assert_eq!(favourites.as_slice(), ["Paris", "Lagos"]);
    }

    #[test]
    fn remove_at_rejects_zero_and_past_end() {
        let mut favourites = with_cities(&["Paris", "Tokyo"]);
        assert_eq!(favourites.remove_at(0).unwrap_err(), FavouritesError::OutOfRange(0));
        assert_eq!(favourites.remove_at(3).unwrap_err(), FavouritesError::OutOfRange(3));
        assert_eq!(favourites.as_slice(), ["Paris", "Tokyo"]);
    }

    #[test]
    fn remove_shrinks_length_by_exactly_one() {
        let mut favourites = with_cities(&["Paris", "Tokyo", "Lagos"]);
        let before = favourites.len();
        favourites.remove_at(1).expect("position 1 is valid");
        assert_eq!(favourites.len(), before - 1);
    }

    #[test]
    fn update_without_replacement_is_not_rolled_back() {
        // The update flow commits the removal before validating the new
        // city, so a failed replacement leaves one fewer favourite.
        let mut favourites = with_cities(&["Paris", "Tokyo"]);
        favourites.remove_at(1).expect("position 1 is valid");
        // Replacement lookup fails here; no add happens.
        assert_eq!(favourites.as_slice(), ["Tokyo"]);
    }

    #[test]
    fn update_with_replacement_appends_at_the_end() {
        let mut favourites = with_cities(&["Paris", "Tokyo"]);
        let removed = favourites.remove_at(1).expect("position 1 is valid");
        assert_eq!(removed, "Paris");
        favourites.add("Berlin".to_string()).expect("add should succeed");
        assert_eq!(favourites.as_slice(), ["Tokyo", "Berlin"]);
    }
}
