//! In-memory character collection.
//!
//! [`CharacterStore`] owns the ordered list of characters and the id
//! counter. It performs no locking itself; callers that share it across
//! tasks wrap it in a lock (see `roster_api::state::AppState`).

use crate::character::{Character, CharacterInput, ENTITY};
use crate::error::CoreError;
use crate::types::DbId;

/// Records present when the service starts.
const SEED: &[(&str, &str, &str)] = &[
    ("Tony Stark", "Iron Man", "Genius-level intellect"),
    (
        "Steve Rogers",
        "Captain America",
        "Enhanced strength and agility",
    ),
];

/// Ordered, id-addressed collection of characters.
///
/// Ids are handed out from a monotonically increasing counter and are never
/// reused, even after the record holding one is deleted.
#[derive(Debug)]
pub struct CharacterStore {
    characters: Vec<Character>,
    next_id: DbId,
}

impl Default for CharacterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterStore {
    /// Create an empty store whose first assigned id is 1.
    pub fn new() -> Self {
        Self {
            characters: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store holding the two startup records (ids 1 and 2).
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (name, alias, superpower) in SEED {
            store.create(CharacterInput {
                name: Some((*name).to_string()),
                alias: Some((*alias).to_string()),
                superpower: Some((*superpower).to_string()),
                ..Default::default()
            });
        }
        store
    }

    /// All characters in insertion order.
    pub fn list(&self) -> &[Character] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// The id the next `create` will assign.
    pub fn next_id(&self) -> DbId {
        self.next_id
    }

    pub fn get(&self, id: DbId) -> Result<&Character, CoreError> {
        self.characters
            .iter()
            .find(|c| c.id == id)
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }

    /// Append a new character under the next id. Any id in `input` is ignored.
    pub fn create(&mut self, input: CharacterInput) -> Character {
        let character = input.into_character(self.next_id);
        self.next_id += 1;
        self.characters.push(character.clone());
        character
    }

    /// Replace every field of the character with `id`, keeping `id` itself.
    pub fn update(&mut self, id: DbId, input: CharacterInput) -> Result<Character, CoreError> {
        let slot = self
            .characters
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        *slot = input.into_character(id);
        Ok(slot.clone())
    }

    /// Remove the character with `id`, preserving the order of the rest.
    pub fn delete(&mut self, id: DbId) -> Result<Character, CoreError> {
        let index = self
            .characters
            .iter()
            .position(|c| c.id == id)
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        Ok(self.characters.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn input(name: &str, alias: &str, superpower: &str) -> CharacterInput {
        CharacterInput {
            name: Some(name.to_string()),
            alias: Some(alias.to_string()),
            superpower: Some(superpower.to_string()),
            ..Default::default()
        }
    }

    fn ids(store: &CharacterStore) -> Vec<DbId> {
        store.list().iter().map(|c| c.id).collect()
    }

    #[test]
    fn new_store_is_empty() {
        let store = CharacterStore::new();
        assert!(store.is_empty());
        assert_eq!(store.next_id(), 1);
    }

    #[test]
    fn seeded_store_holds_two_records() {
        let store = CharacterStore::seeded();

        assert_eq!(ids(&store), vec![1, 2]);
        assert_eq!(store.next_id(), 3);
        assert_eq!(store.get(1).unwrap().name, "Tony Stark");
        assert_eq!(store.get(1).unwrap().alias, "Iron Man");
        assert_eq!(store.get(2).unwrap().name, "Steve Rogers");
        assert_eq!(store.get(2).unwrap().superpower, "Enhanced strength and agility");
    }

    #[test]
    fn create_assigns_increasing_ids_and_ignores_payload_id() {
        let mut store = CharacterStore::seeded();

        let natasha = store.create(CharacterInput {
            id: Some(1),
            ..input("Natasha Romanoff", "Black Widow", "Peak human agility")
        });
        let bruce = store.create(input("Bruce Banner", "Hulk", "Gamma strength"));

        assert_eq!(natasha.id, 3);
        assert_eq!(bruce.id, 4);
        assert_eq!(store.get(3).unwrap(), &natasha);
        assert_eq!(ids(&store), vec![1, 2, 3, 4]);
    }

    #[test]
    fn get_missing_id_is_not_found() {
        let store = CharacterStore::seeded();
        assert_matches!(
            store.get(99),
            Err(CoreError::NotFound { entity: "Character", id: 99 })
        );
    }

    #[test]
    fn update_replaces_fields_wholesale_and_keeps_id() {
        let mut store = CharacterStore::seeded();

        let updated = store
            .update(
                2,
                CharacterInput {
                    id: Some(42),
                    name: Some("Sam Wilson".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.id, 2);
        assert_eq!(updated.name, "Sam Wilson");
        assert_eq!(updated.alias, "");
        assert_eq!(updated.superpower, "");
        assert_eq!(store.get(2).unwrap(), &updated);
        assert_matches!(store.get(42), Err(CoreError::NotFound { .. }));
    }

    #[test]
    fn update_missing_id_is_not_found_and_leaves_store_untouched() {
        let mut store = CharacterStore::seeded();
        assert_matches!(
            store.update(7, input("Nobody", "", "")),
            Err(CoreError::NotFound { id: 7, .. })
        );
        assert_eq!(ids(&store), vec![1, 2]);
        assert_eq!(store.next_id(), 3);
    }

    #[test]
    fn delete_preserves_relative_order() {
        let mut store = CharacterStore::seeded();
        store.create(input("Natasha Romanoff", "Black Widow", "Peak human agility"));
        store.create(input("Bruce Banner", "Hulk", "Gamma strength"));

        let removed = store.delete(2).unwrap();

        assert_eq!(removed.name, "Steve Rogers");
        assert_eq!(ids(&store), vec![1, 3, 4]);
    }

    #[test]
    fn delete_missing_id_is_not_found() {
        let mut store = CharacterStore::seeded();
        store.delete(1).unwrap();

        assert_matches!(store.delete(1), Err(CoreError::NotFound { id: 1, .. }));
        assert_eq!(ids(&store), vec![2]);
    }

    #[test]
    fn deleted_ids_are_never_reused() {
        let mut store = CharacterStore::seeded();
        store.delete(2).unwrap();
        store.delete(1).unwrap();

        let next = store.create(input("Wanda Maximoff", "Scarlet Witch", "Chaos magic"));

        assert_eq!(next.id, 3);
        assert_eq!(ids(&store), vec![3]);
    }
}
