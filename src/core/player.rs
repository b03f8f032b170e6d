//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Every game in this crate is played by exactly two seats. `PlayerId` is an
//! opaque two-valued identity; games give the seats their own names
//! (X/O, Red/Yellow, Player 1/Player 2) through a `PlayerMap<String>`.
//!
//! ## PlayerMap
//!
//! Fixed two-entry per-player storage, indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the board.
///
/// The first player is `PlayerId::FIRST`; which seat opens a game is decided
/// by each engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The seat that moves first in every engine of this crate.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The other seat.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Get the raw player index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player who moves after this one.
    ///
    /// ```
    /// use rust_boardgames::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::FIRST.next(), PlayerId::SECOND);
    /// assert_eq!(PlayerId::SECOND.next(), PlayerId::FIRST);
    /// ```
    #[must_use]
    pub const fn next(self) -> Self {
        PlayerId(1 - self.0)
    }

    /// Both seats, first player first.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [PlayerId::FIRST, PlayerId::SECOND].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// Always holds exactly one entry per seat. Use `PlayerMap::new()` with a
/// factory, `PlayerMap::pair()` for explicit values, or
/// `PlayerMap::with_value()` to initialise both entries alike.
///
/// ## Example
///
/// ```
/// use rust_boardgames::core::{PlayerId, PlayerMap};
///
/// let mut score: PlayerMap<u32> = PlayerMap::with_default();
/// score[PlayerId::SECOND] += 2;
///
/// assert_eq!(score[PlayerId::FIRST], 0);
/// assert_eq!(score[PlayerId::SECOND], 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Create a PlayerMap from the first and second player's values.
    pub fn pair(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Create a PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::FIRST.index(), 0);
        assert_eq!(PlayerId::SECOND.index(), 1);
        assert_eq!(format!("{}", PlayerId::FIRST), "Player 1");
        assert_eq!(format!("{}", PlayerId::SECOND), "Player 2");
    }

    #[test]
    fn test_player_id_next_alternates() {
        let p = PlayerId::FIRST;
        assert_eq!(p.next().next(), p);
        assert_ne!(p.next(), p);
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all().collect();
        assert_eq!(players, vec![PlayerId::FIRST, PlayerId::SECOND]);
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.index() * 10);

        assert_eq!(map[PlayerId::FIRST], 0);
        assert_eq!(map[PlayerId::SECOND], 10);
    }

    #[test]
    fn test_player_map_pair() {
        let names = PlayerMap::pair("X".to_string(), "O".to_string());

        assert_eq!(names[PlayerId::FIRST], "X");
        assert_eq!(names[PlayerId::SECOND], "O");
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(0);

        map[PlayerId::FIRST] = 10;
        *map.get_mut(PlayerId::SECOND) += 20;

        assert_eq!(map[PlayerId::FIRST], 10);
        assert_eq!(map[PlayerId::SECOND], 20);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::pair(3, 4);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::FIRST, &3), (PlayerId::SECOND, &4)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u32> = PlayerMap::pair(1, 2);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
