//! # Room Repository
//!
//! The room catalog, kept in insertion order so listings match the order
//! rooms were added.

use serenity_core::{BookingError, BookingResult, Room, RoomCategory};

#[derive(Debug, Clone, Default)]
pub struct RoomRepository {
    rooms: Vec<Room>,
}

impl RoomRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a room. Fails if the number is already in the catalog.
    pub fn insert(&mut self, room: Room) -> BookingResult<&Room> {
        if self.contains(room.number) {
            return Err(BookingError::DuplicateRoomNumber(room.number));
        }
        self.rooms.push(room);
        let last = self.rooms.len() - 1;
        Ok(&self.rooms[last])
    }

    pub fn contains(&self, number: u32) -> bool {
        self.rooms.iter().any(|r| r.number == number)
    }

    pub fn get(&self, number: u32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.number == number)
    }

    pub fn get_mut(&mut self, number: u32) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.number == number)
    }

    /// Every room, in catalog order.
    pub fn all(&self) -> &[Room] {
        &self.rooms
    }

    /// Unbooked rooms, optionally restricted to one category.
    pub fn available(&self, category: Option<RoomCategory>) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|r| r.is_available())
            .filter(|r| category.map_or(true, |c| r.category == c))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn booked_count(&self) -> usize {
        self.rooms.iter().filter(|r| r.booked).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity_core::Money;

    fn room(number: u32, category: RoomCategory) -> Room {
        Room::new(number, "Test", Money::from_pesos(1000), 2, category)
    }

    #[test]
    fn test_insert_rejects_duplicate_number() {
        let mut repo = RoomRepository::new();
        repo.insert(room(1, RoomCategory::Standard)).unwrap();

        let err = repo.insert(room(1, RoomCategory::Deluxe)).unwrap_err();
        assert_eq!(err, BookingError::DuplicateRoomNumber(1));
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get(1).unwrap().category, RoomCategory::Standard);
    }

    #[test]
    fn test_catalog_order_is_insertion_order() {
        let mut repo = RoomRepository::new();
        repo.insert(room(301, RoomCategory::Suite)).unwrap();
        repo.insert(room(1, RoomCategory::Standard)).unwrap();

        let numbers: Vec<u32> = repo.all().iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![301, 1]);
    }

    #[test]
    fn test_available_filters_booked_and_category() {
        let mut repo = RoomRepository::new();
        repo.insert(room(1, RoomCategory::Standard)).unwrap();
        repo.insert(room(2, RoomCategory::Standard)).unwrap();
        repo.insert(room(301, RoomCategory::Suite)).unwrap();
        repo.get_mut(1).unwrap().booked = true;

        assert_eq!(repo.available(None).len(), 2);
        let standard = repo.available(Some(RoomCategory::Standard));
        assert_eq!(standard.len(), 1);
        assert_eq!(standard[0].number, 2);
        assert_eq!(repo.booked_count(), 1);
    }
}
