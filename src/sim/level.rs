//! Level catalog
//!
//! Levels are immutable definitions loaded once at startup. Coins and enemies
//! are stored as spawn points; their runtime state lives in the session.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::error::GameError;
use crate::tuning::Tuning;

/// Level identifier (1-based, successor of `n` is `n + 1`)
pub type LevelId = u32;

/// Catalog shipped with the game
const BUILTIN_LEVELS: &str = include_str!("../../assets/levels.json");

/// A static solid rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(Vec2::new(self.x, self.y), Vec2::new(self.width, self.height))
    }
}

/// One level definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub id: LevelId,
    pub name: String,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub platforms: Vec<Platform>,
    /// Coin spawn points (top-left corner), addressed by index
    #[serde(default)]
    pub coins: Vec<Vec2>,
    /// Enemy spawn points (top-left corner), addressed by index
    #[serde(default)]
    pub enemies: Vec<Vec2>,
}

impl Level {
    /// Largest x the player's left edge may reach
    pub fn max_x(&self, player_size: f32) -> f32 {
        self.width - player_size
    }

    /// Largest y the player's top edge may reach (world floor)
    pub fn max_y(&self, player_size: f32) -> f32 {
        self.height - player_size
    }

    fn validate(&self, tuning: &Tuning) -> Result<(), GameError> {
        let size = tuning.player_size;
        let fits = self.width >= tuning.spawn.x + size
            && self.height >= tuning.spawn.y + size
            && tuning.spawn.x >= 0.0;
        if !fits {
            return Err(GameError::LevelTooSmall {
                id: self.id,
                width: self.width,
                height: self.height,
            });
        }

        if let Some(index) = self
            .platforms
            .iter()
            .position(|p| !(p.width > 0.0 && p.height > 0.0))
        {
            return Err(GameError::DegeneratePlatform {
                level: self.id,
                index,
            });
        }

        Ok(())
    }
}

/// Ordered, read-only collection of levels
#[derive(Debug, Clone, PartialEq)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    /// Build a catalog, rejecting empty lists and duplicate ids
    pub fn new(levels: Vec<Level>) -> Result<Self, GameError> {
        if levels.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        for (i, level) in levels.iter().enumerate() {
            if levels[..i].iter().any(|l| l.id == level.id) {
                return Err(GameError::DuplicateLevel(level.id));
            }
        }
        Ok(Self { levels })
    }

    /// Parse a JSON array of levels
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let levels: Vec<Level> = serde_json::from_str(json)?;
        Self::new(levels)
    }

    /// The catalog embedded in the binary
    pub fn builtin() -> Result<Self, GameError> {
        Self::from_json(BUILTIN_LEVELS)
    }

    /// Check every level against the physics tuning
    pub fn validate(&self, tuning: &Tuning) -> Result<(), GameError> {
        self.levels.iter().try_for_each(|level| level.validate(tuning))
    }

    pub fn get(&self, id: LevelId) -> Option<&Level> {
        self.levels.iter().find(|l| l.id == id)
    }

    pub fn contains(&self, id: LevelId) -> bool {
        self.get(id).is_some()
    }

    /// Identifier of the first level in catalog order (always unlocked)
    pub fn first_id(&self) -> LevelId {
        // Non-empty by construction
        self.levels[0].id
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(id: LevelId) -> Level {
        Level {
            id,
            name: format!("Level {id}"),
            width: 400.0,
            height: 300.0,
            platforms: vec![Platform::new(0.0, 280.0, 400.0, 20.0)],
            coins: vec![],
            enemies: vec![],
        }
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = LevelCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.first_id(), 1);

        let first = catalog.get(1).unwrap();
        assert_eq!(first.name, "Level 1");
        assert_eq!((first.width, first.height), (800.0, 400.0));
        assert_eq!(first.platforms[0], Platform::new(0.0, 380.0, 800.0, 20.0));
        assert_eq!(first.coins.len(), 3);
        assert_eq!(first.coins[0], Vec2::new(200.0, 300.0));
        assert_eq!(first.enemies, vec![Vec2::new(450.0, 350.0)]);

        let second = catalog.get(2).unwrap();
        assert_eq!(second.enemies.len(), 2);
        assert_eq!(second.platforms.len(), 3);

        catalog.validate(&Tuning::default()).unwrap();
    }

    #[test]
    fn test_lookup_missing_level() {
        let catalog = LevelCatalog::builtin().unwrap();
        assert!(catalog.get(3).is_none());
        assert!(!catalog.contains(0));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            LevelCatalog::new(vec![]),
            Err(GameError::EmptyCatalog)
        ));
        assert!(matches!(
            LevelCatalog::from_json("[]"),
            Err(GameError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = LevelCatalog::new(vec![level(1), level(2), level(1)]).unwrap_err();
        assert!(matches!(err, GameError::DuplicateLevel(1)));
    }

    #[test]
    fn test_degenerate_platform_rejected() {
        let mut bad = level(1);
        bad.platforms.push(Platform::new(10.0, 10.0, 0.0, 5.0));
        let catalog = LevelCatalog::new(vec![bad]).unwrap();
        let err = catalog.validate(&Tuning::default()).unwrap_err();
        assert!(matches!(err, GameError::DegeneratePlatform { level: 1, index: 1 }));
    }

    #[test]
    fn test_optional_lists_default_empty() {
        let json = r#"[{ "id": 7, "name": "Empty", "width": 200.0, "height": 100.0 }]"#;
        let catalog = LevelCatalog::from_json(json).unwrap();
        let level = catalog.get(7).unwrap();
        assert!(level.platforms.is_empty());
        assert!(level.coins.is_empty());
        assert!(level.enemies.is_empty());
    }

    #[test]
    fn test_bounds_helpers() {
        let level = level(1);
        assert_eq!(level.max_x(30.0), 370.0);
        assert_eq!(level.max_y(30.0), 270.0);
    }
}
