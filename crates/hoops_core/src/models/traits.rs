//! Badges.
//!
//! Each trait boosts a fixed set of shot types (its predicate) and some
//! carry a non-shooting effect (rebounding, conditioning, passing, steals).
//! The tier scales every effect.

use serde::{Deserialize, Serialize};

use super::shot::ShotType;

/// Four-tier progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TraitTier {
    #[default]
    Bronze,
    Silver,
    Gold,
    HallOfFame,
}

impl TraitTier {
    pub fn scale(self) -> f32 {
        match self {
            TraitTier::Bronze => 0.5,
            TraitTier::Silver => 0.75,
            TraitTier::Gold => 1.0,
            TraitTier::HallOfFame => 1.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitCategory {
    Shooting,
    Finishing,
    Playmaking,
    Defense,
    Rebounding,
    Physical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitId {
    // === Shooting ===
    LimitlessRange,
    CatchAndShoot,
    CornerSpecialist,
    MidRangeMaestro,
    FreeThrowAce,
    // === Finishing ===
    Slasher,
    Posterizer,
    PostScorer,
    LobThreat,
    // === Playmaking ===
    FloorGeneral,
    // === Defense ===
    Pickpocket,
    // === Rebounding ===
    GlassCleaner,
    // === Physical ===
    Motor,
}

impl TraitId {
    pub fn all() -> &'static [TraitId] {
        &[
            TraitId::LimitlessRange,
            TraitId::CatchAndShoot,
            TraitId::CornerSpecialist,
            TraitId::MidRangeMaestro,
            TraitId::FreeThrowAce,
            TraitId::Slasher,
            TraitId::Posterizer,
            TraitId::PostScorer,
            TraitId::LobThreat,
            TraitId::FloorGeneral,
            TraitId::Pickpocket,
            TraitId::GlassCleaner,
            TraitId::Motor,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            TraitId::LimitlessRange => "Limitless Range",
            TraitId::CatchAndShoot => "Catch & Shoot",
            TraitId::CornerSpecialist => "Corner Specialist",
            TraitId::MidRangeMaestro => "Mid-Range Maestro",
            TraitId::FreeThrowAce => "Free Throw Ace",
            TraitId::Slasher => "Slasher",
            TraitId::Posterizer => "Posterizer",
            TraitId::PostScorer => "Post Scorer",
            TraitId::LobThreat => "Lob Threat",
            TraitId::FloorGeneral => "Floor General",
            TraitId::Pickpocket => "Pickpocket",
            TraitId::GlassCleaner => "Glass Cleaner",
            TraitId::Motor => "Motor",
        }
    }

    pub fn category(self) -> TraitCategory {
        match self {
            TraitId::LimitlessRange
            | TraitId::CatchAndShoot
            | TraitId::CornerSpecialist
            | TraitId::MidRangeMaestro
            | TraitId::FreeThrowAce => TraitCategory::Shooting,
            TraitId::Slasher | TraitId::Posterizer | TraitId::PostScorer | TraitId::LobThreat => {
                TraitCategory::Finishing
            }
            TraitId::FloorGeneral => TraitCategory::Playmaking,
            TraitId::Pickpocket => TraitCategory::Defense,
            TraitId::GlassCleaner => TraitCategory::Rebounding,
            TraitId::Motor => TraitCategory::Physical,
        }
    }

    /// Predicate: does this badge boost `shot`?
    pub fn boosts(self, shot: ShotType) -> bool {
        use ShotType::*;
        match self {
            TraitId::LimitlessRange => {
                matches!(shot, ThreePointDeep | ThreePointStepBack | ThreePointPullUp)
            }
            TraitId::CatchAndShoot => matches!(
                shot,
                ThreePointCatchAndShoot | ThreePointCorner | MidRangeCatchAndShoot
            ),
            TraitId::CornerSpecialist => shot == ThreePointCorner,
            TraitId::MidRangeMaestro => {
                matches!(shot, MidRangePullUp | MidRangeCatchAndShoot | PostFade)
            }
            TraitId::FreeThrowAce => shot == FreeThrow,
            TraitId::Slasher => matches!(shot, Layup | Floater),
            TraitId::Posterizer => matches!(shot, Dunk | AlleyOop),
            TraitId::PostScorer => matches!(shot, HookShot | PostFade),
            TraitId::LobThreat => shot == AlleyOop,
            TraitId::GlassCleaner => matches!(shot, Putback | TipIn),
            TraitId::FloorGeneral | TraitId::Pickpocket | TraitId::Motor => false,
        }
    }

    /// Gold-tier make-probability bonus for boosted shots.
    fn shot_bonus(self) -> f32 {
        match self {
            TraitId::LimitlessRange => 0.10,
            TraitId::CatchAndShoot => 0.08,
            TraitId::CornerSpecialist => 0.12,
            TraitId::MidRangeMaestro => 0.08,
            TraitId::FreeThrowAce => 0.06,
            TraitId::Slasher => 0.08,
            TraitId::Posterizer => 0.05,
            TraitId::PostScorer => 0.08,
            TraitId::LobThreat => 0.08,
            TraitId::GlassCleaner => 0.08,
            TraitId::FloorGeneral | TraitId::Pickpocket | TraitId::Motor => 0.0,
        }
    }
}

/// An equipped badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerTrait {
    pub id: TraitId,
    #[serde(default)]
    pub tier: TraitTier,
}

impl PlayerTrait {
    pub fn new(id: TraitId, tier: TraitTier) -> Self {
        Self { id, tier }
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    pub fn category(&self) -> TraitCategory {
        self.id.category()
    }

    /// Multiplier for `shot`, 1.0 when the badge does not apply.
    pub fn shot_multiplier(&self, shot: ShotType) -> f32 {
        if self.id.boosts(shot) {
            1.0 + self.id.shot_bonus() * self.tier.scale()
        } else {
            1.0
        }
    }
}

/// Highest tier of `id` among `traits`, if equipped.
pub fn equipped_tier(traits: &[PlayerTrait], id: TraitId) -> Option<TraitTier> {
    traits.iter().filter(|t| t.id == id).map(|t| t.tier).max()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_scales_bonus() {
        let bronze = PlayerTrait::new(TraitId::CornerSpecialist, TraitTier::Bronze);
        let hof = PlayerTrait::new(TraitId::CornerSpecialist, TraitTier::HallOfFame);
        let shot = ShotType::ThreePointCorner;
        assert!((bronze.shot_multiplier(shot) - 1.06).abs() < 1e-6);
        assert!((hof.shot_multiplier(shot) - 1.18).abs() < 1e-6);
    }

    #[test]
    fn predicate_limits_boost() {
        let slasher = PlayerTrait::new(TraitId::Slasher, TraitTier::Gold);
        assert!(slasher.shot_multiplier(ShotType::Layup) > 1.0);
        assert_eq!(slasher.shot_multiplier(ShotType::ThreePointDeep), 1.0);
    }

    #[test]
    fn every_trait_has_a_category() {
        for id in TraitId::all() {
            let _ = id.category();
            assert!(!id.name().is_empty());
        }
    }

    #[test]
    fn equipped_tier_picks_highest() {
        let traits = [
            PlayerTrait::new(TraitId::Motor, TraitTier::Bronze),
            PlayerTrait::new(TraitId::Motor, TraitTier::Gold),
        ];
        assert_eq!(equipped_tier(&traits, TraitId::Motor), Some(TraitTier::Gold));
        assert_eq!(equipped_tier(&traits, TraitId::GlassCleaner), None);
    }
}
